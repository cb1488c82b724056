//! Fetch the full reference dataset and persist it for later `--data` use.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use vacances_scolaires::{CsvText, HolidayCalendar};

/// Download the CSV at `url` and write it to `output`.
///
/// The body is loaded into a calendar before anything is written, so a
/// response that is not a valid dataset never replaces an existing file.
/// Returns the calendar built from the downloaded data.
pub fn download(url: &str, output: &Path) -> Result<HolidayCalendar> {
    info!(url, output = %output.display(), "downloading holiday dataset");

    let body = reqwest::blocking::get(url)
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("GET {}", url))?
        .text()
        .with_context(|| format!("reading body from {}", url))?;

    let calendar = HolidayCalendar::load(&CsvText(&body))
        .with_context(|| format!("{} did not return a valid holiday dataset", url))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, body.as_bytes())
        .with_context(|| format!("Failed to write file: {}", output.display()))?;

    info!(
        records = calendar.len(),
        bytes = body.len(),
        "holiday dataset saved"
    );
    Ok(calendar)
}
