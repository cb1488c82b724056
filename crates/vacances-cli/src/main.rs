//! `vacances` CLI — query French school-holiday calendars from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Is a date a holiday anywhere / in a given zone?
//! vacances is-holiday 2023-12-25 2024-03-19
//! vacances is-holiday 2024-02-12 --zone C
//!
//! # Holidays of a year, optionally by zone and holiday name
//! vacances year 2024 --zone A --name "Vacances d'hiver"
//!
//! # Holidays in an inclusive date range, as JSON
//! vacances --json between 2024-04-01 2024-05-15 --zone B
//!
//! # Supported years and record count
//! vacances info
//!
//! # Fetch the full dataset, then query it instead of the bundled excerpt
//! vacances download -o data.csv
//! vacances --data data.csv year 2019
//! ```
//!
//! Set `RUST_LOG=debug` to see loading diagnostics on stderr.

mod download;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use vacances_scolaires::{
    parse_date, HolidayCalendar, HolidayRecord, Holidays, Zone, DEFAULT_DATA_URL,
};

#[derive(Parser)]
#[command(
    name = "vacances",
    version,
    about = "French school-holiday calendar (zones A, B, C)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV dataset to query instead of the bundled one
    #[arg(long, global = true, env = "VACANCES_DATA")]
    data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tell whether each date is a school holiday
    IsHoliday {
        /// Dates in YYYY-MM-DD form
        #[arg(required = true)]
        dates: Vec<String>,
        /// Restrict to one zone (A, B or C)
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// List the holidays of a year
    Year {
        year: i32,
        /// Restrict to one zone (A, B or C)
        #[arg(short, long)]
        zone: Option<String>,
        /// Restrict to one holiday, e.g. "Vacances d'hiver"
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List the holidays between two dates (inclusive)
    Between {
        start: String,
        end: String,
        /// Restrict to one zone (A, B or C)
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// Show the years and number of holiday dates in the dataset
    Info,
    /// Download the full reference dataset to a local file
    Download {
        /// Source URL
        #[arg(long, default_value = DEFAULT_DATA_URL)]
        url: String,
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct DateAnswer {
    date: String,
    holiday: bool,
}

#[derive(Serialize)]
struct DatasetInfo {
    min_year: i32,
    max_year: i32,
    records: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let data = cli.data.as_deref();

    match cli.command {
        Commands::Download { url, output } => {
            let calendar = download::download(&url, &output)?;
            println!(
                "Saved {} holiday dates ({}-{}) to {}",
                calendar.len(),
                calendar.min_year(),
                calendar.max_year(),
                output.display()
            );
        }
        Commands::IsHoliday { dates, zone } => {
            let calendar = load_calendar(data)?;
            let dates = dates
                .iter()
                .map(|d| parse_date(d))
                .collect::<vacances_scolaires::Result<Vec<_>>>()?;
            let answers = match zone.as_deref() {
                Some(zone) => calendar.is_holiday_for_zone_all(&dates, zone)?,
                None => calendar.is_holiday_all(&dates)?,
            };

            if cli.json {
                let answers: Vec<DateAnswer> = dates
                    .iter()
                    .zip(answers)
                    .map(|(date, holiday)| DateAnswer {
                        date: date.to_string(),
                        holiday,
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&answers)?);
            } else {
                for (date, holiday) in dates.iter().zip(answers) {
                    println!("{} {}", date, holiday);
                }
            }
        }
        Commands::Year { year, zone, name } => {
            let calendar = load_calendar(data)?;
            let holidays = match (zone.as_deref(), name.as_deref()) {
                (Some(zone), Some(name)) => {
                    calendar.holidays_for_year_zone_and_name(year, zone, name)?
                }
                (Some(zone), None) => calendar.holidays_for_year_and_zone(year, zone)?,
                (None, Some(name)) => calendar.holiday_for_year_by_name(year, name)?,
                (None, None) => calendar.holidays_for_year(year)?,
            };
            print_holidays(&holidays, cli.json)?;
        }
        Commands::Between { start, end, zone } => {
            let calendar = load_calendar(data)?;
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let holidays = match zone.as_deref() {
                Some(zone) => calendar.holidays_between_for_zone(start, end, zone)?,
                None => calendar.holidays_between(start, end)?,
            };
            print_holidays(&holidays, cli.json)?;
        }
        Commands::Info => {
            let calendar = load_calendar(data)?;
            let info = DatasetInfo {
                min_year: calendar.min_year(),
                max_year: calendar.max_year(),
                records: calendar.len(),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Years:    {}-{}", info.min_year, info.max_year);
                println!("Holidays: {} dates", info.records);
            }
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable. Defaults to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_calendar(path: Option<&Path>) -> Result<HolidayCalendar> {
    match path {
        Some(path) => HolidayCalendar::from_csv_path(path)
            .with_context(|| format!("Failed to load dataset: {}", path.display())),
        None => HolidayCalendar::bundled().context("Failed to load bundled dataset"),
    }
}

fn print_holidays(holidays: &Holidays<'_>, json: bool) -> Result<()> {
    if json {
        let records: Vec<&HolidayRecord> = holidays.values().copied().collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for record in holidays.values() {
        println!(
            "{}  {:<5}  {}",
            record.date(),
            zone_list(&record.zones()),
            record.holiday_name()
        );
    }
    Ok(())
}

fn zone_list(zones: &[Zone]) -> String {
    zones.iter().map(|z| z.as_str()).collect::<Vec<_>>().join(",")
}
