//! Raw row sources for building a [`HolidayCalendar`](crate::HolidayCalendar).
//!
//! The calendar never performs I/O itself: it consumes rows from a
//! [`DataSource`]. Rows follow the reference CSV layout:
//!
//! ```text
//! date,vacances_zone_a,vacances_zone_b,vacances_zone_c,nom_vacances
//! 2023-12-23,True,True,True,Vacances de Noël
//! 2024-01-08,False,False,False,
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Zone;

/// Stable location of the full reference dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/AntoineAugusti/vacances-scolaires/master/data.csv";

/// Reference dataset compiled into the crate.
pub const BUNDLED_CSV: &str = include_str!("../data/data.csv");

/// One unvalidated row of the dataset.
///
/// Zone flags keep their textual form; only the exact string `"True"` counts
/// as a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub vacances_zone_a: String,
    pub vacances_zone_b: String,
    pub vacances_zone_c: String,
    #[serde(default)]
    pub nom_vacances: String,
}

impl RawRow {
    /// Build a row from typed flags, writing them the way the CSV does.
    pub fn new(date: &str, holiday_name: &str, flags: [bool; 3]) -> Self {
        let flag = |on: bool| (if on { "True" } else { "False" }).to_string();
        Self {
            date: date.to_string(),
            vacances_zone_a: flag(flags[0]),
            vacances_zone_b: flag(flags[1]),
            vacances_zone_c: flag(flags[2]),
            nom_vacances: holiday_name.to_string(),
        }
    }

    /// The textual flag stored for `zone`.
    pub fn zone_field(&self, zone: Zone) -> &str {
        match zone {
            Zone::A => &self.vacances_zone_a,
            Zone::B => &self.vacances_zone_b,
            Zone::C => &self.vacances_zone_c,
        }
    }

    pub fn zone_flag(&self, zone: Zone) -> bool {
        self.zone_field(zone) == "True"
    }
}

/// Supplier of raw rows.
pub trait DataSource {
    fn rows(&self) -> Result<Vec<RawRow>>;
}

impl DataSource for [RawRow] {
    fn rows(&self) -> Result<Vec<RawRow>> {
        Ok(self.to_vec())
    }
}

impl DataSource for Vec<RawRow> {
    fn rows(&self) -> Result<Vec<RawRow>> {
        Ok(self.clone())
    }
}

/// A CSV file on disk, typically one fetched from [`DEFAULT_DATA_URL`].
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvFile {
    fn rows(&self) -> Result<Vec<RawRow>> {
        let file = std::fs::File::open(&self.path)?;
        read_csv(file)
    }
}

/// CSV content already held in memory.
#[derive(Debug, Clone, Copy)]
pub struct CsvText<'a>(pub &'a str);

impl DataSource for CsvText<'_> {
    fn rows(&self) -> Result<Vec<RawRow>> {
        read_csv(self.0.as_bytes())
    }
}

/// The reference dataset shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bundled;

impl DataSource for Bundled {
    fn rows(&self) -> Result<Vec<RawRow>> {
        CsvText(BUNDLED_CSV).rows()
    }
}

/// Deserialize every row of a headed CSV stream.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: RawRow = record?;
        rows.push(row);
    }
    Ok(rows)
}
