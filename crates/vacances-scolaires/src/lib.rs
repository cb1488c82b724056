//! # vacances-scolaires
//!
//! French school-holiday calendar lookups for zones A, B and C.
//!
//! The calendar is reference data, not computed: a dataset with one row per
//! day is indexed once, and queries answer which zones are on holiday, under
//! which holiday name, for the years the dataset covers.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use vacances_scolaires::{HolidayCalendar, Zone};
//!
//! let calendar = HolidayCalendar::bundled().unwrap();
//! assert_eq!(calendar.years(), 2021..=2026);
//!
//! let christmas_eve = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();
//!
//! assert!(calendar.is_holiday(christmas_eve).unwrap());
//! assert!(calendar.is_holiday_for_zone(christmas_eve, Zone::B).unwrap());
//! assert!(calendar.is_holiday_for_zone(christmas_eve, "c").unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] — `HolidayCalendar`: the immutable date index and its queries
//! - [`source`] — `DataSource` and the CSV-backed row sources
//! - [`types`] — zones, holiday names, holiday records
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod source;
pub mod types;

pub use calendar::{HolidayCalendar, Holidays};
pub use error::{Result, VacancesError};
pub use source::{Bundled, CsvFile, CsvText, DataSource, RawRow, DEFAULT_DATA_URL};
pub use types::{
    parse_date, HolidayName, HolidayRecord, IntoHolidayName, IntoZone, Zone,
    SUPPORTED_HOLIDAY_NAMES, SUPPORTED_ZONES,
};
