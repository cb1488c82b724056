//! Error types for holiday calendar loading and queries.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building a [`HolidayCalendar`](crate::HolidayCalendar)
/// or validating a query against it.
#[derive(Error, Debug)]
pub enum VacancesError {
    /// A query argument could not be read as a `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// The requested year lies outside the years covered by the dataset.
    #[error("No data for year: {0}")]
    UnsupportedYear(i32),

    /// The zone identifier is not one of A, B or C.
    #[error("Unsupported zone: {0}")]
    UnsupportedZone(String),

    /// The holiday name is not one of the known holiday periods.
    #[error("Unknown holiday name: {0}")]
    UnsupportedHoliday(String),

    /// A row marks at least one zone on holiday but carries no holiday name.
    #[error("Holiday name not set for date: {date}")]
    DataIntegrity { date: NaiveDate },

    /// The source produced no holiday at all, so no year range can be derived.
    #[error("Dataset contains no holiday dates")]
    EmptyDataset,

    /// A raw row could not be interpreted. `row` is the 1-based position of
    /// the row among the data rows (a CSV header is not counted).
    #[error("Invalid row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout vacances-scolaires.
pub type Result<T> = std::result::Result<T, VacancesError>;
