//! Closed vocabulary of the dataset: zones, holiday names and holiday records.
//!
//! Zones and holiday names are fixed sets. Both parse from text at the API
//! boundary so that calendar queries only ever see validated values.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VacancesError};

/// Format of every date in the row contract and in textual queries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifiers of the supported school zones, in canonical order.
pub const SUPPORTED_ZONES: [&str; 3] = ["A", "B", "C"];

/// Labels of the supported holiday periods, exactly as they appear in the data.
pub const SUPPORTED_HOLIDAY_NAMES: [&str; 6] = [
    "Vacances de Noël",
    "Vacances d'hiver",
    "Vacances de printemps",
    "Vacances d'été",
    "Vacances de la Toussaint",
    "Pont de l'Ascension",
];

/// A French school zone with its own staggered holiday calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    A,
    B,
    C,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::A, Zone::B, Zone::C];

    /// Name of the row field holding this zone's flag (`vacances_zone_a`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Zone::A => "vacances_zone_a",
            Zone::B => "vacances_zone_b",
            Zone::C => "vacances_zone_c",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::A => "A",
            Zone::B => "B",
            Zone::C => "C",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zone identifiers are matched case-insensitively after trimming
/// surrounding whitespace: `"a"`, `" B "` and `"C"` are all accepted.
impl FromStr for Zone {
    type Err = VacancesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Zone::A),
            "B" => Ok(Zone::B),
            "C" => Ok(Zone::C),
            _ => Err(VacancesError::UnsupportedZone(s.to_string())),
        }
    }
}

/// One of the named school-holiday periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayName {
    Christmas,
    Winter,
    Spring,
    Summer,
    AllSaints,
    AscensionBridge,
}

impl HolidayName {
    pub const ALL: [HolidayName; 6] = [
        HolidayName::Christmas,
        HolidayName::Winter,
        HolidayName::Spring,
        HolidayName::Summer,
        HolidayName::AllSaints,
        HolidayName::AscensionBridge,
    ];

    /// The French label used in the dataset.
    pub fn label(self) -> &'static str {
        match self {
            HolidayName::Christmas => SUPPORTED_HOLIDAY_NAMES[0],
            HolidayName::Winter => SUPPORTED_HOLIDAY_NAMES[1],
            HolidayName::Spring => SUPPORTED_HOLIDAY_NAMES[2],
            HolidayName::Summer => SUPPORTED_HOLIDAY_NAMES[3],
            HolidayName::AllSaints => SUPPORTED_HOLIDAY_NAMES[4],
            HolidayName::AscensionBridge => SUPPORTED_HOLIDAY_NAMES[5],
        }
    }
}

impl fmt::Display for HolidayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Holiday names must match a dataset label exactly (case and accents included).
impl FromStr for HolidayName {
    type Err = VacancesError;

    fn from_str(s: &str) -> Result<Self> {
        HolidayName::ALL
            .into_iter()
            .find(|name| name.label() == s)
            .ok_or_else(|| VacancesError::UnsupportedHoliday(s.to_string()))
    }
}

/// Anything a query accepts in place of a [`Zone`].
///
/// Implemented for `Zone` itself and for string slices, so callers can pass
/// either `Zone::A` or `"A"`; the string form is validated when resolved.
pub trait IntoZone {
    fn into_zone(self) -> Result<Zone>;
}

impl IntoZone for Zone {
    fn into_zone(self) -> Result<Zone> {
        Ok(self)
    }
}

impl IntoZone for &str {
    fn into_zone(self) -> Result<Zone> {
        self.parse()
    }
}

impl IntoZone for &String {
    fn into_zone(self) -> Result<Zone> {
        self.parse()
    }
}

/// Anything a query accepts in place of a [`HolidayName`].
pub trait IntoHolidayName {
    fn into_holiday_name(self) -> Result<HolidayName>;
}

impl IntoHolidayName for HolidayName {
    fn into_holiday_name(self) -> Result<HolidayName> {
        Ok(self)
    }
}

impl IntoHolidayName for &str {
    fn into_holiday_name(self) -> Result<HolidayName> {
        self.parse()
    }
}

impl IntoHolidayName for &String {
    fn into_holiday_name(self) -> Result<HolidayName> {
        self.parse()
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// # Errors
/// Returns `VacancesError::InvalidDate` if the text is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| VacancesError::InvalidDate(s.to_string()))
}

/// A date on which at least one zone is on holiday.
///
/// Only the calendar can build records, and it only does so for dates where
/// some zone flag is set and the holiday name is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRecord {
    pub(crate) date: NaiveDate,
    pub(crate) holiday_name: String,
    pub(crate) zone_a: bool,
    pub(crate) zone_b: bool,
    pub(crate) zone_c: bool,
}

impl HolidayRecord {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The holiday label as stored in the data.
    pub fn holiday_name(&self) -> &str {
        &self.holiday_name
    }

    /// The typed holiday name, or `None` if the dataset uses a label outside
    /// the supported set.
    pub fn holiday(&self) -> Option<HolidayName> {
        self.holiday_name.parse().ok()
    }

    pub fn is_holiday_for(&self, zone: Zone) -> bool {
        match zone {
            Zone::A => self.zone_a,
            Zone::B => self.zone_b,
            Zone::C => self.zone_c,
        }
    }

    /// Zones on holiday that day, in canonical order. Never empty.
    pub fn zones(&self) -> Vec<Zone> {
        Zone::ALL
            .into_iter()
            .filter(|zone| self.is_holiday_for(*zone))
            .collect()
    }
}
