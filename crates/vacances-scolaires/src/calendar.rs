//! The holiday calendar: an immutable date index with validated queries.
//!
//! Construction reads every raw row once, keeps the dates on which at least
//! one zone is on holiday, and derives the supported year range. Every query
//! is checked against that range before the index is consulted.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::error::{Result, VacancesError};
use crate::source::{Bundled, CsvFile, DataSource, RawRow};
use crate::types::{parse_date, HolidayName, HolidayRecord, IntoHolidayName, IntoZone, Zone};

/// Holidays keyed by date, in ascending date order.
pub type Holidays<'a> = BTreeMap<NaiveDate, &'a HolidayRecord>;

/// School-holiday calendar for zones A, B and C.
///
/// The index is built once and never mutated, so a calendar can be shared
/// across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    index: BTreeMap<NaiveDate, HolidayRecord>,
    min_year: i32,
    max_year: i32,
}

impl HolidayCalendar {
    /// Build a calendar from any row source.
    ///
    /// # Errors
    /// - `InvalidRow` if a row's date is not `YYYY-MM-DD`.
    /// - `DataIntegrity` if a holiday row has an empty name.
    /// - `EmptyDataset` if no row marks any zone on holiday.
    /// - Any error the source itself reports.
    pub fn load<S: DataSource + ?Sized>(source: &S) -> Result<Self> {
        Self::from_rows(source.rows()?)
    }

    /// Build a calendar from the reference data compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::load(&Bundled)
    }

    /// Build a calendar from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(&CsvFile::new(path.as_ref()))
    }

    /// Build a calendar from already-materialized rows.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut index = BTreeMap::new();
        let mut discarded = 0usize;

        for (i, row) in rows.into_iter().enumerate() {
            let date = parse_date(&row.date).map_err(|_| VacancesError::InvalidRow {
                row: i + 1,
                message: format!("unparseable date {:?}", row.date),
            })?;

            let [zone_a, zone_b, zone_c] = Zone::ALL.map(|zone| row.zone_flag(zone));
            if !(zone_a || zone_b || zone_c) {
                trace!(%date, "no zone on holiday, row discarded");
                discarded += 1;
                continue;
            }
            if row.nom_vacances.is_empty() {
                return Err(VacancesError::DataIntegrity { date });
            }

            index.insert(
                date,
                HolidayRecord {
                    date,
                    holiday_name: row.nom_vacances,
                    zone_a,
                    zone_b,
                    zone_c,
                },
            );
        }

        let (first, last) = match (index.keys().next(), index.keys().next_back()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(VacancesError::EmptyDataset),
        };

        debug!(
            records = index.len(),
            discarded,
            min_year = first.year(),
            max_year = last.year(),
            "holiday index built"
        );

        Ok(Self {
            index,
            min_year: first.year(),
            max_year: last.year(),
        })
    }

    /// First year covered by the dataset.
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Last year covered by the dataset.
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    /// Number of holiday dates in the index.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All holiday records in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &HolidayRecord> + '_ {
        self.index.values()
    }

    /// The record for `date`, if any zone is on holiday that day.
    pub fn get(&self, date: NaiveDate) -> Option<&HolidayRecord> {
        self.index.get(&date)
    }

    /// Row field holding the flag of `zone` (`vacances_zone_a`, ...).
    ///
    /// # Errors
    /// Returns `VacancesError::UnsupportedZone` for identifiers outside A, B, C.
    pub fn zone_key(&self, zone: impl IntoZone) -> Result<&'static str> {
        Ok(zone.into_zone()?.key())
    }

    /// Resolve a holiday name, failing with `UnsupportedHoliday`.
    pub fn check_name(&self, name: impl IntoHolidayName) -> Result<HolidayName> {
        name.into_holiday_name()
    }

    /// Check that `year` lies in the dataset's range.
    pub fn check_year(&self, year: i32) -> Result<()> {
        if self.years().contains(&year) {
            Ok(())
        } else {
            Err(VacancesError::UnsupportedYear(year))
        }
    }

    /// Check that the year of `date` lies in the dataset's range.
    pub fn check_date(&self, date: NaiveDate) -> Result<()> {
        self.check_year(date.year())
    }

    /// Check every date in order, stopping at the first unsupported one.
    pub fn check_dates(&self, dates: &[NaiveDate]) -> Result<()> {
        dates.iter().try_for_each(|date| self.check_date(*date))
    }

    /// Parse a `YYYY-MM-DD` string and check it against the year range.
    pub fn check_date_str(&self, date: &str) -> Result<NaiveDate> {
        let date = parse_date(date)?;
        self.check_date(date)?;
        Ok(date)
    }

    /// Whether any zone is on holiday on `date`.
    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        self.check_date(date)?;
        Ok(self.index.contains_key(&date))
    }

    /// [`is_holiday`](Self::is_holiday) for each date, preserving order.
    ///
    /// Every date is validated before any lookup; the first unsupported date
    /// fails the whole call.
    pub fn is_holiday_all(&self, dates: &[NaiveDate]) -> Result<Vec<bool>> {
        self.check_dates(dates)?;
        Ok(dates.iter().map(|d| self.index.contains_key(d)).collect())
    }

    /// Whether `zone` is on holiday on `date`. Dates absent from the index
    /// are not holidays for any zone.
    pub fn is_holiday_for_zone(&self, date: NaiveDate, zone: impl IntoZone) -> Result<bool> {
        self.check_date(date)?;
        let zone = zone.into_zone()?;
        Ok(self.flag(date, zone))
    }

    /// [`is_holiday_for_zone`](Self::is_holiday_for_zone) for each date,
    /// preserving order.
    pub fn is_holiday_for_zone_all(
        &self,
        dates: &[NaiveDate],
        zone: impl IntoZone,
    ) -> Result<Vec<bool>> {
        self.check_dates(dates)?;
        let zone = zone.into_zone()?;
        Ok(dates.iter().map(|d| self.flag(*d, zone)).collect())
    }

    /// All holidays of `year`.
    pub fn holidays_for_year(&self, year: i32) -> Result<Holidays<'_>> {
        self.check_year(year)?;
        Ok(self.range(year_start(year), year_end(year)))
    }

    /// Holidays of `year` carrying the given holiday name.
    ///
    /// The name is validated before the year.
    pub fn holiday_for_year_by_name(
        &self,
        year: i32,
        name: impl IntoHolidayName,
    ) -> Result<Holidays<'_>> {
        let name = self.check_name(name)?;
        let mut holidays = self.holidays_for_year(year)?;
        holidays.retain(|_, record| record.holiday_name == name.label());
        Ok(holidays)
    }

    /// Holidays of `year` on which `zone` is on holiday.
    ///
    /// The year is validated before the zone.
    pub fn holidays_for_year_and_zone(
        &self,
        year: i32,
        zone: impl IntoZone,
    ) -> Result<Holidays<'_>> {
        let mut holidays = self.holidays_for_year(year)?;
        let zone = zone.into_zone()?;
        holidays.retain(|_, record| record.is_holiday_for(zone));
        Ok(holidays)
    }

    /// Holidays of `year` on which `zone` is on holiday under the given name.
    ///
    /// Validation order: name, then year, then zone.
    pub fn holidays_for_year_zone_and_name(
        &self,
        year: i32,
        zone: impl IntoZone,
        name: impl IntoHolidayName,
    ) -> Result<Holidays<'_>> {
        let name = self.check_name(name)?;
        let mut holidays = self.holidays_for_year(year)?;
        let zone = zone.into_zone()?;
        holidays.retain(|_, record| {
            record.is_holiday_for(zone) && record.holiday_name == name.label()
        });
        Ok(holidays)
    }

    /// Holidays between `start` and `end`, both inclusive.
    ///
    /// Both bounds must lie in the supported year range. A reversed range
    /// (`start > end`) yields an empty result.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Holidays<'_>> {
        self.check_date(start)?;
        self.check_date(end)?;
        Ok(self.range(start, end))
    }

    /// [`holidays_between`](Self::holidays_between) restricted to `zone`.
    pub fn holidays_between_for_zone(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        zone: impl IntoZone,
    ) -> Result<Holidays<'_>> {
        let mut holidays = self.holidays_between(start, end)?;
        let zone = zone.into_zone()?;
        holidays.retain(|_, record| record.is_holiday_for(zone));
        Ok(holidays)
    }

    fn flag(&self, date: NaiveDate, zone: Zone) -> bool {
        self.index
            .get(&date)
            .is_some_and(|record| record.is_holiday_for(zone))
    }

    // BTreeMap::range panics on a reversed range.
    fn range(&self, start: NaiveDate, end: NaiveDate) -> Holidays<'_> {
        if start > end {
            return Holidays::new();
        }
        self.index
            .range(start..=end)
            .map(|(date, record)| (*date, record))
            .collect()
    }
}

fn year_start(year: i32) -> NaiveDate {
    NaiveDate::from_yo_opt(year, 1).unwrap_or(NaiveDate::MIN)
}

fn year_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX)
}
