//! Property-based tests for the calendar using proptest.
//!
//! Rows are generated over a fixed three-year window so that every query
//! date is inside the supported range.

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;
use vacances_scolaires::{HolidayCalendar, HolidayName, RawRow, Zone};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

/// A date between 2023-01-01 and 2025-12-31.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..1096).prop_map(|offset| base() + Days::new(offset))
}

fn arb_name() -> impl Strategy<Value = HolidayName> {
    prop::sample::select(HolidayName::ALL.to_vec())
}

fn arb_zone() -> impl Strategy<Value = Zone> {
    prop::sample::select(Zone::ALL.to_vec())
}

/// A dataset with one row per day, a random subset of which are holidays.
/// The first day is always a holiday in 2023 and the last one in 2025 so the
/// year range is fixed.
fn arb_rows() -> impl Strategy<Value = Vec<RawRow>> {
    prop::collection::vec((any::<[bool; 3]>(), arb_name()), 1096).prop_map(|days| {
        days.into_iter()
            .enumerate()
            .map(|(i, (mut flags, name))| {
                if i == 0 || i == 1095 {
                    flags[0] = true;
                }
                let date = (base() + Days::new(i as u64)).to_string();
                let label = if flags.iter().any(|f| *f) { name.label() } else { "" };
                RawRow::new(&date, label, flags)
            })
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn index_holds_exactly_the_flagged_rows(rows in arb_rows()) {
        let calendar = HolidayCalendar::from_rows(rows.clone()).unwrap();
        prop_assert_eq!(calendar.min_year(), 2023);
        prop_assert_eq!(calendar.max_year(), 2025);

        for row in &rows {
            let date: NaiveDate = row.date.parse().unwrap();
            let flagged = Zone::ALL.iter().any(|z| row.zone_flag(*z));
            prop_assert_eq!(calendar.is_holiday(date).unwrap(), flagged);
            for zone in Zone::ALL {
                prop_assert_eq!(
                    calendar.is_holiday_for_zone(date, zone).unwrap(),
                    row.zone_flag(zone)
                );
            }
        }
        for record in calendar.iter() {
            prop_assert!(!record.zones().is_empty());
            prop_assert!(!record.holiday_name().is_empty());
        }
    }

    #[test]
    fn sequence_queries_match_scalar_queries(
        rows in arb_rows(),
        dates in prop::collection::vec(arb_date(), 0..40),
        zone in arb_zone(),
    ) {
        let calendar = HolidayCalendar::from_rows(rows).unwrap();

        let all = calendar.is_holiday_all(&dates).unwrap();
        prop_assert_eq!(all.len(), dates.len());
        for (date, result) in dates.iter().zip(&all) {
            prop_assert_eq!(calendar.is_holiday(*date).unwrap(), *result);
        }

        let for_zone = calendar.is_holiday_for_zone_all(&dates, zone).unwrap();
        prop_assert_eq!(for_zone.len(), dates.len());
        for (date, result) in dates.iter().zip(&for_zone) {
            prop_assert_eq!(calendar.is_holiday_for_zone(*date, zone).unwrap(), *result);
        }
    }

    #[test]
    fn year_queries_stay_within_the_year(rows in arb_rows(), year in 2023i32..=2025) {
        let calendar = HolidayCalendar::from_rows(rows).unwrap();
        let holidays = calendar.holidays_for_year(year).unwrap();
        prop_assert!(holidays.keys().all(|d| d.year() == year));
        let expected = calendar.iter().filter(|r| r.date().year() == year).count();
        prop_assert_eq!(holidays.len(), expected);
    }

    #[test]
    fn filtered_year_queries_are_subsets(
        rows in arb_rows(),
        year in 2023i32..=2025,
        zone in arb_zone(),
        name in arb_name(),
    ) {
        let calendar = HolidayCalendar::from_rows(rows).unwrap();
        let year_all = calendar.holidays_for_year(year).unwrap();
        let by_name = calendar.holiday_for_year_by_name(year, name).unwrap();
        let by_zone = calendar.holidays_for_year_and_zone(year, zone).unwrap();
        let both = calendar.holidays_for_year_zone_and_name(year, zone, name).unwrap();

        prop_assert!(by_name.keys().all(|d| year_all.contains_key(d)));
        prop_assert!(by_zone.keys().all(|d| year_all.contains_key(d)));
        prop_assert!(by_name.values().all(|r| r.holiday() == Some(name)));
        prop_assert!(by_zone.values().all(|r| r.is_holiday_for(zone)));
        let expected: Vec<_> = by_zone.keys().filter(|d| by_name.contains_key(*d)).collect();
        prop_assert_eq!(both.keys().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn between_is_inclusive_and_ordered(rows in arb_rows(), a in arb_date(), b in arb_date()) {
        let calendar = HolidayCalendar::from_rows(rows).unwrap();
        let holidays = calendar.holidays_between(a, b).unwrap();

        if a > b {
            prop_assert!(holidays.is_empty());
        } else {
            let expected: Vec<NaiveDate> = calendar
                .iter()
                .map(|r| r.date())
                .filter(|d| *d >= a && *d <= b)
                .collect();
            prop_assert_eq!(holidays.keys().copied().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn out_of_range_years_are_rejected(rows in arb_rows(), year in prop_oneof![1900i32..2023, 2026i32..2100]) {
        let calendar = HolidayCalendar::from_rows(rows).unwrap();
        prop_assert!(calendar.holidays_for_year(year).is_err());
    }
}
