//! Property tests for the calculation pipeline.
//!
//! These check the invariants that hold across the whole supported input
//! space: the Julian day count advances one per calendar day, sunrise and
//! sunset stay symmetric about solar noon, equatorial days stay near twelve
//! hours, and the time-of-day of the input never changes the result.

use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;

use crate::time::julian_day_number;
use crate::{calc, solar_noon, Coordinate};

/// Julian Day Number of 1970-01-01 (the Unix epoch).
const UNIX_EPOCH_JDN: f64 = 2_440_588.0;

fn any_supported_date() -> impl Strategy<Value = NaiveDate> {
    (1801i32..=2099i32, 1u32..=12u32)
        .prop_flat_map(|(year, month)| {
            let days_in_month = match month {
                1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
                4 | 6 | 9 | 11 => 30,
                2 => {
                    if (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0) {
                        29
                    } else {
                        28
                    }
                }
                _ => unreachable!(),
            };
            (Just(year), Just(month), 1u32..=days_in_month)
        })
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

proptest! {
    #[test]
    fn julian_day_number_advances_one_per_day(date in any_supported_date()) {
        let next = date.succ_opt().unwrap();
        prop_assert_eq!(julian_day_number(next), julian_day_number(date) + 1.0);

        // Cross-check the datum against chrono's own day arithmetic.
        let unix_epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let days_since_epoch = (date - unix_epoch).num_days() as f64;
        prop_assert_eq!(julian_day_number(date), UNIX_EPOCH_JDN + days_since_epoch);
    }

    #[test]
    fn sunrise_and_sunset_are_symmetric_about_solar_noon(
        date in any_supported_date(),
        latitude in -55.0f64..=55.0,
        longitude in -180.0f64..=180.0,
    ) {
        let datetime = date.and_hms_opt(0, 0, 0).unwrap();
        let coordinate = Coordinate::new(latitude, longitude).unwrap();

        let events = calc(datetime, coordinate).unwrap();
        let noon = solar_noon(datetime, coordinate).unwrap();

        let morning = noon - events.sunrise;
        let evening = events.sunset - noon;
        prop_assert!((morning - evening).num_seconds().abs() <= 2);
        prop_assert!(events.day_length() > TimeDelta::zero());
        prop_assert!(events.day_length() < TimeDelta::hours(24));
    }

    #[test]
    fn time_of_day_never_changes_the_result(
        date in any_supported_date(),
        first in (0u32..24, 0u32..60, 0u32..60),
        second in (0u32..24, 0u32..60, 0u32..60),
        latitude in -55.0f64..=55.0,
        longitude in -180.0f64..=180.0,
    ) {
        let coordinate = Coordinate::new(latitude, longitude).unwrap();
        let a = calc(date.and_hms_opt(first.0, first.1, first.2).unwrap(), coordinate).unwrap();
        let b = calc(date.and_hms_opt(second.0, second.1, second.2).unwrap(), coordinate).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn equatorial_day_length_stays_near_twelve_hours(
        date in any_supported_date(),
        longitude in -180.0f64..=180.0,
    ) {
        let coordinate = Coordinate::new(0.0, longitude).unwrap();
        let events = calc(date.and_hms_opt(12, 0, 0).unwrap(), coordinate).unwrap();
        let deviation = events.day_length() - TimeDelta::hours(12);
        prop_assert!(deviation.num_seconds().abs() <= 600);
    }

    #[test]
    fn summer_day_length_grows_toward_the_pole(latitude in 0.0f64..=60.0) {
        let date = NaiveDate::from_ymd_opt(2021, 6, 21)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let lower = calc(date, Coordinate::new(latitude, -85.0).unwrap()).unwrap();
        let upper = calc(date, Coordinate::new(latitude + 5.0, -85.0).unwrap()).unwrap();
        prop_assert!(upper.day_length() > lower.day_length());
    }
}
