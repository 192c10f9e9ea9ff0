use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::floored_mod;
use crate::CalculationError;

/// Seconds in a calendar day.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number of the J2000.0 epoch (2000-01-01 12:00 TT).
const J2000_EPOCH_JDN: f64 = 2_451_545.0;

/// Days in a Julian century.
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Compute the Julian Day Number for a calendar date.
///
/// Only the year/month/day of the date contribute; the result is the integer
/// day count of the proleptic Gregorian calendar, returned as `f64` because
/// every consumer is floating-point arithmetic.
///
/// The `(14 - month) / 12` step must floor the true quotient (not truncate
/// toward zero) so that January and February fold into months 13/14 of the
/// previous year for every month value 1-12.
pub(crate) fn julian_day_number(date: NaiveDate) -> f64 {
    let year = f64::from(date.year());
    let month = f64::from(date.month());
    let day = f64::from(date.day());

    let a = ((14.0 - month) / 12.0).floor();
    let y = year + 4800.0 - a;
    let m = month + 12.0 * a - 3.0;

    day + ((153.0 * m + 2.0) / 5.0).floor() + 365.0 * y + (y / 4.0).floor() - (y / 100.0).floor()
        + (y / 400.0).floor()
        - 32_045.0
}

/// Julian century (T) for a calendar date, measured in Julian centuries
/// since the J2000.0 epoch.
pub(crate) fn julian_century(date: NaiveDate) -> f64 {
    (julian_day_number(date) - J2000_EPOCH_JDN) / DAYS_PER_JULIAN_CENTURY
}

/// Materialize a UTC timestamp from a day fraction on a given calendar date.
///
/// `fraction` is a fraction of a day where 0.0 is midnight and 0.5 is noon.
/// Values outside [0, 1) are normalized into the adjacent calendar day: the
/// decomposed hour/minute/second offset is applied to the date's midnight
/// with signed `TimeDelta` arithmetic, so a sunset past midnight UTC lands
/// on the following day and a sunrise before midnight on the preceding one.
///
/// # Errors
///
/// Returns [`CalculationError::TimeConversionError`] if the fraction is not
/// finite or the resulting timestamp leaves chrono's representable range.
pub(crate) fn datetime_from_day_fraction(
    date: NaiveDate,
    fraction: f64,
) -> Result<NaiveDateTime, CalculationError> {
    let total_seconds = fraction * SECONDS_PER_DAY;
    if !total_seconds.is_finite() {
        return Err(CalculationError::TimeConversionError);
    }

    let hour = (total_seconds / 3600.0).floor();
    let minute = floored_mod(total_seconds / 60.0, 60.0).floor();
    let second = floored_mod(total_seconds, 60.0).floor();

    let offset_seconds = hour as i64 * 3600 + minute as i64 * 60 + second as i64;
    let offset =
        TimeDelta::try_seconds(offset_seconds).ok_or(CalculationError::TimeConversionError)?;

    date.and_time(NaiveTime::MIN)
        .checked_add_signed(offset)
        .ok_or(CalculationError::TimeConversionError)
}
