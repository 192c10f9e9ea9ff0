//! # Sunrise-Sunset
//!
//! Civil sunrise and sunset times for a calendar date and geographic
//! coordinate, computed with the NOAA low-precision solar ephemeris
//! (valid for years 1800-2100).
//!
//! The computation is a fixed pipeline of pure functions: the date is
//! converted to a Julian century, the sun's apparent ecliptic position and
//! declination are derived from it, the equation of time and the sunrise
//! hour angle combine with the coordinate into solar noon and two
//! day-fraction offsets, and those are materialized back into UTC
//! timestamps. There is no shared or cached state; concurrent callers need
//! no coordination.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use sunrise_sunset::{calc, Coordinate};
//!
//! // Caledonia, MI
//! let coordinate = Coordinate::new(42.7892, -85.5167).unwrap();
//! let date = NaiveDate::from_ymd_opt(2021, 7, 5)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! let events = calc(date, coordinate).unwrap();
//! println!("Sunrise (UTC): {}", events.sunrise);
//! println!("Sunset  (UTC): {}", events.sunset);
//! ```
//!
//! Both timestamps are UTC. A sunset past midnight UTC lands on the
//! following calendar day. At latitudes where the sun never crosses the
//! horizon on the given date, [`calc`] fails with a typed error instead of
//! producing NaN timestamps.
#![no_std]

mod math;
mod solar;
mod time;


use chrono::{Datelike, NaiveDateTime, TimeDelta};
use thiserror::Error;

use solar::{equation_of_time, solar_noon_fraction, sunrise_hour_angle, SolarGeometry};
use time::{datetime_from_day_fraction, julian_century};

/// First year of the NOAA low-precision model's validity window.
const MIN_YEAR: i32 = 1800;
/// Last year of the NOAA low-precision model's validity window.
const MAX_YEAR: i32 = 2100;

/// Minutes of clock time per degree of hour angle.
const MINUTES_PER_DEGREE: f64 = 4.0;
/// Minutes in a day.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Error produced by a sunrise/sunset calculation.
///
/// Input validation failures are reported before any computation is
/// attempted. Polar failures are geometric: the date/latitude combination
/// has no sunrise or sunset. `TimeConversionError` indicates the computed
/// components could not be assembled into a calendar timestamp, which does
/// not occur for in-range inputs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    /// Latitude outside [-90, 90] degrees
    #[error("latitude out of range")]
    LatitudeOutOfRange,

    /// Longitude outside [-180, 180] degrees
    #[error("longitude out of range")]
    LongitudeOutOfRange,

    /// Latitude or longitude is NaN or infinite
    #[error("coordinate is not finite")]
    NonFiniteCoordinate,

    /// Date outside the model's 1800-2100 validity window
    #[error("date outside supported range (1800-2100)")]
    DateOutOfRange,

    /// The sun never sets at this latitude on this date (midnight sun)
    #[error("sun never sets at this latitude on this date")]
    PolarDay,

    /// The sun never rises at this latitude on this date (polar night)
    #[error("sun never rises at this latitude on this date")]
    PolarNight,

    /// The computed components do not form a valid calendar timestamp
    #[error("could not assemble a calendar timestamp")]
    TimeConversionError,
}

/// A geographic coordinate in degrees.
///
/// Latitude is positive north, longitude positive east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, in [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, in [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, validating ranges and finiteness.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::NonFiniteCoordinate`],
    /// [`CalculationError::LatitudeOutOfRange`] or
    /// [`CalculationError::LongitudeOutOfRange`] for invalid input.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CalculationError> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    fn validate(&self) -> Result<(), CalculationError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(CalculationError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CalculationError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CalculationError::LongitudeOutOfRange);
        }
        Ok(())
    }
}

/// Sunrise and sunset instants for one date and coordinate, both in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarEvents {
    /// Moment the top of the solar disk appears at the horizon
    pub sunrise: NaiveDateTime,
    /// Moment the top of the solar disk disappears below the horizon
    pub sunset: NaiveDateTime,
}

impl SolarEvents {
    /// Length of the day, `sunset - sunrise`.
    pub fn day_length(&self) -> TimeDelta {
        self.sunset - self.sunrise
    }
}

/// Calculates the sunrise and sunset times for a date and coordinate.
///
/// Only the calendar date (year/month/day, interpreted as UTC) of `date`
/// feeds the computation; any time-of-day component is ignored. Either both
/// timestamps are produced or the call fails as a unit.
///
/// # Errors
///
/// * Input validation failures ([`CalculationError::LatitudeOutOfRange`],
///   [`CalculationError::LongitudeOutOfRange`],
///   [`CalculationError::NonFiniteCoordinate`],
///   [`CalculationError::DateOutOfRange`]) — surfaced before any
///   computation.
/// * [`CalculationError::PolarDay`] / [`CalculationError::PolarNight`] —
///   the hour-angle equation has no real solution at this latitude on this
///   date.
/// * [`CalculationError::TimeConversionError`] — internal invariant
///   violation assembling the output timestamps.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sunrise_sunset::{calc, CalculationError, Coordinate};
///
/// let date = NaiveDate::from_ymd_opt(2021, 12, 21)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
///
/// // Well inside the arctic circle: no sunrise in late December.
/// let coordinate = Coordinate::new(75.0, -85.0).unwrap();
/// assert_eq!(calc(date, coordinate), Err(CalculationError::PolarNight));
/// ```
pub fn calc(date: NaiveDateTime, coordinate: Coordinate) -> Result<SolarEvents, CalculationError> {
    coordinate.validate()?;
    let day = validated_date(date)?;

    let t = julian_century(day);
    let geometry = SolarGeometry::from_julian_century(t);
    let eot = equation_of_time(&geometry);
    let noon = solar_noon_fraction(coordinate.longitude, eot);
    let hour_angle = sunrise_hour_angle(coordinate.latitude, geometry.declination)?;

    let offset = hour_angle * MINUTES_PER_DEGREE / MINUTES_PER_DAY;
    let sunrise = datetime_from_day_fraction(day, noon - offset)?;
    let sunset = datetime_from_day_fraction(day, noon + offset)?;
    Ok(SolarEvents { sunrise, sunset })
}

/// Calculates solar noon, the instant the sun crosses the local meridian.
///
/// Subject to the same input validation as [`calc`], but defined at every
/// latitude: solar noon exists even through polar day and night.
///
/// # Errors
///
/// Same input-validation and timestamp-assembly errors as [`calc`].
pub fn solar_noon(
    date: NaiveDateTime,
    coordinate: Coordinate,
) -> Result<NaiveDateTime, CalculationError> {
    coordinate.validate()?;
    let day = validated_date(date)?;

    let t = julian_century(day);
    let geometry = SolarGeometry::from_julian_century(t);
    let eot = equation_of_time(&geometry);
    datetime_from_day_fraction(day, solar_noon_fraction(coordinate.longitude, eot))
}

fn validated_date(date: NaiveDateTime) -> Result<chrono::NaiveDate, CalculationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(CalculationError::DateOutOfRange);
    }
    Ok(date.date())
}
