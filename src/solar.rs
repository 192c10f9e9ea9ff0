//! NOAA low-precision solar position model.
//!
//! Pure functions of the Julian century (T) reproducing the NOAA solar
//! calculator's geometry: the sun's mean and apparent ecliptic position, the
//! obliquity correction, declination, equation of time, solar noon, and the
//! sunrise hour angle. All angles cross these function boundaries in
//! degrees; radians appear only inside trigonometric call sites.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{degrees, floored_mod, radians};
use crate::CalculationError;

/// Solar zenith angle at sunrise/sunset in degrees: 90° geometric horizon
/// plus 50 arcminutes for standard atmospheric refraction and the solar
/// disk's angular radius.
const SUNRISE_ZENITH_DEG: f64 = 90.833;

/// Geocentric mean longitude of the sun in degrees, normalized to [0, 360).
pub(crate) fn sun_mean_longitude(t: f64) -> f64 {
    floored_mod(280.46646 + t * (36000.76983 + t * 0.0003032), 360.0)
}

/// Mean anomaly of the sun in degrees.
pub(crate) fn sun_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit (dimensionless).
pub(crate) fn earth_orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of center for the sun in degrees, from the mean anomaly.
pub(crate) fn sun_equation_of_center(t: f64, mean_anomaly: f64) -> f64 {
    let m = radians(mean_anomaly);
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

/// Longitude of the moon's ascending node in degrees.
///
/// Shared between the apparent-longitude aberration term and the obliquity
/// nutation correction.
fn lunar_ascending_node(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Apparent longitude of the sun in degrees, corrected for nutation and
/// aberration.
pub(crate) fn sun_apparent_longitude(t: f64, true_longitude: f64) -> f64 {
    true_longitude - 0.00569 - 0.00478 * radians(lunar_ascending_node(t)).sin()
}

/// Mean obliquity of the ecliptic in degrees.
///
/// The nested form folds the 23°26'21.448" base value and its arcsecond
/// drift terms from degrees-minutes-seconds into decimal degrees.
pub(crate) fn ecliptic_mean_obliquity(t: f64) -> f64 {
    23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation, in degrees.
pub(crate) fn ecliptic_corrected_obliquity(t: f64, mean_obliquity: f64) -> f64 {
    mean_obliquity + 0.00256 * radians(lunar_ascending_node(t)).cos()
}

/// Solar declination in degrees, from the corrected obliquity and the
/// apparent longitude.
pub(crate) fn solar_declination(corrected_obliquity: f64, apparent_longitude: f64) -> f64 {
    degrees((radians(corrected_obliquity).sin() * radians(apparent_longitude).sin()).asin())
}

/// Intermediate solar geometry for one Julian century value.
///
/// An ephemeral bundle derived solely from T; built fresh for every
/// calculation and never cached across calls.
pub(crate) struct SolarGeometry {
    pub(crate) mean_longitude: f64,
    pub(crate) mean_anomaly: f64,
    pub(crate) eccentricity: f64,
    pub(crate) corrected_obliquity: f64,
    pub(crate) declination: f64,
}

impl SolarGeometry {
    /// Evaluate the full solar position model at Julian century `t`.
    pub(crate) fn from_julian_century(t: f64) -> Self {
        let mean_longitude = sun_mean_longitude(t);
        let mean_anomaly = sun_mean_anomaly(t);
        let eccentricity = earth_orbit_eccentricity(t);
        let equation_of_center = sun_equation_of_center(t, mean_anomaly);
        let true_longitude = mean_longitude + equation_of_center;
        let apparent_longitude = sun_apparent_longitude(t, true_longitude);
        let mean_obliquity = ecliptic_mean_obliquity(t);
        let corrected_obliquity = ecliptic_corrected_obliquity(t, mean_obliquity);
        let declination = solar_declination(corrected_obliquity, apparent_longitude);
        Self {
            mean_longitude,
            mean_anomaly,
            eccentricity,
            corrected_obliquity,
            declination,
        }
    }
}

/// Compute the equation of time in minutes.
///
/// The difference between apparent solar time (a sundial) and mean solar
/// time (a clock). The additive order of the five terms matches the NOAA
/// reference; reordering only moves the result at floating-point noise
/// level, but the golden fixtures assume this order.
pub(crate) fn equation_of_time(geometry: &SolarGeometry) -> f64 {
    let tan_half_obliquity = radians(geometry.corrected_obliquity / 2.0).tan();
    let y = tan_half_obliquity * tan_half_obliquity;
    let l0 = radians(geometry.mean_longitude);
    let m = radians(geometry.mean_anomaly);
    let e = geometry.eccentricity;

    4.0 * degrees(
        y * (2.0 * l0).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
            - 0.5 * y * y * (4.0 * l0).sin()
            - 1.25 * e * e * (2.0 * m).sin(),
    )
}

/// Solar noon as a fraction of the day at the given longitude.
///
/// Under normal conditions the result lies in [0, 1); near the antimeridian
/// the equation of time can push it slightly outside, which the timestamp
/// assembly normalizes into the adjacent day.
pub(crate) fn solar_noon_fraction(longitude: f64, equation_of_time_minutes: f64) -> f64 {
    (720.0 - 4.0 * longitude - equation_of_time_minutes) / 1440.0
}

/// Hour angle of the sun at sunrise, in degrees.
///
/// # Errors
///
/// At high latitudes the acos argument leaves [-1, 1] and no sunrise or
/// sunset exists on that date: an argument below -1 means the sun never
/// reaches the horizon from above ([`CalculationError::PolarDay`]), above +1
/// that it never reaches it from below ([`CalculationError::PolarNight`]).
pub(crate) fn sunrise_hour_angle(latitude: f64, declination: f64) -> Result<f64, CalculationError> {
    let lat = radians(latitude);
    let decl = radians(declination);
    let cos_hour_angle =
        radians(SUNRISE_ZENITH_DEG).cos() / (lat.cos() * decl.cos()) - lat.tan() * decl.tan();

    if cos_hour_angle > 1.0 {
        Err(CalculationError::PolarNight)
    } else if cos_hour_angle < -1.0 {
        Err(CalculationError::PolarDay)
    } else {
        Ok(degrees(cos_hour_angle.acos()))
    }
}
