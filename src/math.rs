#[allow(unused_imports)]
use core_maths::CoreFloat;

use core::f64::consts::PI;

/// Converts an angle in degrees to radians.
///
/// The NOAA formulas are written in degrees; conversion happens at each
/// trigonometric call site.
pub(crate) fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts an angle in radians back to degrees.
pub(crate) fn degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Computes the floored modulo operation (Python-style modulo).
///
/// Unlike Rust's `%` operator which can return negative values, this function
/// always returns a non-negative result in the range [0, m). This is used to
/// normalize angles to [0, 360) and to decompose day fractions into
/// minute/second components that stay non-negative even when the fraction
/// itself is negative.
///
/// # Arguments
///
/// * `x` - The dividend
/// * `m` - The modulus (must be positive)
///
/// # Returns
///
/// The remainder `x mod m` in the range [0, m)
pub(crate) fn floored_mod(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}
