//! Numeric value generators.

use rand::Rng;

/// Default span `n` of [`scaled_float`].
pub const DEFAULT_FLOAT_SPAN: f64 = 100.0;
/// Default upper bound `r` of [`scaled_float`].
pub const DEFAULT_FLOAT_UPPER: f64 = 100.0;

/// Random integer in `[0, 100)`.
pub fn integer<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(0..100)
}

/// Random integer in `[0, 65536²)`.
pub fn long<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(0..65_536 * 65_536)
}

/// `upper - random[0,1) * span`, rounded to 4 decimal places.
///
/// The result lies in `(upper - span, upper]`.
pub fn scaled_float<R: Rng + ?Sized>(rng: &mut R, span: f64, upper: f64) -> f64 {
    round4(upper - rng.random::<f64>() * span)
}

/// Float with the default scale, in `(0, 100]`.
pub fn float<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    scaled_float(rng, DEFAULT_FLOAT_SPAN, DEFAULT_FLOAT_UPPER)
}

/// Longitude-like value within ±180.
pub fn longitude<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    scaled_float(rng, 360.0, 180.0)
}

/// Latitude-like value within ±90.
pub fn latitude<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    scaled_float(rng, 180.0, 90.0)
}

/// `[longitude, latitude]` pair.
pub fn coordinates<R: Rng + ?Sized>(rng: &mut R) -> [f64; 2] {
    [longitude(rng), latitude(rng)]
}

/// Timezone offset in minutes: `(12 - random[0,24)) * 60`.
pub fn timezone_offset<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    (12 - rng.random_range(0..24)) * 60
}

/// Round to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
