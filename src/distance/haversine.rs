//! Great-circle distance on a spherical Earth.
//!
//! # Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! d = 2 · R · atan2(√a, √(1−a))
//! ```
//!
//! with φ latitude, λ longitude (radians) and R the mean Earth radius.

use crate::models::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::{haversine, EARTH_RADIUS_M};
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 180.0);
/// assert!((haversine(a, b) - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1e-6);
/// ```
pub fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let d_phi = (b.lat() - a.lat()).to_radians();
    let d_lambda = (b.lon() - a.lon()).to_radians();

    let sin_d_phi = (d_phi / 2.0).sin();
    let sin_d_lambda = (d_lambda / 2.0).sin();
    // rounding can push near-antipodal pairs a hair above 1
    let h = (sin_d_phi * sin_d_phi + phi1.cos() * phi2.cos() * sin_d_lambda * sin_d_lambda)
        .min(1.0);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distance between two optional coordinates, in meters.
///
/// Returns 0 when either side is absent; never fails.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::distance;
///
/// let a = Coordinate::new(32.0, 34.0);
/// assert_eq!(distance(Some(a), None), 0.0);
/// assert_eq!(distance(Some(a), Some(a)), 0.0);
/// ```
pub fn distance(a: Option<Coordinate>, b: Option<Coordinate>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => haversine(a, b),
        _ => 0.0,
    }
}
