//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::haversine;

/// A point on the Earth's surface in floating-point degrees.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
///
/// let a = Coordinate::new(32.0, 34.0);
/// let b = Coordinate::new(32.01, 34.0);
/// assert_eq!(a.lat(), 32.0);
/// assert!((a.distance_to(&b) - 1111.95).abs() < 0.01);
/// assert_eq!(b.to_string(), "32.01,34");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if both components are finite and within
    /// `[-90, 90]` / `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great-circle distance to another coordinate, in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine(*self, *other)
    }
}

/// Formats as `lat,lon`, the form map services accept in query strings.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
