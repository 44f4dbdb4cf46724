//! Great-circle distances and route metrics.
//!
//! Provides the Haversine distance between coordinates, the total length of
//! a waypoint sequence, and a dense distance matrix for the solvers.

mod haversine;
mod matrix;
mod metrics;

pub use haversine::{distance, haversine, EARTH_RADIUS_M};
pub use matrix::DistanceMatrix;
pub use metrics::{total_distance, tour_distance};
