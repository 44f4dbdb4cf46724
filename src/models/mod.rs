//! Domain model types for waypoint route optimization.
//!
//! Provides the core abstractions: coordinates, waypoints that may or may
//! not have been geocoded yet, routes as ordered visiting sequences, solver
//! parameters, and the indexed problem view the solvers operate on.

mod coordinate;
mod params;
mod problem;
mod result;
mod route;
mod waypoint;

pub use coordinate::Coordinate;
pub use params::{Algorithm, GeneticParams};
pub use problem::{coordinate_bearing, RouteProblem};
pub use result::OptimizationResult;
pub use route::{Leg, Route};
pub use waypoint::Waypoint;
