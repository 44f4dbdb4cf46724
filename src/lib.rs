//! # route-optimizer
//!
//! Orders a small set of geographic waypoints into a short visiting route
//! from a fixed start, using great-circle distances.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Waypoint, Route, GeneticParams, OptimizationResult)
//! - [`distance`] — Haversine distance, route length, distance matrix
//! - [`constructive`] — Nearest-neighbor construction
//! - [`ga`] — Genetic search with fixed start, elitism and best tracking
//! - [`optimizer`] — Facade that filters waypoints and dispatches to a solver
//! - [`geocoding`] — Nominatim address lookup
//! - [`navigation`] — Map directions deep links
//! - [`proxy`] — Rate-limited geocoding proxy endpoint
//! - [`config`] — Environment-driven configuration

pub mod cancel;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod ga;
pub mod geocoding;
pub mod models;
pub mod navigation;
pub mod optimizer;
pub mod proxy;

pub use cancel::CancellationToken;
pub use error::{ConfigError, RouteError};
pub use optimizer::{optimize, optimize_by_name, Optimizer};
