//! Optimization result type.

use serde::Serialize;

use super::{Algorithm, Route};

/// An optimized visiting order and its total great-circle distance.
///
/// Results are never updated in place: each optimization produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    route: Route,
    total_distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    algorithm: Option<Algorithm>,
}

impl OptimizationResult {
    /// Creates a result for a route produced by `algorithm`.
    pub fn new(route: Route, total_distance: f64, algorithm: Algorithm) -> Self {
        Self {
            route,
            total_distance,
            algorithm: Some(algorithm),
        }
    }

    /// The "nothing to optimize yet" result: no route, zero distance.
    pub fn empty() -> Self {
        Self {
            route: Route::new(),
            total_distance: 0.0,
            algorithm: None,
        }
    }

    /// The optimized route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Total distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Solver that produced the route; `None` for the empty result.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Returns `true` if no route was produced.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Consumes the result, returning its route.
    pub fn into_route(self) -> Route {
        self.route
    }

    pub(crate) fn with_total_distance(mut self, total_distance: f64) -> Self {
        self.total_distance = total_distance;
        self
    }
}
