//! Optimization facade: filter, validate, dispatch, normalize.
//!
//! The facade is a pure function of `(waypoints, algorithm, params)`. It
//! keeps no state between calls; callers re-run it whenever the waypoint
//! set, a coordinate, the algorithm or the genetic parameters change.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::cancel::CancellationToken;
use crate::constructive::nearest_neighbor;
use crate::distance::total_distance;
use crate::error::RouteError;
use crate::ga::GeneticSolver;
use crate::models::{Algorithm, GeneticParams, OptimizationResult, Waypoint};

/// Configurable entry point for route optimization.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Algorithm, Coordinate, GeneticParams, Waypoint};
/// use route_optimizer::Optimizer;
///
/// let waypoints = vec![
///     Waypoint::start(1, "A").with_coordinate(Coordinate::new(32.0, 34.0)),
///     Waypoint::new(2, "B").with_coordinate(Coordinate::new(32.01, 34.0)),
///     Waypoint::new(3, "C").with_coordinate(Coordinate::new(32.0, 34.02)),
///     Waypoint::new(4, "not geocoded yet"),
/// ];
///
/// let result = Optimizer::new(Algorithm::Genetic)
///     .with_genetic_params(GeneticParams::default().with_population_size(20).with_generations(20))
///     .with_seed(7)
///     .optimize(&waypoints)
///     .unwrap();
/// assert_eq!(result.route().len(), 3);
/// assert_eq!(result.route().ids()[0], 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    algorithm: Algorithm,
    params: GeneticParams,
    seed: Option<u64>,
    cancellation: Option<CancellationToken>,
}

impl Optimizer {
    /// Creates an optimizer for the given algorithm with default genetic parameters.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Sets the genetic parameters (ignored by nearest-neighbor).
    pub fn with_genetic_params(mut self, params: GeneticParams) -> Self {
        self.params = params;
        self
    }

    /// Seeds the genetic solver's random generator for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Lets another thread stop a genetic run between generations.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Computes an optimized route over the coordinate-bearing waypoints.
    ///
    /// Returns [`OptimizationResult::empty`] when fewer than two waypoints
    /// have coordinates or the start has none. Fails only on invalid genetic
    /// parameters.
    pub fn optimize(&self, waypoints: &[Waypoint]) -> Result<OptimizationResult, RouteError> {
        if self.algorithm == Algorithm::Genetic {
            self.params.validate()?;
        }

        let located = waypoints.iter().filter(|w| w.has_coordinate()).count();
        let start = waypoints.iter().find(|w| w.is_start() && w.has_coordinate());
        let Some(start) = start.filter(|_| located >= 2) else {
            debug!(located, "not enough located waypoints to optimize");
            return Ok(OptimizationResult::empty());
        };

        debug!(algorithm = %self.algorithm, located, "optimizing route");
        let result = match self.algorithm {
            Algorithm::NearestNeighbor => nearest_neighbor(waypoints, start),
            Algorithm::Genetic => self.run_genetic(waypoints, start),
        };

        let total = total_distance(result.route().waypoints());
        info!(
            algorithm = %self.algorithm,
            stops = result.route().len(),
            distance_m = total,
            "route optimized"
        );
        Ok(result.with_total_distance(total))
    }

    fn run_genetic(&self, waypoints: &[Waypoint], start: &Waypoint) -> OptimizationResult {
        let mut solver = GeneticSolver::new(self.params);
        if let Some(token) = &self.cancellation {
            solver = solver.with_cancellation(token.clone());
        }

        let run = match self.seed {
            Some(seed) => solver.solve(waypoints, start, &mut StdRng::seed_from_u64(seed)),
            None => solver.solve(waypoints, start, &mut rand::rng()),
        };
        debug!(
            generations = run.generations_completed,
            cancelled = run.cancelled,
            "genetic search finished"
        );
        run.result
    }
}

/// Optimizes with the given algorithm; genetic runs use `params` or the defaults.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Algorithm, Coordinate, Waypoint};
/// use route_optimizer::optimize;
///
/// let lonely = vec![Waypoint::start(1, "A").with_coordinate(Coordinate::new(32.0, 34.0))];
/// let result = optimize(&lonely, Algorithm::NearestNeighbor, None).unwrap();
/// assert!(result.is_empty());
/// assert_eq!(result.total_distance(), 0.0);
/// ```
pub fn optimize(
    waypoints: &[Waypoint],
    algorithm: Algorithm,
    params: Option<&GeneticParams>,
) -> Result<OptimizationResult, RouteError> {
    Optimizer::new(algorithm)
        .with_genetic_params(params.copied().unwrap_or_default())
        .optimize(waypoints)
}

/// Like [`optimize`], selecting the algorithm by name (`"nearest"` or `"genetic"`).
pub fn optimize_by_name(
    waypoints: &[Waypoint],
    algorithm: &str,
    params: Option<&GeneticParams>,
) -> Result<OptimizationResult, RouteError> {
    optimize(waypoints, algorithm.parse()?, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn located(id: usize, lat: f64, lon: f64) -> Waypoint {
        Waypoint::new(id, format!("P{id}")).with_coordinate(Coordinate::new(lat, lon))
    }

    fn scenario() -> Vec<Waypoint> {
        vec![
            Waypoint::start(1, "A").with_coordinate(Coordinate::new(32.0, 34.0)),
            located(2, 32.01, 34.0),
            located(3, 32.0, 34.02),
        ]
    }

    #[test]
    fn test_scenario_nearest_neighbor() {
        let result = optimize(&scenario(), Algorithm::NearestNeighbor, None).expect("valid");
        assert_eq!(result.route().ids(), vec![1, 2, 3]);
        let expected = 1111.949_266 + 2189.277_747;
        assert!((result.total_distance() - expected).abs() / expected < 0.01);
        assert_eq!(result.algorithm(), Some(Algorithm::NearestNeighbor));
    }

    #[test]
    fn test_scenario_genetic_finds_same_route() {
        let params = GeneticParams::default().with_population_size(20).with_generations(20);
        let result = Optimizer::new(Algorithm::Genetic)
            .with_genetic_params(params)
            .with_seed(11)
            .optimize(&scenario())
            .expect("valid");
        assert_eq!(result.route().ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_located_is_empty() {
        let waypoints = vec![
            Waypoint::start(1, "A").with_coordinate(Coordinate::new(32.0, 34.0)),
            Waypoint::new(2, "pending"),
        ];
        let result = optimize(&waypoints, Algorithm::NearestNeighbor, None).expect("valid");
        assert!(result.is_empty());
        assert_eq!(result.total_distance(), 0.0);
        assert!(result.algorithm().is_none());
    }

    #[test]
    fn test_start_without_coordinate_is_empty() {
        let waypoints = vec![Waypoint::start(1, "A"), located(2, 0.0, 0.0), located(3, 0.0, 1.0)];
        let result = optimize(&waypoints, Algorithm::Genetic, None).expect("valid");
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_start_is_empty() {
        let waypoints = vec![located(2, 0.0, 0.0), located(3, 0.0, 1.0)];
        assert!(optimize(&waypoints, Algorithm::NearestNeighbor, None)
            .expect("valid")
            .is_empty());
    }

    #[test]
    fn test_start_is_first_even_if_listed_last() {
        let mut waypoints = scenario();
        waypoints.rotate_left(1);
        let result = optimize(&waypoints, Algorithm::NearestNeighbor, None).expect("valid");
        assert_eq!(result.route().ids()[0], 1);
    }

    #[test]
    fn test_genetic_fallback_reports_route_length() {
        let params = GeneticParams::default().with_generations(0);
        let result = optimize(&scenario(), Algorithm::Genetic, Some(&params)).expect("valid");
        assert_eq!(result.route().ids(), vec![1, 2, 3]);
        let expected = total_distance(result.route().waypoints());
        assert!(expected > 0.0);
        assert_eq!(result.total_distance(), expected);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = GeneticParams::default().with_mutation_rate(2.0);
        let err = optimize(&scenario(), Algorithm::Genetic, Some(&params)).expect_err("invalid");
        assert!(matches!(err, RouteError::InvalidParameter { name: "mutation_rate", .. }));
    }

    #[test]
    fn test_invalid_params_ignored_by_nearest() {
        let params = GeneticParams::default().with_mutation_rate(2.0);
        assert!(optimize(&scenario(), Algorithm::NearestNeighbor, Some(&params)).is_ok());
    }

    #[test]
    fn test_optimize_by_name() {
        let result = optimize_by_name(&scenario(), "nearest", None).expect("valid");
        assert_eq!(result.route().ids(), vec![1, 2, 3]);
        assert!(matches!(
            optimize_by_name(&scenario(), "bogus", None),
            Err(RouteError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_cancelled_optimizer_still_returns_route() {
        let token = CancellationToken::new();
        token.cancel();
        let result = Optimizer::new(Algorithm::Genetic)
            .with_cancellation(token)
            .optimize(&scenario())
            .expect("valid");
        assert_eq!(result.route().len(), 3);
    }
}
