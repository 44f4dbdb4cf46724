//! Generational genetic search over visiting orders.
//!
//! # Loop
//!
//! Each generation ranks the population by ascending distance (descending
//! fitness), records the best tour seen so far, copies the top
//! `floor(population_size * elitism_rate)` tours unchanged, and fills the
//! rest with children of two parents drawn uniformly from the upper half of
//! the ranking ([`ordered_crossover`] then [`swap_mutation`]).
//!
//! The explicitly tracked best, not the final population, is the result.
//!
//! # Complexity
//!
//! O(generations × population_size × n) with the seen-table crossover.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::cancel::CancellationToken;
use crate::models::{
    coordinate_bearing, Algorithm, GeneticParams, OptimizationResult, Route, RouteProblem, Waypoint,
};

use super::chromosome::Tour;
use super::operators::{ordered_crossover, swap_mutation};

/// Outcome of a genetic run.
#[derive(Debug, Clone)]
pub struct GeneticRun {
    /// Best route found, or the fallback route with distance 0.
    pub result: OptimizationResult,
    /// Generations fully evaluated before the run ended.
    pub generations_completed: usize,
    /// Whether the run stopped early because of cancellation.
    pub cancelled: bool,
    /// Distance of the best tour, `None` when the fallback was returned.
    pub best_distance: Option<f64>,
}

/// Genetic solver with fixed start.
///
/// Randomness comes from the caller-supplied [`Rng`], so a seeded generator
/// makes runs reproducible.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use route_optimizer::models::{Coordinate, GeneticParams, Waypoint};
/// use route_optimizer::ga::GeneticSolver;
///
/// let start = Waypoint::start(0, "S").with_coordinate(Coordinate::new(0.0, 0.0));
/// let waypoints = vec![
///     start.clone(),
///     Waypoint::new(1, "A").with_coordinate(Coordinate::new(0.0, 1.0)),
///     Waypoint::new(2, "B").with_coordinate(Coordinate::new(0.0, 2.0)),
///     Waypoint::new(3, "C").with_coordinate(Coordinate::new(0.0, 3.0)),
/// ];
///
/// let params = GeneticParams::default().with_population_size(30).with_generations(40);
/// let mut rng = StdRng::seed_from_u64(42);
/// let run = GeneticSolver::new(params).solve(&waypoints, &start, &mut rng);
/// assert_eq!(run.result.route().ids(), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver {
    params: GeneticParams,
    cancellation: Option<CancellationToken>,
}

impl GeneticSolver {
    /// Creates a solver with the given parameters.
    pub fn new(params: GeneticParams) -> Self {
        Self {
            params,
            cancellation: None,
        }
    }

    /// Attaches a token checked before every generation.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns the solver parameters.
    pub fn params(&self) -> &GeneticParams {
        &self.params
    }

    /// Orders waypoints by genetic search.
    ///
    /// Waypoints without a coordinate are ignored. With fewer than two
    /// coordinate-bearing waypoints (or a start without a coordinate) the
    /// coordinate-bearing waypoints are returned as-is with distance 0.
    pub fn solve<R: Rng>(&self, waypoints: &[Waypoint], start: &Waypoint, rng: &mut R) -> GeneticRun {
        let Some(problem) = RouteProblem::new(waypoints, start) else {
            return GeneticRun {
                result: OptimizationResult::new(
                    Route::from_waypoints(coordinate_bearing(waypoints)),
                    0.0,
                    Algorithm::Genetic,
                ),
                generations_completed: 0,
                cancelled: false,
                best_distance: None,
            };
        };
        self.solve_problem(&problem, rng)
    }

    /// Runs the search on an already indexed problem.
    pub fn solve_problem<R: Rng>(&self, problem: &RouteProblem, rng: &mut R) -> GeneticRun {
        let evolution = self.evolve(problem, rng);
        let (order, distance) = match evolution.best {
            Some(tour) => {
                let distance = tour.distance();
                (tour.into_order(), Some(distance))
            }
            None => {
                debug!(
                    population_size = self.params.population_size(),
                    generations = self.params.generations(),
                    "genetic search produced no tour, using input order"
                );
                (problem.fallback_order(), None)
            }
        };

        GeneticRun {
            result: OptimizationResult::new(
                problem.route_from_order(&order),
                distance.unwrap_or(0.0),
                Algorithm::Genetic,
            ),
            generations_completed: evolution.generations_completed,
            cancelled: evolution.cancelled,
            best_distance: distance,
        }
    }

    fn evolve<R: Rng>(&self, problem: &RouteProblem, rng: &mut R) -> Evolution {
        let mut evolution = Evolution::default();
        let size = self.params.population_size();
        let pool = self.params.parent_pool_size();
        if pool == 0 {
            // no parents to breed from
            return evolution;
        }
        let elite = self.params.elite_count();
        let distances = problem.distances();

        let mut population: Vec<Tour> = (0..size).map(|_| random_tour(problem, rng)).collect();

        for generation in 0..self.params.generations() {
            if self.is_cancelled() {
                debug!(generation, "genetic search cancelled");
                evolution.cancelled = true;
                break;
            }

            for tour in &mut population {
                tour.evaluate(distances);
            }
            population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));

            let top = &population[0];
            let improved = evolution
                .best
                .as_ref()
                .map_or(true, |best| top.distance() < best.distance());
            if improved {
                debug!(generation, distance = top.distance(), "new best tour");
                evolution.best = Some(top.clone());
            }

            let mut next: Vec<Tour> = population[..elite].to_vec();
            while next.len() < size {
                let (parent1, parent2) = self.select_parents(&population, rng);
                let mut child = ordered_crossover(parent1.order(), parent2.order(), rng);
                swap_mutation(&mut child, self.params.mutation_rate(), rng);
                next.push(Tour::new(child));
            }
            population = next;
            evolution.generations_completed += 1;
        }

        evolution
    }

    /// Draws two parents independently and uniformly from the upper half of
    /// a ranked population.
    fn select_parents<'a, R: Rng>(&self, ranked: &'a [Tour], rng: &mut R) -> (&'a Tour, &'a Tour) {
        let pool = self.params.parent_pool_size().min(ranked.len());
        (
            &ranked[rng.random_range(0..pool)],
            &ranked[rng.random_range(0..pool)],
        )
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

#[derive(Debug, Default)]
struct Evolution {
    best: Option<Tour>,
    generations_completed: usize,
    cancelled: bool,
}

/// `[start] ++ shuffled others`.
fn random_tour<R: Rng>(problem: &RouteProblem, rng: &mut R) -> Tour {
    let mut others = problem.others();
    others.shuffle(rng);

    let mut order = Vec::with_capacity(problem.len());
    order.push(problem.start());
    order.extend(others);
    Tour::new(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor;
    use crate::distance::total_distance;
    use crate::models::Coordinate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn located(id: usize, lat: f64, lon: f64) -> Waypoint {
        Waypoint::new(id, format!("P{id}")).with_coordinate(Coordinate::new(lat, lon))
    }

    fn scattered() -> (Vec<Waypoint>, Waypoint) {
        let start = Waypoint::start(0, "S").with_coordinate(Coordinate::new(32.0, 34.8));
        let waypoints = vec![
            start.clone(),
            located(1, 32.05, 34.75),
            located(2, 31.95, 34.9),
            located(3, 32.1, 34.85),
            located(4, 31.9, 34.78),
            located(5, 32.02, 34.95),
            located(6, 32.08, 34.7),
            located(7, 31.97, 34.82),
        ];
        (waypoints, start)
    }

    fn sorted(mut ids: Vec<usize>) -> Vec<usize> {
        ids.sort();
        ids
    }

    #[test]
    fn test_solve_returns_permutation_with_start_first() {
        let (waypoints, start) = scattered();
        let params = GeneticParams::default().with_population_size(40).with_generations(30);
        let mut rng = StdRng::seed_from_u64(42);
        let run = GeneticSolver::new(params).solve(&waypoints, &start, &mut rng);
        let ids = run.result.route().ids();
        assert_eq!(ids[0], 0);
        assert_eq!(sorted(ids), (0..8).collect::<Vec<_>>());
        assert_eq!(run.generations_completed, 30);
        assert!(!run.cancelled);
    }

    #[test]
    fn test_reported_distance_matches_route() {
        let (waypoints, start) = scattered();
        let params = GeneticParams::default().with_population_size(20).with_generations(20);
        let mut rng = StdRng::seed_from_u64(5);
        let run = GeneticSolver::new(params).solve(&waypoints, &start, &mut rng);
        let recomputed = total_distance(run.result.route().waypoints());
        assert!((run.result.total_distance() - recomputed).abs() <= 1e-6 * recomputed);
        assert_eq!(run.best_distance, Some(run.result.total_distance()));
    }

    #[test]
    fn test_same_seed_same_route() {
        let (waypoints, start) = scattered();
        let solver = GeneticSolver::new(GeneticParams::default().with_population_size(20));
        let a = solver.solve(&waypoints, &start, &mut StdRng::seed_from_u64(9));
        let b = solver.solve(&waypoints, &start, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.result, b.result);
    }

    #[test]
    fn test_more_generations_never_worse() {
        let (waypoints, start) = scattered();
        let base = GeneticParams::default().with_population_size(20).with_mutation_rate(0.2);
        let short = GeneticSolver::new(base.with_generations(5))
            .solve(&waypoints, &start, &mut StdRng::seed_from_u64(77));
        let long = GeneticSolver::new(base.with_generations(60))
            .solve(&waypoints, &start, &mut StdRng::seed_from_u64(77));
        assert!(long.result.total_distance() <= short.result.total_distance());
    }

    #[test]
    fn test_full_elitism_keeps_first_generation_best() {
        let (waypoints, start) = scattered();
        let once = GeneticSolver::new(GeneticParams::new(20, 1, 0.0, 1.0))
            .solve(&waypoints, &start, &mut StdRng::seed_from_u64(4));
        let many = GeneticSolver::new(GeneticParams::new(20, 50, 0.0, 1.0))
            .solve(&waypoints, &start, &mut StdRng::seed_from_u64(4));
        assert_eq!(many.generations_completed, 50);
        assert_eq!(once.best_distance, many.best_distance);
        assert_eq!(once.result.route().ids(), many.result.route().ids());
    }

    #[test]
    fn test_parents_come_from_upper_half() {
        let solver = GeneticSolver::new(GeneticParams::default().with_population_size(8));
        let ranked: Vec<Tour> = (0..8).map(|rank| Tour::new(vec![0, rank])).collect();
        let mut rng = StdRng::seed_from_u64(11);
        let mut drawn = [0usize; 8];
        for _ in 0..2000 {
            let (a, b) = solver.select_parents(&ranked, &mut rng);
            drawn[a.order()[1]] += 1;
            drawn[b.order()[1]] += 1;
        }
        assert!(drawn[..4].iter().all(|&count| count > 0));
        assert!(drawn[4..].iter().all(|&count| count == 0));
    }

    #[test]
    fn test_competitive_with_nearest_neighbor() {
        let (waypoints, start) = scattered();
        let nn = nearest_neighbor(&waypoints, &start);
        let params = GeneticParams::default()
            .with_population_size(100)
            .with_generations(200)
            .with_mutation_rate(0.1);
        let run = GeneticSolver::new(params).solve(&waypoints, &start, &mut StdRng::seed_from_u64(1));
        // loose bound: the search must land in the same ballpark as the greedy tour
        assert!(run.result.total_distance() <= nn.total_distance() * 1.25);
    }

    #[test]
    fn test_zero_generations_falls_back() {
        let (waypoints, start) = scattered();
        let params = GeneticParams::default().with_generations(0);
        let run = GeneticSolver::new(params).solve(&waypoints, &start, &mut StdRng::seed_from_u64(1));
        assert_eq!(run.result.route().ids(), (0..8).collect::<Vec<_>>());
        assert_eq!(run.result.total_distance(), 0.0);
        assert_eq!(run.best_distance, None);
        assert_eq!(run.generations_completed, 0);
    }

    #[test]
    fn test_population_of_one_falls_back() {
        let start = Waypoint::start(5, "S").with_coordinate(Coordinate::new(0.0, 0.0));
        let waypoints = vec![located(2, 0.0, 2.0), start.clone(), located(1, 0.0, 1.0)];
        let params = GeneticParams::default().with_population_size(1);
        let run = GeneticSolver::new(params).solve(&waypoints, &start, &mut StdRng::seed_from_u64(1));
        assert_eq!(run.result.route().ids(), vec![5, 2, 1]);
        assert_eq!(run.result.total_distance(), 0.0);
    }

    #[test]
    fn test_population_of_two_runs() {
        let (waypoints, start) = scattered();
        let params = GeneticParams::new(2, 10, 0.5, 0.0);
        let run = GeneticSolver::new(params).solve(&waypoints, &start, &mut StdRng::seed_from_u64(3));
        assert_eq!(run.generations_completed, 10);
        assert!(run.best_distance.is_some());
    }

    #[test]
    fn test_cancelled_before_start_falls_back() {
        let (waypoints, start) = scattered();
        let token = CancellationToken::new();
        token.cancel();
        let run = GeneticSolver::new(GeneticParams::default())
            .with_cancellation(token)
            .solve(&waypoints, &start, &mut StdRng::seed_from_u64(1));
        assert!(run.cancelled);
        assert_eq!(run.generations_completed, 0);
        assert_eq!(run.result.route().ids(), (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_degenerate_input() {
        let start = Waypoint::start(0, "S").with_coordinate(Coordinate::new(0.0, 0.0));
        let waypoints = vec![start.clone(), Waypoint::new(1, "pending")];
        let run = GeneticSolver::new(GeneticParams::default())
            .solve(&waypoints, &start, &mut StdRng::seed_from_u64(1));
        assert_eq!(run.result.route().ids(), vec![0]);
        assert_eq!(run.result.total_distance(), 0.0);
    }

    #[test]
    fn test_coincident_waypoints() {
        let start = Waypoint::start(0, "S").with_coordinate(Coordinate::new(1.0, 1.0));
        let waypoints = vec![start.clone(), located(1, 1.0, 1.0), located(2, 1.0, 1.0)];
        let params = GeneticParams::default().with_population_size(10).with_generations(5);
        let run = GeneticSolver::new(params).solve(&waypoints, &start, &mut StdRng::seed_from_u64(2));
        assert_eq!(run.best_distance, Some(0.0));
        assert_eq!(run.result.route().len(), 3);
    }
}
