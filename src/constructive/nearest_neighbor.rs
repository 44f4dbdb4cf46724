//! Nearest-neighbor constructive heuristic.
//!
//! Builds the route greedily: starting from the start waypoint, always move
//! to the closest unvisited waypoint. One-shot construction, no backtracking
//! and no local-search refinement.
//!
//! # Complexity
//!
//! O(n²) time, O(n) space where n = number of waypoints.
//!
//! # Tie-breaking
//!
//! Only a strictly shorter distance replaces the current candidate, and the
//! unvisited set keeps the caller's order, so on exact ties the waypoint
//! listed first in the input wins. Identical input always yields an
//! identical route.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::models::{coordinate_bearing, Algorithm, OptimizationResult, Route, RouteProblem, Waypoint};

/// Orders waypoints with the nearest-neighbor heuristic.
///
/// Waypoints without a coordinate are ignored. With fewer than two
/// coordinate-bearing waypoints (or a start without a coordinate) the
/// coordinate-bearing waypoints are returned as-is with distance 0.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Coordinate, Waypoint};
/// use route_optimizer::constructive::nearest_neighbor;
///
/// let start = Waypoint::start(1, "A").with_coordinate(Coordinate::new(32.0, 34.0));
/// let waypoints = vec![
///     start.clone(),
///     Waypoint::new(2, "B").with_coordinate(Coordinate::new(32.01, 34.0)),
///     Waypoint::new(3, "C").with_coordinate(Coordinate::new(32.0, 34.02)),
/// ];
///
/// let result = nearest_neighbor(&waypoints, &start);
/// assert_eq!(result.route().ids(), vec![1, 2, 3]);
/// assert!((result.total_distance() - 3301.23).abs() < 0.01);
/// ```
pub fn nearest_neighbor(waypoints: &[Waypoint], start: &Waypoint) -> OptimizationResult {
    let Some(problem) = RouteProblem::new(waypoints, start) else {
        let located = coordinate_bearing(waypoints);
        debug!(located = located.len(), "nearest neighbor: nothing to order");
        return OptimizationResult::new(
            Route::from_waypoints(located),
            0.0,
            Algorithm::NearestNeighbor,
        );
    };

    let (order, total) = nearest_neighbor_order(problem.distances(), problem.start());
    OptimizationResult::new(
        problem.route_from_order(&order),
        total,
        Algorithm::NearestNeighbor,
    )
}

/// Index-level nearest-neighbor construction over a distance matrix.
///
/// Returns the visiting order (starting at `start`, covering every index of
/// the matrix exactly once) and its total distance.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::constructive::nearest_neighbor_order;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 5.0, 1.0,
///     5.0, 0.0, 2.0,
///     1.0, 2.0, 0.0,
/// ]).unwrap();
/// let (order, total) = nearest_neighbor_order(&dm, 0);
/// assert_eq!(order, vec![0, 2, 1]);
/// assert_eq!(total, 3.0);
/// ```
pub fn nearest_neighbor_order(distances: &DistanceMatrix, start: usize) -> (Vec<usize>, f64) {
    let n = distances.size();
    let mut order = Vec::with_capacity(n);
    order.push(start);

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut current = start;
    let mut total = 0.0;

    while let Some((pos, d)) = distances.nearest_neighbor(current, &unvisited) {
        // order-preserving removal keeps the input-order tie-break stable
        let next = unvisited.remove(pos);
        order.push(next);
        total += d;
        current = next;
    }

    (order, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::total_distance;
    use crate::models::Coordinate;

    fn located(id: usize, lat: f64, lon: f64) -> Waypoint {
        Waypoint::new(id, format!("P{id}")).with_coordinate(Coordinate::new(lat, lon))
    }

    fn line_waypoints() -> (Vec<Waypoint>, Waypoint) {
        let start = Waypoint::start(0, "S").with_coordinate(Coordinate::new(0.0, 0.0));
        let waypoints = vec![
            located(3, 0.0, 3.0),
            start.clone(),
            located(1, 0.0, 1.0),
            located(2, 0.0, 2.0),
        ];
        (waypoints, start)
    }

    #[test]
    fn test_nn_visits_line_in_order() {
        let (waypoints, start) = line_waypoints();
        let result = nearest_neighbor(&waypoints, &start);
        assert_eq!(result.route().ids(), vec![0, 1, 2, 3]);
        assert_eq!(result.algorithm(), Some(Algorithm::NearestNeighbor));
    }

    #[test]
    fn test_nn_total_matches_route() {
        let (waypoints, start) = line_waypoints();
        let result = nearest_neighbor(&waypoints, &start);
        let recomputed = total_distance(result.route().waypoints());
        assert!((result.total_distance() - recomputed).abs() < 1e-6);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let start = Waypoint::start(0, "S").with_coordinate(Coordinate::new(0.0, 0.0));
        let waypoints = vec![
            start.clone(),
            located(1, 0.0, 10.0), // far
            located(2, 0.0, 1.0),  // near
        ];
        let result = nearest_neighbor(&waypoints, &start);
        assert_eq!(result.route().ids(), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_tie_breaks_by_input_order() {
        let start = Waypoint::start(0, "S").with_coordinate(Coordinate::new(0.0, 0.0));
        let east = located(1, 0.0, 1.0);
        let west = located(2, 0.0, -1.0);

        let forward = vec![start.clone(), east.clone(), west.clone()];
        assert_eq!(nearest_neighbor(&forward, &start).route().ids(), vec![0, 1, 2]);

        let reversed = vec![start.clone(), west, east];
        assert_eq!(nearest_neighbor(&reversed, &start).route().ids(), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_ignores_missing_coordinates() {
        let (mut waypoints, start) = line_waypoints();
        waypoints.push(Waypoint::new(9, "pending"));
        let result = nearest_neighbor(&waypoints, &start);
        assert_eq!(result.route().len(), 4);
        assert!(!result.route().ids().contains(&9));
    }

    #[test]
    fn test_nn_degenerate_single() {
        let start = Waypoint::start(0, "S").with_coordinate(Coordinate::new(0.0, 0.0));
        let waypoints = vec![start.clone(), Waypoint::new(1, "pending")];
        let result = nearest_neighbor(&waypoints, &start);
        assert_eq!(result.route().ids(), vec![0]);
        assert_eq!(result.total_distance(), 0.0);
    }

    #[test]
    fn test_nn_deterministic() {
        let (waypoints, start) = line_waypoints();
        let a = nearest_neighbor(&waypoints, &start);
        let b = nearest_neighbor(&waypoints, &start);
        assert_eq!(a, b);
    }

    #[test]
    fn test_nn_order_covers_all_indices() {
        let dm = DistanceMatrix::from_coordinates(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(-1.0, 2.0),
            Coordinate::new(0.5, -0.5),
        ]);
        let (order, _) = nearest_neighbor_order(&dm, 2);
        assert_eq!(order[0], 2);
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }
}
