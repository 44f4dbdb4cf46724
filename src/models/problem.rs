//! Indexed view of a waypoint set, shared by the solvers.

use crate::distance::DistanceMatrix;

use super::{Route, Waypoint};

/// The coordinate-bearing waypoints of a request together with their
/// pairwise distances and the position of the start.
///
/// Solvers work on indices into [`waypoints`](Self::waypoints) and only
/// materialize a [`Route`] at the end.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Coordinate, RouteProblem, Waypoint};
///
/// let waypoints = vec![
///     Waypoint::new(2, "B").with_coordinate(Coordinate::new(32.01, 34.0)),
///     Waypoint::new(3, "no coordinate"),
///     Waypoint::start(1, "A").with_coordinate(Coordinate::new(32.0, 34.0)),
/// ];
/// let problem = RouteProblem::new(&waypoints, &waypoints[2]).unwrap();
/// assert_eq!(problem.len(), 2);
/// assert_eq!(problem.start(), 1);
/// assert_eq!(problem.fallback_order(), vec![1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteProblem {
    waypoints: Vec<Waypoint>,
    distances: DistanceMatrix,
    start: usize,
}

impl RouteProblem {
    /// Builds the indexed problem from a raw waypoint set.
    ///
    /// Waypoints without a coordinate are dropped. Returns `None` if fewer
    /// than two coordinate-bearing waypoints remain or `start` is not among
    /// them (matched by id).
    pub fn new(waypoints: &[Waypoint], start: &Waypoint) -> Option<Self> {
        let located = coordinate_bearing(waypoints);
        if located.len() < 2 {
            return None;
        }
        let start = located.iter().position(|w| w.id() == start.id())?;
        let distances = DistanceMatrix::from_waypoints(&located);
        Some(Self {
            waypoints: located,
            distances,
            start,
        })
    }

    /// The coordinate-bearing waypoints, in input order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Pairwise great-circle distances between [`waypoints`](Self::waypoints).
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Index of the start waypoint.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of waypoints (including the start).
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`: a problem holds at least two waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Indices of every waypoint except the start, in input order.
    pub fn others(&self) -> Vec<usize> {
        (0..self.waypoints.len())
            .filter(|&i| i != self.start)
            .collect()
    }

    /// `[start] ++ others in input order`.
    pub fn fallback_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.waypoints.len());
        order.push(self.start);
        order.extend(self.others());
        order
    }

    /// Materializes a route from a visiting order of indices.
    pub fn route_from_order(&self, order: &[usize]) -> Route {
        Route::from_waypoints(order.iter().map(|&i| self.waypoints[i].clone()).collect())
    }
}

/// Clones the waypoints that carry a coordinate, preserving order.
pub fn coordinate_bearing(waypoints: &[Waypoint]) -> Vec<Waypoint> {
    waypoints
        .iter()
        .filter(|w| w.has_coordinate())
        .cloned()
        .collect()
}
