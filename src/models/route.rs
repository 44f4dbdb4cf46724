//! Route and leg types.

use serde::{Deserialize, Serialize};

use crate::distance::{distance, total_distance};

use super::Waypoint;

/// One hop of a route: two consecutive waypoints and the distance between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Label of the waypoint the leg leaves from.
    pub from: String,
    /// Label of the waypoint the leg arrives at.
    pub to: String,
    /// Great-circle distance in meters.
    pub distance: f64,
}

/// An ordered, duplicate-free visiting sequence of waypoints.
///
/// The first waypoint is the start whenever one with a coordinate exists.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Coordinate, Route, Waypoint};
///
/// let route = Route::from_waypoints(vec![
///     Waypoint::start(1, "A").with_coordinate(Coordinate::new(32.0, 34.0)),
///     Waypoint::new(2, "B").with_coordinate(Coordinate::new(32.01, 34.0)),
/// ]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.ids(), vec![1, 2]);
/// assert_eq!(route.legs().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a route visiting the given waypoints in order.
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Appends a waypoint to the end of the route.
    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Returns the waypoints in visiting order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of waypoints in the route.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if the route visits nothing.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint ids in visiting order.
    pub fn ids(&self) -> Vec<usize> {
        self.waypoints.iter().map(Waypoint::id).collect()
    }

    /// First waypoint (the start for a non-empty route).
    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// Last waypoint.
    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// Consecutive legs with their distances.
    pub fn legs(&self) -> Vec<Leg> {
        self.waypoints
            .windows(2)
            .map(|pair| Leg {
                from: pair[0].label().to_string(),
                to: pair[1].label().to_string(),
                distance: distance(pair[0].coordinate(), pair[1].coordinate()),
            })
            .collect()
    }

    /// Sum of leg distances, in meters.
    pub fn total_distance(&self) -> f64 {
        total_distance(&self.waypoints)
    }

    /// Consumes the route, returning its waypoints.
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }
}
