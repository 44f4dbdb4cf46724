//! Tour chromosome for the genetic solver.
//!
//! A tour encodes a candidate route as a permutation of waypoint indices
//! whose first element is always the start. The cached distance is the
//! route's open-path length; lower distance = fitter tour.

use crate::distance::{tour_distance, DistanceMatrix};

/// A candidate visiting order with its cached total distance.
///
/// # Examples
///
/// ```
/// use route_optimizer::ga::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1]);
/// assert_eq!(tour.order(), &[0, 2, 1]);
/// assert_eq!(tour.distance(), f64::INFINITY);
/// assert_eq!(tour.fitness(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    order: Vec<usize>,
    distance: f64,
}

impl Tour {
    /// Creates an unevaluated tour from an index permutation.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            distance: f64::INFINITY,
        }
    }

    /// Returns the visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of waypoints in this tour, start included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the tour is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cached total distance; infinite until [`evaluate`](Self::evaluate) runs.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Computes and caches the total distance.
    pub fn evaluate(&mut self, distances: &DistanceMatrix) -> f64 {
        self.distance = tour_distance(&self.order, distances);
        self.distance
    }

    /// Reciprocal of the distance.
    ///
    /// A zero-length tour (all waypoints at the same spot) is maximally fit.
    pub fn fitness(&self) -> f64 {
        if self.distance == 0.0 {
            f64::INFINITY
        } else {
            1.0 / self.distance
        }
    }

    /// Consumes the tour, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}
