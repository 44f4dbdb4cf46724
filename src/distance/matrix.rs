//! Dense distance matrix.

use crate::models::{Coordinate, Waypoint};

use super::{distance, haversine};

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per optimization from the waypoints' coordinates so that the
/// solvers never recompute a Haversine distance.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_coordinates(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(3.0, 0.0),
/// ]);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(0, 1) - 111_194.93).abs() < 0.01);
/// assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some((1, dm.get(0, 1))));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes great-circle distances between all coordinate pairs.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        let n = coordinates.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine(coordinates[i], coordinates[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes great-circle distances between all waypoint pairs.
    ///
    /// Pairs involving a waypoint without a coordinate are 0.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let n = waypoints.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(waypoints[i].coordinate(), waypoints[j].coordinate());
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }


    /// Finds the candidate closest to `from`.
    ///
    /// Returns the candidate's *position within `candidates`* and its
    /// distance. Only a strictly smaller distance replaces the current best,
    /// so on exact ties the earliest candidate wins. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &candidate) in candidates.iter().enumerate() {
            let d = self.get(from, candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((pos, d)),
            }
        }
        best
    }
}
