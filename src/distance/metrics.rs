//! Route length metrics.

use crate::models::Waypoint;

use super::{distance, DistanceMatrix};

/// Total distance along an ordered sequence of waypoints, in meters.
///
/// Sums the distance of each consecutive pair; 0 for fewer than two
/// waypoints. Pairs where either side lacks a coordinate contribute 0.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Coordinate, Waypoint};
/// use route_optimizer::distance::total_distance;
///
/// let route = vec![
///     Waypoint::start(1, "A").with_coordinate(Coordinate::new(0.0, 0.0)),
///     Waypoint::new(2, "B").with_coordinate(Coordinate::new(1.0, 0.0)),
///     Waypoint::new(3, "C").with_coordinate(Coordinate::new(2.0, 0.0)),
/// ];
/// assert!((total_distance(&route) - 2.0 * 111_194.93).abs() < 0.1);
/// assert_eq!(total_distance(&route[..1]), 0.0);
/// ```
pub fn total_distance(route: &[Waypoint]) -> f64 {
    route
        .windows(2)
        .map(|pair| distance(pair[0].coordinate(), pair[1].coordinate()))
        .sum()
}

/// Total distance of a visiting order given as indices into `distances`.
///
/// Open path: there is no closing leg back to the first index.
pub fn tour_distance(order: &[usize], distances: &DistanceMatrix) -> f64 {
    order
        .windows(2)
        .map(|pair| distances.get(pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn located(id: usize, lat: f64, lon: f64) -> Waypoint {
        Waypoint::new(id, format!("P{id}")).with_coordinate(Coordinate::new(lat, lon))
    }

    #[test]
    fn test_total_distance_short_routes() {
        assert_eq!(total_distance(&[]), 0.0);
        assert_eq!(total_distance(&[located(1, 5.0, 5.0)]), 0.0);
    }

    #[test]
    fn test_total_distance_skips_missing() {
        let route = vec![located(1, 0.0, 0.0), Waypoint::new(2, "pending"), located(3, 0.0, 1.0)];
        assert_eq!(total_distance(&route), 0.0);
    }

    #[test]
    fn test_tour_distance_matches_total() {
        let route = vec![located(1, 0.0, 0.0), located(2, 0.5, 0.5), located(3, 0.0, 1.0)];
        let dm = DistanceMatrix::from_waypoints(&route);
        let by_index = tour_distance(&[0, 1, 2], &dm);
        assert!((by_index - total_distance(&route)).abs() < 1e-9);
    }

    #[test]
    fn test_tour_distance_is_open() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 7.0, 7.0, 0.0]).expect("valid");
        assert_eq!(tour_distance(&[0, 1], &dm), 7.0);
        assert_eq!(tour_distance(&[0], &dm), 0.0);
    }
}
