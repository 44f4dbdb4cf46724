//! Turn-by-turn navigation deep links.

use crate::models::Route;

pub const GOOGLE_MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Builds a Google Maps directions link for a route.
///
/// The first located waypoint is the origin, the last the destination, and
/// every located waypoint in between becomes a `|`-separated stop. Travel
/// mode is always driving. Returns `None` for fewer than two located
/// waypoints.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Coordinate, Route, Waypoint};
/// use route_optimizer::navigation::directions_url;
///
/// let route = Route::from_waypoints(vec![
///     Waypoint::start(1, "A").with_coordinate(Coordinate::new(32.0, 34.0)),
///     Waypoint::new(2, "B").with_coordinate(Coordinate::new(32.01, 34.0)),
///     Waypoint::new(3, "C").with_coordinate(Coordinate::new(32.0, 34.02)),
/// ]);
/// assert_eq!(
///     directions_url(&route).unwrap(),
///     "https://www.google.com/maps/dir/?api=1&origin=32,34&destination=32,34.02&waypoints=32.01,34&travelmode=driving"
/// );
/// ```
pub fn directions_url(route: &Route) -> Option<String> {
    let points: Vec<String> = route
        .waypoints()
        .iter()
        .filter_map(|w| w.coordinate())
        .map(|c| c.to_string())
        .collect();

    let (origin, rest) = points.split_first()?;
    let (destination, middle) = rest.split_last()?;

    let mut url = format!("{GOOGLE_MAPS_DIRECTIONS_URL}&origin={origin}&destination={destination}");
    if !middle.is_empty() {
        url.push_str("&waypoints=");
        url.push_str(&middle.join("|"));
    }
    url.push_str("&travelmode=driving");
    Some(url)
}
