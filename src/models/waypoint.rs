//! Waypoint type.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A point of interest to be visited.
///
/// A waypoint carries a stable id, the free-text address it was entered
/// with, and a coordinate once that address has been resolved. Exactly one
/// waypoint of a working set is expected to be marked as the start.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Coordinate, Waypoint};
///
/// let home = Waypoint::start(1, "Herzl 1, Tel Aviv").with_coordinate(Coordinate::new(32.06, 34.77));
/// assert!(home.is_start());
/// assert!(home.has_coordinate());
///
/// let shop = Waypoint::new(2, "Dizengoff 50");
/// assert!(!shop.is_start());
/// assert!(shop.coordinate().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    id: usize,
    #[serde(alias = "address")]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coordinate: Option<Coordinate>,
    #[serde(default)]
    is_start: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Waypoint {
    /// Creates a regular (non-start) waypoint without a coordinate.
    pub fn new(id: usize, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            coordinate: None,
            is_start: false,
            error: None,
        }
    }

    /// Creates the start waypoint.
    pub fn start(id: usize, label: impl Into<String>) -> Self {
        Self {
            is_start: true,
            ..Self::new(id, label)
        }
    }

    /// Sets a resolved coordinate.
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    /// Stable unique id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display label (the address text).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolved coordinate, if any.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    /// Returns `true` if this waypoint has a resolved coordinate.
    pub fn has_coordinate(&self) -> bool {
        self.coordinate.is_some()
    }

    /// Returns `true` if this is the start waypoint.
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Error message from the last address lookup, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replaces the coordinate.
    pub fn set_coordinate(&mut self, coordinate: Option<Coordinate>) {
        self.coordinate = coordinate;
    }

    /// Replaces the lookup error.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
