//! Constructive heuristics for building a visiting order.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor construction, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_order};
