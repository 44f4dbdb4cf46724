//! Address geocoding through Nominatim.
//!
//! Lookups never reach the optimization core as errors: a waypoint whose
//! address cannot be resolved keeps no coordinate and carries a message
//! instead, which simply excludes it from the next optimization.

mod client;
mod response;

use thiserror::Error;

pub use client::{
    GeocoderParams, LookupStatus, NominatimClient, LOOKUP_FAILED_MESSAGE, NOMINATIM_BASE_URL,
    NOMINATIM_SEARCH_PATH, NOT_FOUND_MESSAGE,
};
pub use response::{parse_search_response, SearchHit};

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("geocoding service answered with status {0}")]
    Status(u16),

    #[error("unexpected geocoding response: {0}")]
    Parse(String),

    #[error("Deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
