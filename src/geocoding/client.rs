//! Nominatim search client.
//!
//! One request per address: `GET {base}/search?format=json&q=..&limit=1`
//! with the configured `Accept-Language` and `User-Agent` headers.

use futures::future::join_all;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use tracing::{debug, warn};

use crate::models::{Coordinate, Waypoint};

use super::response::parse_search_response;
use super::GeocodingError;

pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const NOMINATIM_SEARCH_PATH: &str = "/search";

/// Message stored on a waypoint whose address had no match.
pub const NOT_FOUND_MESSAGE: &str = "no coordinates found for this address";
/// Message stored on a waypoint whose lookup failed.
pub const LOOKUP_FAILED_MESSAGE: &str = "address lookup failed";

/// Settings for [`NominatimClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderParams {
    /// Service base URL, without the `/search` path.
    pub base_url: String,
    /// `User-Agent` header; Nominatim's usage policy requires one.
    pub user_agent: String,
    /// `Accept-Language` header, controls the language of returned names.
    pub accept_language: String,
    /// Appended to every address as `", <country>"` to narrow matches.
    pub country: Option<String>,
}

/// What happened to a waypoint in [`NominatimClient::resolve_waypoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    /// Blank address, nothing was looked up.
    Skipped,
    /// Coordinate set, error cleared.
    Found,
    /// No match; coordinate cleared, error set.
    NotFound,
    /// Request or parse failure; coordinate cleared, error set.
    Failed,
}

/// Client for the Nominatim `/search` endpoint.
pub struct NominatimClient {
    params: GeocoderParams,
    client: reqwest::Client,
}

impl NominatimClient {
    /// Creates a client with its own connection pool.
    pub fn new(params: GeocoderParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Settings this client was built with.
    pub fn params(&self) -> &GeocoderParams {
        &self.params
    }

    /// The free-text query sent for `address`, country qualifier included.
    pub fn query_for(&self, address: &str) -> String {
        match &self.params.country {
            Some(country) => format!("{}, {}", address.trim(), country),
            None => address.trim().to_string(),
        }
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.params.base_url, NOMINATIM_SEARCH_PATH)
    }

    async fn fetch(&self, address: &str) -> Result<String, GeocodingError> {
        let query = self.query_for(address);
        debug!(%query, "geocoding lookup");

        let response = self
            .client
            .get(self.search_url())
            .query(&[("format", "json"), ("q", query.as_str()), ("limit", "1")])
            .header(ACCEPT_LANGUAGE, &self.params.accept_language)
            .header(USER_AGENT, &self.params.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    /// Looks up `address` and returns the raw JSON array Nominatim answered with.
    pub async fn search_raw(&self, address: &str) -> Result<serde_json::Value, GeocodingError> {
        let body = self.fetch(address).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Looks up `address`; `Ok(None)` when nothing matched.
    pub async fn find_coordinates(&self, address: &str) -> Result<Option<Coordinate>, GeocodingError> {
        let body = self.fetch(address).await?;
        parse_search_response(&body)
    }

    /// Resolves a waypoint's label into its coordinate, recording failures on
    /// the waypoint instead of returning them.
    pub async fn resolve_waypoint(&self, waypoint: &mut Waypoint) -> LookupStatus {
        if waypoint.label().trim().is_empty() {
            return LookupStatus::Skipped;
        }

        let status = match self.find_coordinates(waypoint.label()).await {
            Ok(Some(coordinate)) => {
                waypoint.set_coordinate(Some(coordinate));
                waypoint.set_error(None);
                LookupStatus::Found
            }
            Ok(None) => {
                waypoint.set_coordinate(None);
                waypoint.set_error(Some(NOT_FOUND_MESSAGE.to_string()));
                LookupStatus::NotFound
            }
            Err(err) => {
                warn!(id = waypoint.id(), error = %err, "geocoding lookup failed");
                waypoint.set_coordinate(None);
                waypoint.set_error(Some(LOOKUP_FAILED_MESSAGE.to_string()));
                LookupStatus::Failed
            }
        };
        debug!(id = waypoint.id(), ?status, "waypoint resolved");
        status
    }

    /// Concurrently resolves every waypoint that has no coordinate yet.
    ///
    /// Lookups are independent; completion order is not guaranteed.
    pub async fn resolve_all(&self, waypoints: &mut [Waypoint]) -> Vec<LookupStatus> {
        let lookups = waypoints
            .iter_mut()
            .filter(|w| !w.has_coordinate())
            .map(|w| self.resolve_waypoint(w));
        join_all(lookups).await
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new(GeocoderParams {
            base_url: NOMINATIM_BASE_URL.to_string(),
            user_agent: "RouteOptimizer/1.0".to_string(),
            accept_language: "he".to_string(),
            country: Some("Israel".to_string()),
        })
    }
}
