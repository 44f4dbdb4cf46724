//! Geocoding proxy endpoint.
//!
//! `GET /api/geocode?address=...` forwards a single lookup to Nominatim after
//! a fixed courtesy delay and relays the raw JSON array.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::geocoding::{GeocodingError, NominatimClient};

/// Shared state of the proxy handlers.
pub struct ProxyState {
    pub client: NominatimClient,
    /// Wait before every forwarded lookup.
    pub delay: Duration,
}

impl ProxyState {
    /// Builds the client and delay from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            client: NominatimClient::new(config.geocoder_params()),
            delay: config.proxy_delay,
        }
    }
}

/// Query string of `GET /api/geocode`.
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    address: Option<String>,
}

/// Handler failures, rendered as `{"error": ...}` JSON bodies.
pub enum ProxyError {
    /// `address` missing or blank (400).
    MissingAddress,
    /// Nominatim unreachable or answered badly (500).
    Upstream(GeocodingError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::MissingAddress => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Address is required" })),
            )
                .into_response(),
            ProxyError::Upstream(err) => {
                error!(error = %err, "geocoding proxy lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch coordinates" })),
                )
                    .into_response()
            }
        }
    }
}

/// Routes of the proxy, ready to be served or driven in tests.
pub fn router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route("/api/geocode", get(geocode_handler))
        .with_state(state)
}

async fn geocode_handler(
    State(state): State<Arc<ProxyState>>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let address = query
        .address
        .filter(|a| !a.trim().is_empty())
        .ok_or(ProxyError::MissingAddress)?;

    tokio::time::sleep(state.delay).await;

    let hits = state
        .client
        .search_raw(&address)
        .await
        .map_err(ProxyError::Upstream)?;
    Ok(Json(hits))
}

/// Binds `config.bind_address` and serves the proxy until the process exits.
pub async fn serve(config: &AppConfig) -> std::io::Result<()> {
    let state = Arc::new(ProxyState::from_config(config));
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "geocoding proxy listening");
    axum::serve(listener, router(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::geocoding::GeocoderParams;

    fn test_router() -> Router {
        let state = ProxyState {
            client: NominatimClient::new(GeocoderParams {
                base_url: "http://127.0.0.1:9".to_string(),
                user_agent: "test".to_string(),
                accept_language: "en".to_string(),
                country: None,
            }),
            delay: Duration::ZERO,
        };
        router(Arc::new(state))
    }

    async fn call(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn test_missing_address_is_bad_request() {
        let (status, body) = call("/api/geocode").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Address is required");
    }

    #[tokio::test]
    async fn test_blank_address_is_bad_request() {
        let (status, _) = call("/api/geocode?address=%20%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_internal_error() {
        let (status, body) = call("/api/geocode?address=Herzl%201").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch coordinates");
    }
}
