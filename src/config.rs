//! Runtime configuration.
//!
//! Values default to the public Nominatim service with the lookup settings
//! the application was built around, and can be overridden through
//! `ROUTE_OPTIMIZER_*` environment variables (a `.env` file is loaded by the
//! binary before reading them).

use std::time::Duration;

use crate::error::ConfigError;
use crate::geocoding::{GeocoderParams, NOMINATIM_BASE_URL};

pub const ENV_NOMINATIM_URL: &str = "ROUTE_OPTIMIZER_NOMINATIM_URL";
pub const ENV_USER_AGENT: &str = "ROUTE_OPTIMIZER_USER_AGENT";
pub const ENV_ACCEPT_LANGUAGE: &str = "ROUTE_OPTIMIZER_ACCEPT_LANGUAGE";
pub const ENV_COUNTRY: &str = "ROUTE_OPTIMIZER_COUNTRY";
pub const ENV_PROXY_DELAY_MS: &str = "ROUTE_OPTIMIZER_PROXY_DELAY_MS";
pub const ENV_BIND: &str = "ROUTE_OPTIMIZER_BIND";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the Nominatim service, without the `/search` path.
    pub nominatim_url: String,
    /// `User-Agent` sent with every lookup.
    pub user_agent: String,
    /// `Accept-Language` sent with every lookup.
    pub accept_language: String,
    /// Country appended to every address as `", <country>"`; `None` disables it.
    pub country: Option<String>,
    /// Courtesy delay the proxy waits before forwarding a lookup.
    pub proxy_delay: Duration,
    /// Address the proxy listens on.
    pub bind_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            nominatim_url: NOMINATIM_BASE_URL.to_string(),
            user_agent: "RouteOptimizer/1.0".to_string(),
            accept_language: "he".to_string(),
            country: Some("Israel".to_string()),
            proxy_delay: Duration::from_millis(1000),
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, falling back to defaults for
    /// missing keys. An empty country disables the qualifier.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_NOMINATIM_URL) {
            config.nominatim_url = url.trim_end_matches('/').to_string();
        }
        if let Some(agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = agent;
        }
        if let Some(language) = lookup(ENV_ACCEPT_LANGUAGE) {
            config.accept_language = language;
        }
        if let Some(country) = lookup(ENV_COUNTRY) {
            let country = country.trim();
            config.country = (!country.is_empty()).then(|| country.to_string());
        }
        if let Some(delay) = lookup(ENV_PROXY_DELAY_MS) {
            let millis = delay
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_PROXY_DELAY_MS,
                    value: delay.clone(),
                })?;
            config.proxy_delay = Duration::from_millis(millis);
        }
        if let Some(bind) = lookup(ENV_BIND) {
            config.bind_address = bind;
        }

        Ok(config)
    }

    /// Lookup settings for a [`NominatimClient`](crate::geocoding::NominatimClient).
    pub fn geocoder_params(&self) -> GeocoderParams {
        GeocoderParams {
            base_url: self.nominatim_url.clone(),
            user_agent: self.user_agent.clone(),
            accept_language: self.accept_language.clone(),
            country: self.country.clone(),
        }
    }
}
