//! Error types for the optimization core and configuration.

use thiserror::Error;

/// Errors raised by the optimization facade.
///
/// Too few waypoints is not an error: the facade answers it with an empty
/// result.
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("unknown algorithm '{0}', expected 'nearest' or 'genetic'")]
    UnknownAlgorithm(String),

    #[error("invalid {name}: {value} (expected a finite value between 0 and 1)")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}
