//! Configuration loading from the process environment.

use thiserror::Error;

use crate::config::schema::{PollerConfig, ENDPOINTS_VAR, INTERVAL_VAR};
use crate::config::validation::{parse_endpoints, parse_interval};

/// Error type for configuration loading. Every variant is fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no endpoints configured: set the ENDPOINTS env var")]
    MissingEndpoints,

    #[error("ENDPOINTS is set but contains no endpoints")]
    NoEndpoints,
}

/// Load configuration from the process environment.
pub fn load_from_env() -> Result<PollerConfig, ConfigError> {
    load_with(env_lookup)
}

/// Read `key` from the process environment.
///
/// Only an unset variable yields `None`; non-UTF-8 bytes are replaced, not dropped.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}

/// Load configuration using `lookup` to resolve variable names.
pub fn load_with<F>(lookup: F) -> Result<PollerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let interval = parse_interval(lookup(INTERVAL_VAR).as_deref());

    let raw_endpoints = lookup(ENDPOINTS_VAR).ok_or(ConfigError::MissingEndpoints)?;
    let endpoints = parse_endpoints(&raw_endpoints);
    if endpoints.is_empty() {
        return Err(ConfigError::NoEndpoints);
    }

    Ok(PollerConfig::new(interval, endpoints))
}
