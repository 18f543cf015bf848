//! Configuration validation.
//!
//! # Responsibilities
//! - Turn the raw interval string into a positive duration
//! - Split, trim and scheme-normalize the endpoint list
//!
//! # Design Decisions
//! - Interval problems never fail: they log and fall back to the default
//! - Blank segments (`"a.com,,b.com"`) are dropped rather than polled as `http://`
//! - An endpoint that already names `http://` or `https://` is left untouched.
//!   Earlier deployments prefixed `http://` unconditionally, which mangled
//!   `https://host` into `http://https://host`; that is intentionally not kept.

use std::time::Duration;

use crate::config::schema::DEFAULT_INTERVAL_SECS;

/// Resolve the polling interval from the raw `INTERVAL_SECONDS` value.
pub fn parse_interval(raw: Option<&str>) -> Duration {
    let Some(raw) = raw else {
        tracing::warn!(
            default_secs = DEFAULT_INTERVAL_SECS,
            "INTERVAL_SECONDS not set, using default interval"
        );
        return Duration::from_secs(DEFAULT_INTERVAL_SECS);
    };

    match raw.parse::<i64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs.unsigned_abs()),
        Ok(secs) => {
            tracing::warn!(
                value = secs,
                default_secs = DEFAULT_INTERVAL_SECS,
                "INTERVAL_SECONDS must be positive, using default interval"
            );
            Duration::from_secs(DEFAULT_INTERVAL_SECS)
        }
        Err(e) => {
            tracing::warn!(
                value = %raw,
                error = %e,
                default_secs = DEFAULT_INTERVAL_SECS,
                "Invalid INTERVAL_SECONDS, using default interval"
            );
            Duration::from_secs(DEFAULT_INTERVAL_SECS)
        }
    }
}

/// Split a comma-separated endpoint list into normalized URLs.
pub fn parse_endpoints(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ep| !ep.is_empty())
        .map(normalize_endpoint)
        .collect()
}

/// Prepend `http://` to an endpoint that carries no HTTP scheme.
pub fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    }
}
