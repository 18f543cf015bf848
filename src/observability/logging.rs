//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Select human-readable or JSON output
//! - Honour RUST_LOG, falling back to a crate-level default

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter applied when RUST_LOG is unset or invalid.
pub const DEFAULT_FILTER: &str = "endpoint_poller=info,tower_http=debug";

/// Environment variable selecting the output format.
pub const FORMAT_VAR: &str = "LOG_FORMAT";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; everything else is pretty.
    pub fn from_env_value(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Install the global subscriber, reading RUST_LOG and LOG_FORMAT.
pub fn init_logging() {
    let format = LogFormat::from_env_value(std::env::var(FORMAT_VAR).ok().as_deref());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
