//! Configuration schema definitions.

use std::time::Duration;

/// Environment variable holding the polling interval in whole seconds.
pub const INTERVAL_VAR: &str = "INTERVAL_SECONDS";

/// Environment variable holding the comma-separated endpoint list.
pub const ENDPOINTS_VAR: &str = "ENDPOINTS";

/// Interval used when `INTERVAL_SECONDS` is absent or unusable.
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Fixed bind address of the liveness listener.
pub const DEFAULT_HEALTH_ADDRESS: &str = "0.0.0.0:8080";

/// Root configuration for the poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// Upper bound of the randomized pause between rounds. Always > 0.
    pub interval: Duration,

    /// Normalized endpoint URLs, in configured order. Never empty.
    pub endpoints: Vec<String>,

    /// Address the liveness responder binds to.
    pub health_address: String,
}

impl PollerConfig {
    /// Build a config with the default health address.
    pub fn new(interval: Duration, endpoints: Vec<String>) -> Self {
        Self {
            interval,
            endpoints,
            health_address: DEFAULT_HEALTH_ADDRESS.to_string(),
        }
    }
}
