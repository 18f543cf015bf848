//! Periodic HTTP endpoint poller.
//!
//! # Architecture Overview
//!
//! ```text
//!   env (INTERVAL_SECONDS, ENDPOINTS)
//!        │
//!        ▼
//!   ┌──────────┐      ┌──────────────────────────────────────────┐
//!   │  config  │─────▶│                 poller                   │
//!   └──────────┘      │                                          │
//!                     │   round N:  caller ─┐                    │
//!                     │             caller ─┼─▶ join ─▶ sleep    │──── GET ───▶ endpoints
//!                     │             caller ─┘     [0, interval)  │
//!                     └──────────────────────────────────────────┘
//!
//!   ┌──────────────────┐
//!   │ health responder │◀──── any request on :8080 ──── "Healthy"
//!   └──────────────────┘
//! ```

use endpoint_poller::config;
use endpoint_poller::monitor::{EndpointCaller, Poller};
use endpoint_poller::observability::logging;
use endpoint_poller::HealthResponder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    tracing::info!("endpoint-poller v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration error");
            std::process::exit(1);
        }
    };

    tracing::info!(
        interval = ?config.interval,
        endpoints = ?config.endpoints,
        "Configuration loaded"
    );

    HealthResponder::new().spawn(config.health_address.clone());

    let caller = EndpointCaller::new()?;
    Poller::new(config, caller).run().await;

    Ok(())
}
