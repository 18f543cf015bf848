//! Single endpoint call.
//!
//! # Responsibilities
//! - Issue one GET per invocation
//! - Time the request until headers arrive
//! - Drain the body and report its size
//!
//! # Design Decisions
//! - Any HTTP status counts as a completed call; only transport errors fail
//! - No request timeout is configured on the client
//! - Exactly one `CallOutcome` is returned on every path

use std::time::Instant;
use reqwest::Client;

use crate::monitor::outcome::{CallError, CallOutcome};

const USER_AGENT: &str = concat!("endpoint-poller/", env!("CARGO_PKG_VERSION"));

/// Issues GET requests over a shared connection pool.
#[derive(Debug, Clone)]
pub struct EndpointCaller {
    client: Client,
}

impl EndpointCaller {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Use an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Call `url` once and log what happened.
    pub async fn call(&self, url: &str) -> CallOutcome {
        tracing::info!(url = %url, "Calling endpoint");

        let start = Instant::now();

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Error calling endpoint");
                return CallOutcome::failed(url, CallError::Request(e));
            }
        };

        let duration = start.elapsed();
        let status = response.status();

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Error reading response body");
                return CallOutcome::failed(url, CallError::Body(e));
            }
        };

        tracing::info!(
            url = %url,
            status = %status,
            body_bytes = body.len(),
            duration = ?duration,
            "Endpoint responded"
        );

        CallOutcome::success(url, status, body.len(), duration)
    }
}
