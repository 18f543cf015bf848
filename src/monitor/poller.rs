//! The polling loop.

use std::sync::Arc;
use futures_util::future::join_all;

use crate::config::PollerConfig;
use crate::monitor::caller::EndpointCaller;
use crate::monitor::outcome::{CallError, CallOutcome, RoundSummary};
use crate::monitor::schedule::random_delay;

/// Polls every configured endpoint once per round, forever.
pub struct Poller {
    config: PollerConfig,
    caller: Arc<EndpointCaller>,
    round: u64,
}

impl Poller {
    pub fn new(config: PollerConfig, caller: EndpointCaller) -> Self {
        Self {
            config,
            caller: Arc::new(caller),
            round: 0,
        }
    }

    /// Run rounds until the process is killed.
    pub async fn run(mut self) {
        tracing::info!(
            endpoints = self.config.endpoints.len(),
            interval = ?self.config.interval,
            "Poller starting"
        );

        loop {
            self.run_round().await;

            let delay = random_delay(self.config.interval, &mut rand::thread_rng());
            tracing::info!(delay = ?delay, "Waiting for randomized interval");
            tokio::time::sleep(delay).await;
        }
    }

    /// Call every endpoint concurrently and wait until all of them finish.
    pub async fn run_round(&mut self) -> RoundSummary {
        self.round += 1;
        let round = self.round;

        tracing::info!(
            round,
            endpoints = self.config.endpoints.len(),
            "Starting new round of endpoint calls"
        );

        let handles: Vec<_> = self
            .config
            .endpoints
            .iter()
            .map(|url| {
                let caller = Arc::clone(&self.caller);
                let url = url.clone();
                tokio::spawn(async move { caller.call(&url).await })
            })
            .collect();

        // Barrier: one joined handle per endpoint, whatever its result.
        let outcomes: Vec<CallOutcome> = join_all(handles)
            .await
            .into_iter()
            .zip(&self.config.endpoints)
            .map(|(joined, url)| match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(url = %url, error = %e, "Endpoint call task failed");
                    CallOutcome::failed(url, CallError::Task(e.to_string()))
                }
            })
            .collect();

        let summary = RoundSummary { round, outcomes };

        tracing::info!(
            round,
            total = summary.total(),
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "All endpoint calls for this round completed"
        );

        summary
    }
}
