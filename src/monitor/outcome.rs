//! Per-call outcomes and round summaries.

use std::time::Duration;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a single endpoint call produced no result.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("reading response body failed: {0}")]
    Body(#[source] reqwest::Error),

    #[error("call task aborted: {0}")]
    Task(String),
}

/// What a completed call produced.
#[derive(Debug)]
pub enum CallResult {
    Success {
        status: StatusCode,
        body_bytes: usize,
        duration: Duration,
    },
    Failed(CallError),
}

/// Outcome of one endpoint call within a round.
#[derive(Debug)]
pub struct CallOutcome {
    pub url: String,
    pub result: CallResult,
}

impl CallOutcome {
    pub fn success(url: &str, status: StatusCode, body_bytes: usize, duration: Duration) -> Self {
        Self {
            url: url.to_string(),
            result: CallResult::Success {
                status,
                body_bytes,
                duration,
            },
        }
    }

    pub fn failed(url: &str, error: CallError) -> Self {
        Self {
            url: url.to_string(),
            result: CallResult::Failed(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.result, CallResult::Success { .. })
    }

    /// HTTP status of a successful call.
    pub fn status(&self) -> Option<StatusCode> {
        match self.result {
            CallResult::Success { status, .. } => Some(status),
            CallResult::Failed(_) => None,
        }
    }
}

/// Every outcome of one round, in configured endpoint order.
#[derive(Debug)]
pub struct RoundSummary {
    pub round: u64,
    pub outcomes: Vec<CallOutcome>,
}

impl RoundSummary {
    /// Number of completed calls. Equals the configured endpoint count.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }
}
