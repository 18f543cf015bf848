//! Endpoint polling subsystem.
//!
//! # Data Flow
//! ```text
//! poller.rs (one round)
//!     → spawn caller.rs task per endpoint
//!     → join every task (completion barrier)
//!     → outcome.rs RoundSummary logged
//!     → schedule.rs picks a delay in [0, interval)
//!     → sleep, next round
//! ```
//!
//! # Design Decisions
//! - Rounds are strictly sequential; calls inside a round are concurrent
//! - One endpoint's failure is terminal to that call only
//! - No retries, no per-call timeout

pub mod caller;
pub mod outcome;
pub mod poller;
pub mod schedule;

pub use caller::EndpointCaller;
pub use outcome::{CallError, CallOutcome, CallResult, RoundSummary};
pub use poller::Poller;
