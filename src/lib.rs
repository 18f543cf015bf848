//! Periodic HTTP endpoint poller library.

pub mod config;
pub mod health;
pub mod monitor;
pub mod observability;

pub use config::PollerConfig;
pub use health::HealthResponder;
pub use monitor::{EndpointCaller, Poller};
