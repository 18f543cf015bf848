//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, poller, caller, health responder
//!     → tracing events with structured fields
//!     → logging.rs subscriber (pretty or JSON)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Structured fields (url, status, duration) instead of formatted strings
//! - Level filtering through RUST_LOG, format through LOG_FORMAT

pub mod logging;
