//! Liveness subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → bind TcpListener on the health address
//!     → responder.rs serves forever in a detached task
//!
//! any request (any method, any path)
//!     → 200 "Healthy"
//! ```
//!
//! # Design Decisions
//! - Liveness only: the answer never depends on polling results
//! - Fire-and-forget: nothing joins the responder task
//! - Bind and serve errors are logged, never fatal to polling

pub mod responder;

pub use responder::{HealthResponder, HEALTHY_BODY};
