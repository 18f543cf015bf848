//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (INTERVAL_SECONDS, ENDPOINTS)
//!     → loader.rs (lookup & assemble)
//!     → validation.rs (interval fallback, endpoint normalization)
//!     → PollerConfig (validated, immutable)
//!     → handed by value to the poller
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - A bad interval degrades to the default, a missing endpoint list is fatal
//! - Lookup is injectable so tests never mutate the process environment

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{env_lookup, load_from_env, load_with, ConfigError};
pub use schema::PollerConfig;
