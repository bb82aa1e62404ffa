//! # entropy-core
//!
//! Foundation crate for the entropy drift watchdog.
//! Defines the word type, policies, errors, config, events, tracing setup,
//! and constants. `entropy-analysis` builds on it.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::WatchdogConfig;
pub use errors::{WatchdogError, WatchdogErrorCode};
pub use types::{DigestAlgorithm, DriftPolicy, U256};
