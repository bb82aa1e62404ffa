//! Top-level watchdog error.

use super::error_code::WatchdogErrorCode;
use super::{ConfigError, PayloadError, SnapshotError, WordError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum WatchdogError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Word error: {0}")]
    Word(#[from] WordError),
}

impl WatchdogErrorCode for WatchdogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Snapshot(e) => e.error_code(),
            Self::Payload(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Word(e) => e.error_code(),
        }
    }
}
