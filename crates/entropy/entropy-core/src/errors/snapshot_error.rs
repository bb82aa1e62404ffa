//! Snapshot decoding errors.

use super::error_code::{self, WatchdogErrorCode};

/// Errors raised when a history entry is not a well-formed encoded snapshot.
///
/// `evaluate` treats these as fatal integration faults and panics;
/// `try_evaluate` hands them back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("history entry {index} has {actual} bytes, expected {expected}")]
    InvalidLength {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

impl WatchdogErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        error_code::SNAPSHOT_DECODE_ERROR
    }
}
