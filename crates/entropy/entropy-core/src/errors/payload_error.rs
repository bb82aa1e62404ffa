//! Alert payload interpretation errors.

use super::error_code::{self, WatchdogErrorCode};

/// Errors that can occur while interpreting an evaluation payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("payload truncated: need {needed} bytes, have {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("string offset {offset} out of bounds for {len}-byte payload")]
    OffsetOutOfBounds { offset: String, len: usize },

    #[error("string length {length} out of bounds for {len}-byte payload")]
    LengthOutOfBounds { length: String, len: usize },

    #[error("payload string is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

impl WatchdogErrorCode for PayloadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUtf8(_) => error_code::PAYLOAD_SHAPE_ERROR,
            _ => error_code::PAYLOAD_DECODE_ERROR,
        }
    }
}
