//! Word parsing errors.

use super::error_code::{self, WatchdogErrorCode};

/// Errors that can occur while parsing a 256-bit word from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("empty numeric string")]
    Empty,

    #[error("invalid digit '{ch}' for radix {radix}")]
    InvalidDigit { ch: char, radix: u32 },

    #[error("value does not fit in 256 bits: {0}")]
    Overflow(String),

    #[error("negative value not allowed: {0}")]
    Negative(String),

    #[error("malformed word: {0}")]
    Malformed(String),
}

impl WatchdogErrorCode for WordError {
    fn error_code(&self) -> &'static str {
        error_code::WORD_PARSE_ERROR
    }
}
