//! WatchdogErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait WatchdogErrorCode {
    /// Returns the error code string (e.g., "SNAPSHOT_DECODE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const WORD_PARSE_ERROR: &str = "WORD_PARSE_ERROR";
pub const SNAPSHOT_DECODE_ERROR: &str = "SNAPSHOT_DECODE_ERROR";
pub const PAYLOAD_DECODE_ERROR: &str = "PAYLOAD_DECODE_ERROR";
pub const PAYLOAD_SHAPE_ERROR: &str = "PAYLOAD_SHAPE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
