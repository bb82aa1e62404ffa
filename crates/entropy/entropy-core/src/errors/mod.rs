//! Error handling for the entropy watchdog.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod payload_error;
pub mod snapshot_error;
pub mod watchdog_error;
pub mod word_error;

pub use config_error::ConfigError;
pub use error_code::WatchdogErrorCode;
pub use payload_error::PayloadError;
pub use snapshot_error::SnapshotError;
pub use watchdog_error::WatchdogError;
pub use word_error::WordError;
