//! Shared constants for the entropy watchdog.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Snapshot layout ----

/// Number of words in an encoded snapshot.
pub const SNAPSHOT_FIELD_COUNT: usize = 4;

/// Encoded snapshot length in bytes: four 32-byte words.
pub const SNAPSHOT_ENCODED_LEN: usize = SNAPSHOT_FIELD_COUNT * crate::types::WORD_BYTES;

// ---- Threshold defaults ----

/// Default maximum timestamp drift between consecutive snapshots.
pub const DEFAULT_MAX_TIMESTAMP_DELTA: u64 = 5;

/// Default maximum randomness drift: half the largest 128-bit value.
pub const DEFAULT_MAX_RANDOMNESS_DELTA: u128 = u128::MAX / 2;

// ---- History ----

/// Minimum history length an evaluation needs.
pub const MIN_HISTORY_LEN: usize = 2;

/// Default capacity of the rolling history window.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

// ---- Diagnostic reasons ----

pub const REASON_NOT_ENOUGH_DATA: &str = "Not enough data";
pub const REASON_NO_DRIFT: &str = "No drift";
pub const REASON_DRIFT_DETECTED: &str = "Entropy drift detected";
pub const REASON_NO_SIGNIFICANT_DRIFT: &str = "No significant drift";
pub const REASON_SIGNIFICANT_DRIFT: &str = "Significant entropy drift";

// ---- Configuration ----

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "entropy-watch.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "ENTROPY_WATCH_";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "ENTROPY_WATCH_LOG";

/// Fallback tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "entropy=info";
