//! Structured span field names.
//!
//! Spans declare these fields up front and fill them with `Span::record`,
//! so log queries can rely on consistent names.

/// Active comparison policy.
pub const POLICY: &str = "policy";

/// Number of snapshots handed to the evaluator.
pub const HISTORY_LEN: &str = "history_len";

/// Absolute timestamp delta behind a threshold alert.
pub const TS_DELTA: &str = "ts_delta";

/// Absolute randomness delta behind a threshold alert.
pub const RAND_DELTA: &str = "rand_delta";

/// Whether the evaluation raised an alert.
pub const ALERT: &str = "alert";

/// Length of the evaluation payload in bytes.
pub const PAYLOAD_LEN: &str = "payload_len";

/// Number of sinks that received an alert payload.
pub const SINK_COUNT: &str = "sink_count";
