//! Event payload types.

use crate::types::{DriftPolicy, U256};

/// Payload for `on_snapshot_collected`.
#[derive(Debug, Clone)]
pub struct SnapshotCollectedEvent {
    pub timestamp: U256,
    pub randomness_seed: U256,
    pub encoded_len: usize,
}

/// Payload for `on_drift_evaluated`.
#[derive(Debug, Clone)]
pub struct DriftEvaluatedEvent {
    pub policy: DriftPolicy,
    pub alert: bool,
    pub history_len: usize,
}

/// Payload for `on_alert_raised`. `payload` is the evaluation output, unchanged.
#[derive(Debug, Clone)]
pub struct AlertRaisedEvent {
    pub policy: DriftPolicy,
    pub payload: Vec<u8>,
    pub sink_count: usize,
}

/// Payload for `on_thresholds_changed`.
#[derive(Debug, Clone)]
pub struct ThresholdsChangedEvent {
    pub max_timestamp_delta: U256,
    pub max_randomness_delta: U256,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
