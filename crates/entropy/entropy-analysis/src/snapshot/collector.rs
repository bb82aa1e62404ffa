//! SnapshotCollector: Stamps the current ambient reading with the
//! thresholds in force and encodes the result.

use entropy_core::config::ThresholdConfig;
use entropy_core::constants::{DEFAULT_MAX_RANDOMNESS_DELTA, DEFAULT_MAX_TIMESTAMP_DELTA};
use entropy_core::types::U256;

use super::model::EntropySnapshot;
use super::source::EntropySource;

/// Thresholds copied into each snapshot at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotThresholds {
    pub max_timestamp_delta: U256,
    pub max_randomness_delta: U256,
}

impl SnapshotThresholds {
    pub fn new(max_timestamp_delta: impl Into<U256>, max_randomness_delta: impl Into<U256>) -> Self {
        Self {
            max_timestamp_delta: max_timestamp_delta.into(),
            max_randomness_delta: max_randomness_delta.into(),
        }
    }
}

impl Default for SnapshotThresholds {
    fn default() -> Self {
        Self {
            max_timestamp_delta: U256::from_u64(DEFAULT_MAX_TIMESTAMP_DELTA),
            max_randomness_delta: U256::from_u128(DEFAULT_MAX_RANDOMNESS_DELTA),
        }
    }
}

impl From<&ThresholdConfig> for SnapshotThresholds {
    fn from(config: &ThresholdConfig) -> Self {
        Self {
            max_timestamp_delta: config.effective_max_timestamp_delta(),
            max_randomness_delta: config.effective_max_randomness_delta(),
        }
    }
}

/// Captures self-describing snapshots from an [`EntropySource`].
///
/// Threshold changes only affect snapshots captured afterwards; records
/// already handed out keep the values they were stamped with.
pub struct SnapshotCollector<S> {
    source: S,
    thresholds: SnapshotThresholds,
}

impl<S: EntropySource> SnapshotCollector<S> {
    /// Create a collector using the default thresholds.
    pub fn new(source: S) -> Self {
        Self::with_thresholds(source, SnapshotThresholds::default())
    }

    pub fn with_thresholds(source: S, thresholds: SnapshotThresholds) -> Self {
        Self { source, thresholds }
    }

    pub fn thresholds(&self) -> SnapshotThresholds {
        self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: SnapshotThresholds) {
        self.thresholds = thresholds;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Capture the current state without encoding it.
    pub fn capture(&self) -> EntropySnapshot {
        let reading = self.source.read();
        EntropySnapshot {
            timestamp: reading.timestamp,
            randomness_seed: reading.randomness_seed,
            max_timestamp_delta: self.thresholds.max_timestamp_delta,
            max_randomness_delta: self.thresholds.max_randomness_delta,
        }
    }

    /// Capture and encode. Deterministic for a fixed ambient reading.
    pub fn collect(&self) -> Vec<u8> {
        let snapshot = self.capture();
        tracing::trace!(
            timestamp = %snapshot.timestamp,
            randomness_seed = %snapshot.randomness_seed,
            "snapshot captured"
        );
        snapshot.encode()
    }
}
