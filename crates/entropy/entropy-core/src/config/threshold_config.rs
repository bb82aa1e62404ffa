//! Threshold configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_RANDOMNESS_DELTA, DEFAULT_MAX_TIMESTAMP_DELTA};
use crate::types::U256;

/// Drift thresholds copied into every snapshot at capture time.
///
/// Values accept TOML integers or strings (decimal or `0x` hex), since the
/// randomness default does not fit in a TOML integer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Maximum timestamp drift before alerting. Default: 5.
    pub max_timestamp_delta: Option<U256>,
    /// Maximum randomness drift before alerting. Default: `u128::MAX / 2`.
    pub max_randomness_delta: Option<U256>,
}

impl ThresholdConfig {
    /// Returns the effective timestamp threshold, defaulting to 5.
    pub fn effective_max_timestamp_delta(&self) -> U256 {
        self.max_timestamp_delta
            .unwrap_or(U256::from_u64(DEFAULT_MAX_TIMESTAMP_DELTA))
    }

    /// Returns the effective randomness threshold, defaulting to `u128::MAX / 2`.
    pub fn effective_max_randomness_delta(&self) -> U256 {
        self.max_randomness_delta
            .unwrap_or(U256::from_u128(DEFAULT_MAX_RANDOMNESS_DELTA))
    }
}
