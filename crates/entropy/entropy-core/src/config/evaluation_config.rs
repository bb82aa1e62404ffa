//! Evaluation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HISTORY_WINDOW;
use crate::types::{DigestAlgorithm, DriftPolicy};

/// Configuration for the drift evaluator and its history window.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Comparison policy. Default: `threshold_delta`.
    pub policy: Option<DriftPolicy>,
    /// Digest for the `hash_equality` policy. Default: `sha256`.
    pub digest: Option<DigestAlgorithm>,
    /// Number of snapshots retained in the rolling window. Default: 10.
    pub history_window: Option<usize>,
}

impl EvaluationConfig {
    pub fn effective_policy(&self) -> DriftPolicy {
        self.policy.unwrap_or_default()
    }

    pub fn effective_digest(&self) -> DigestAlgorithm {
        self.digest.unwrap_or_default()
    }

    /// Returns the effective window capacity, defaulting to 10.
    pub fn effective_history_window(&self) -> usize {
        self.history_window.unwrap_or(DEFAULT_HISTORY_WINDOW)
    }
}
