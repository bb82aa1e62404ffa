//! Selectable comparison policy and digest algorithm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Strategy used to decide whether the change between two snapshots is drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftPolicy {
    /// Decode both records and compare absolute deltas against the previous
    /// record's thresholds.
    #[default]
    ThresholdDelta,
    /// Alert whenever the digests of the two raw records differ.
    ///
    /// The timestamp moves on almost every sample, so this alerts almost
    /// unconditionally. Kept for compatibility with older deployments.
    HashEquality,
}

impl DriftPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThresholdDelta => "threshold_delta",
            Self::HashEquality => "hash_equality",
        }
    }
}

impl fmt::Display for DriftPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriftPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "threshold_delta" | "threshold-delta" => Ok(Self::ThresholdDelta),
            "hash_equality" | "hash-equality" => Ok(Self::HashEquality),
            other => Err(format!("unknown drift policy '{other}'")),
        }
    }
}

/// Digest used by [`DriftPolicy::HashEquality`] to fingerprint raw records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    /// 128-bit xxh3. Fast, not collision resistant.
    Xxh3,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Xxh3 => "xxh3",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "xxh3" => Ok(Self::Xxh3),
            other => Err(format!("unknown digest algorithm '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_names_round_trip() {
        for policy in [DriftPolicy::ThresholdDelta, DriftPolicy::HashEquality] {
            assert_eq!(policy.as_str().parse::<DriftPolicy>().unwrap(), policy);
        }
        assert!("median".parse::<DriftPolicy>().is_err());
    }

    #[test]
    fn default_policy_is_threshold_delta() {
        assert_eq!(DriftPolicy::default(), DriftPolicy::ThresholdDelta);
        assert_eq!(DigestAlgorithm::default(), DigestAlgorithm::Sha256);
    }
}
