//! DriftEvaluator: Decides whether the newest snapshot drifted from the
//! one before it.
//!
//! Evaluation is pure: no I/O, no logging, no retained state. The same
//! history always yields the same [`Evaluation`], and only the two newest
//! entries are ever read.

use entropy_core::config::EvaluationConfig;
use entropy_core::constants::{
    MIN_HISTORY_LEN, REASON_DRIFT_DETECTED, REASON_NOT_ENOUGH_DATA, REASON_NO_DRIFT,
    REASON_NO_SIGNIFICANT_DRIFT, REASON_SIGNIFICANT_DRIFT,
};
use entropy_core::errors::{PayloadError, SnapshotError};
use entropy_core::types::{DigestAlgorithm, DriftPolicy, U256};

use super::digest::record_digest;
use super::payload::AlertPayload;
use crate::snapshot::EntropySnapshot;

/// Outcome of one evaluation: the alert flag and its diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub alert: bool,
    pub payload: Vec<u8>,
}

impl Evaluation {
    fn quiet(reason: &str) -> Self {
        Self {
            alert: false,
            payload: AlertPayload::plain(reason),
        }
    }

    pub fn into_parts(self) -> (bool, Vec<u8>) {
        (self.alert, self.payload)
    }

    /// Decode the payload for the policy that produced it.
    pub fn interpret(&self, policy: DriftPolicy) -> Result<AlertPayload, PayloadError> {
        AlertPayload::interpret(policy, self.alert, &self.payload)
    }
}

/// Single evaluator type parameterized by a comparison policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriftEvaluator {
    policy: DriftPolicy,
    digest: DigestAlgorithm,
}

impl DriftEvaluator {
    pub fn new(policy: DriftPolicy) -> Self {
        Self {
            policy,
            digest: DigestAlgorithm::default(),
        }
    }

    /// Set the digest used by [`DriftPolicy::HashEquality`].
    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::new(config.effective_policy()).with_digest(config.effective_digest())
    }

    pub fn policy(&self) -> DriftPolicy {
        self.policy
    }

    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }

    /// Evaluate a newest-first history.
    ///
    /// # Panics
    ///
    /// Panics if an entry the policy must decode is not a well-formed
    /// snapshot. Malformed input is an integration fault; callers that want
    /// to handle it use [`DriftEvaluator::try_evaluate`].
    pub fn evaluate<B: AsRef<[u8]>>(&self, history: &[B]) -> Evaluation {
        match self.try_evaluate(history) {
            Ok(evaluation) => evaluation,
            Err(e) => panic!("malformed snapshot in history: {e}"),
        }
    }

    /// Fallible form of [`DriftEvaluator::evaluate`].
    pub fn try_evaluate<B: AsRef<[u8]>>(&self, history: &[B]) -> Result<Evaluation, SnapshotError> {
        if history.len() < MIN_HISTORY_LEN {
            return Ok(Evaluation::quiet(REASON_NOT_ENOUGH_DATA));
        }
        let current = history[0].as_ref();
        let previous = history[1].as_ref();

        match self.policy {
            DriftPolicy::HashEquality => Ok(self.hash_equality(current, previous)),
            DriftPolicy::ThresholdDelta => {
                let current = EntropySnapshot::decode(current, 0)?;
                let previous = EntropySnapshot::decode(previous, 1)?;
                Ok(threshold_delta(&current, &previous))
            }
        }
    }

    fn hash_equality(&self, current: &[u8], previous: &[u8]) -> Evaluation {
        if record_digest(self.digest, current) != record_digest(self.digest, previous) {
            Evaluation {
                alert: true,
                payload: AlertPayload::encode_message(REASON_DRIFT_DETECTED),
            }
        } else {
            Evaluation::quiet(REASON_NO_DRIFT)
        }
    }
}

/// Absolute timestamp and randomness deltas between two snapshots.
pub fn deltas(current: &EntropySnapshot, previous: &EntropySnapshot) -> (U256, U256) {
    (
        current.timestamp.abs_diff(previous.timestamp),
        current.randomness_seed.abs_diff(previous.randomness_seed),
    )
}

/// Thresholds come from `previous`, not `current`: a threshold change
/// stamped into the newest snapshot first gates the evaluation after this
/// one. Existing deployments depend on this one-cycle delay.
fn threshold_delta(current: &EntropySnapshot, previous: &EntropySnapshot) -> Evaluation {
    let (ts_delta, rand_delta) = deltas(current, previous);

    if ts_delta > previous.max_timestamp_delta || rand_delta > previous.max_randomness_delta {
        Evaluation {
            alert: true,
            payload: AlertPayload::encode_metrics(REASON_SIGNIFICANT_DRIFT, ts_delta, rand_delta),
        }
    } else {
        Evaluation::quiet(REASON_NO_SIGNIFICANT_DRIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(ts: u64, rand: u64, max_ts: u64, max_rand: u64) -> EntropySnapshot {
        EntropySnapshot {
            timestamp: U256::from_u64(ts),
            randomness_seed: U256::from_u64(rand),
            max_timestamp_delta: U256::from_u64(max_ts),
            max_randomness_delta: U256::from_u64(max_rand),
        }
    }

    #[test]
    fn threshold_equal_to_delta_does_not_alert() {
        let previous = snap(1000, 500, 5, 1000);
        let current = snap(1005, 1500, 5, 1000);
        let result = threshold_delta(&current, &previous);
        assert!(!result.alert);
    }

    #[test]
    fn randomness_drift_alone_alerts() {
        let previous = snap(1000, 500, 5, 1000);
        let current = snap(1000, 1501, 5, 1000);
        let result = threshold_delta(&current, &previous);
        assert!(result.alert);
        assert_eq!(
            result.interpret(DriftPolicy::ThresholdDelta).unwrap(),
            AlertPayload::Metrics {
                reason: REASON_SIGNIFICANT_DRIFT.into(),
                ts_delta: U256::ZERO,
                rand_delta: U256::from_u64(1001),
            }
        );
    }

    #[test]
    fn thresholds_are_read_from_previous() {
        // current raises the limit to 100, but previous still says 5
        let previous = snap(1000, 500, 5, 1000);
        let current = snap(1050, 500, 100, 1000);
        assert!(threshold_delta(&current, &previous).alert);

        // the raised limit applies once the record becomes `previous`
        let next = snap(1100, 500, 100, 1000);
        assert!(!threshold_delta(&next, &current).alert);
    }

    #[test]
    fn short_history_skips_decoding() {
        let evaluator = DriftEvaluator::new(DriftPolicy::ThresholdDelta);
        let history = [vec![0u8; 3]];
        let result = evaluator.try_evaluate(&history).unwrap();
        assert_eq!(result.payload, REASON_NOT_ENOUGH_DATA.as_bytes());
    }

    #[test]
    fn malformed_entry_reports_index() {
        let evaluator = DriftEvaluator::new(DriftPolicy::ThresholdDelta);
        let history = [snap(1, 1, 1, 1).encode(), vec![0u8; 64]];
        assert_eq!(
            evaluator.try_evaluate(&history),
            Err(SnapshotError::InvalidLength {
                index: 1,
                expected: 128,
                actual: 64
            })
        );
    }

    #[test]
    #[should_panic(expected = "malformed snapshot")]
    fn evaluate_panics_on_malformed_entry() {
        let evaluator = DriftEvaluator::new(DriftPolicy::ThresholdDelta);
        let history = [vec![0u8; 5], vec![0u8; 128]];
        evaluator.evaluate(&history);
    }

    #[test]
    fn hash_equality_does_not_decode() {
        let evaluator = DriftEvaluator::new(DriftPolicy::HashEquality);
        let history = [b"short".to_vec(), b"short".to_vec()];
        let result = evaluator.evaluate(&history);
        assert!(!result.alert);
        assert_eq!(result.payload, REASON_NO_DRIFT.as_bytes());
    }

    #[test]
    fn only_two_newest_entries_are_read() {
        let evaluator = DriftEvaluator::new(DriftPolicy::ThresholdDelta);
        let a = snap(1000, 500, 5, 1000).encode();
        let b = snap(1002, 500, 5, 1000).encode();
        let history = [b, a, vec![0xde, 0xad]];
        assert!(!evaluator.evaluate(&history).alert);
    }
}
