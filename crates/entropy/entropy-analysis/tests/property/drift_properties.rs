use entropy_analysis::evaluator::{deltas, AlertPayload, DriftEvaluator};
use entropy_analysis::snapshot::{AmbientReading, EntropySnapshot, SnapshotCollector, StaticSource};
use entropy_core::types::{DriftPolicy, U256};
use proptest::prelude::*;

fn arb_word() -> impl Strategy<Value = U256> {
    prop_oneof![
        any::<u64>().prop_map(U256::from_u64),
        any::<u128>().prop_map(U256::from_u128),
        any::<[u8; 32]>().prop_map(U256::from_be_bytes),
    ]
}

fn arb_snapshot() -> impl Strategy<Value = EntropySnapshot> {
    (arb_word(), arb_word(), arb_word(), arb_word()).prop_map(|(ts, rand, max_ts, max_rand)| {
        EntropySnapshot {
            timestamp: ts,
            randomness_seed: rand,
            max_timestamp_delta: max_ts,
            max_randomness_delta: max_rand,
        }
    })
}

fn threshold() -> DriftEvaluator {
    DriftEvaluator::new(DriftPolicy::ThresholdDelta)
}

// ── Short histories never alert ─────────────────────────────────────────

proptest! {
    #[test]
    fn short_history_never_alerts(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        for policy in [DriftPolicy::ThresholdDelta, DriftPolicy::HashEquality] {
            let evaluator = DriftEvaluator::new(policy);
            let one = evaluator.evaluate(&[bytes.clone()]);
            prop_assert!(!one.alert);
            prop_assert_eq!(&one.payload[..], b"Not enough data");
        }
    }
}

// ── Identical snapshots are quiet ───────────────────────────────────────

proptest! {
    #[test]
    fn identical_snapshots_are_quiet(snapshot in arb_snapshot()) {
        let encoded = snapshot.encode();
        let evaluation = threshold().evaluate(&[encoded.clone(), encoded]);
        prop_assert!(!evaluation.alert);
        prop_assert_eq!(deltas(&snapshot, &snapshot), (U256::ZERO, U256::ZERO));
    }
}

// ── Alert iff a delta strictly exceeds the previous thresholds ──────────

proptest! {
    #[test]
    fn alert_matches_threshold_rule(current in arb_snapshot(), previous in arb_snapshot()) {
        let evaluation = threshold().evaluate(&[current.encode(), previous.encode()]);
        let (ts_delta, rand_delta) = deltas(&current, &previous);
        let expected = ts_delta > previous.max_timestamp_delta
            || rand_delta > previous.max_randomness_delta;

        prop_assert_eq!(evaluation.alert, expected);

        match evaluation.interpret(DriftPolicy::ThresholdDelta).unwrap() {
            AlertPayload::Metrics { reason, ts_delta: ts, rand_delta: rd } => {
                prop_assert!(expected);
                prop_assert_eq!(reason, "Significant entropy drift");
                prop_assert_eq!(ts, ts_delta);
                prop_assert_eq!(rd, rand_delta);
            }
            AlertPayload::Message(reason) => {
                prop_assert!(!expected);
                prop_assert_eq!(reason, "No significant drift");
            }
        }
    }
}

// ── Delta computation is symmetric ──────────────────────────────────────

proptest! {
    #[test]
    fn deltas_are_symmetric(a in arb_snapshot(), b in arb_snapshot()) {
        prop_assert_eq!(deltas(&a, &b), deltas(&b, &a));
    }
}

// ── Hash equality tracks byte equality ──────────────────────────────────

proptest! {
    #[test]
    fn hash_equality_tracks_bytes(
        a in proptest::collection::vec(any::<u8>(), 0..200),
        b in proptest::collection::vec(any::<u8>(), 0..200),
    ) {
        let evaluation = DriftEvaluator::new(DriftPolicy::HashEquality).evaluate(&[a.clone(), b.clone()]);
        prop_assert_eq!(evaluation.alert, a != b);
    }
}

// ── Collection is deterministic for a fixed ambient state ───────────────

proptest! {
    #[test]
    fn collect_is_deterministic(ts in any::<u128>(), rand in any::<u128>()) {
        let collector = SnapshotCollector::new(StaticSource::new(AmbientReading::new(ts, rand)));
        prop_assert_eq!(collector.collect(), collector.collect());
    }
}
