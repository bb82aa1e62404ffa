use criterion::{black_box, criterion_group, criterion_main, Criterion};

use entropy_analysis::evaluator::DriftEvaluator;
use entropy_analysis::snapshot::EntropySnapshot;
use entropy_core::types::{DigestAlgorithm, DriftPolicy, U256};

fn history(len: usize) -> Vec<Vec<u8>> {
    (0..len as u64)
        .rev()
        .map(|i| {
            EntropySnapshot {
                timestamp: U256::from_u64(1_000 + i * 3),
                randomness_seed: U256::from_u128(u128::from(i).wrapping_mul(0x9e37_79b9_7f4a_7c15)),
                max_timestamp_delta: U256::from_u64(5),
                max_randomness_delta: U256::from_u128(u128::MAX / 2),
            }
            .encode()
        })
        .collect()
}

fn bench_threshold_delta(c: &mut Criterion) {
    let evaluator = DriftEvaluator::new(DriftPolicy::ThresholdDelta);
    let short = history(2);
    let long = history(1_000);

    c.bench_function("threshold_delta_2", |b| {
        b.iter(|| evaluator.evaluate(black_box(&short)));
    });
    // cost must not grow with history length
    c.bench_function("threshold_delta_1000", |b| {
        b.iter(|| evaluator.evaluate(black_box(&long)));
    });
}

fn bench_hash_equality(c: &mut Criterion) {
    let history = history(2);
    for digest in [DigestAlgorithm::Sha256, DigestAlgorithm::Xxh3] {
        let evaluator = DriftEvaluator::new(DriftPolicy::HashEquality).with_digest(digest);
        c.bench_function(&format!("hash_equality_{digest}"), |b| {
            b.iter(|| evaluator.evaluate(black_box(&history)));
        });
    }
}

criterion_group!(benches, bench_threshold_delta, bench_hash_equality);
criterion_main!(benches);
