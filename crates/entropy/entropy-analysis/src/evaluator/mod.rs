//! Drift evaluation: one evaluator, dispatched over [`DriftPolicy`].
//!
//! [`DriftPolicy`]: entropy_core::types::DriftPolicy

pub mod digest;
pub mod engine;
pub mod payload;

pub use digest::{record_digest, RecordDigest};
pub use engine::{deltas, DriftEvaluator, Evaluation};
pub use payload::AlertPayload;
