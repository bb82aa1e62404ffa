//! # entropy-analysis
//!
//! Snapshot capture, the ABI codec, drift evaluation policies, and the
//! watchdog loop that ties them to alert sinks.
//!
//! ```
//! use entropy_analysis::evaluator::DriftEvaluator;
//! use entropy_analysis::snapshot::{AmbientReading, SnapshotCollector, StaticSource};
//! use entropy_core::DriftPolicy;
//!
//! let source = StaticSource::new(AmbientReading::new(1000u64, 500u64));
//! let collector = SnapshotCollector::new(source);
//! let older = collector.collect();
//! collector.source().update(AmbientReading::new(1002u64, 500u64));
//! let newer = collector.collect();
//!
//! let evaluation = DriftEvaluator::new(DriftPolicy::ThresholdDelta).evaluate(&[newer, older]);
//! assert!(!evaluation.alert);
//! ```

pub mod codec;
pub mod evaluator;
pub mod snapshot;
pub mod watchdog;

pub use evaluator::{AlertPayload, DriftEvaluator, Evaluation};
pub use snapshot::{EntropySnapshot, SnapshotCollector};
pub use watchdog::{AlertSink, Watchdog};
