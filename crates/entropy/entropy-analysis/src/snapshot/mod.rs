//! Snapshot capture: the record model, the ambient state source, and the
//! collector that stamps readings with the thresholds in force.

pub mod collector;
pub mod model;
pub mod source;

pub use collector::{SnapshotCollector, SnapshotThresholds};
pub use model::EntropySnapshot;
pub use source::{AmbientReading, EntropySource, StaticSource};
