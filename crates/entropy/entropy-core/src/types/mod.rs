//! Value types shared across the workspace.

pub mod policy;
pub mod word;

pub use policy::{DigestAlgorithm, DriftPolicy};
pub use word::{U256, WORD_BYTES};
