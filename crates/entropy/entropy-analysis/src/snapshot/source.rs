//! Ambient state source.
//!
//! The host runtime owns the clock and the randomness beacon. The collector
//! only asks for the current reading.

use std::sync::RwLock;

use entropy_core::types::U256;

/// The two externally observed values at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AmbientReading {
    pub timestamp: U256,
    pub randomness_seed: U256,
}

impl AmbientReading {
    pub fn new(timestamp: impl Into<U256>, randomness_seed: impl Into<U256>) -> Self {
        Self {
            timestamp: timestamp.into(),
            randomness_seed: randomness_seed.into(),
        }
    }
}

/// Supplies the current ambient reading. Reads must not mutate observable state.
pub trait EntropySource: Send + Sync {
    fn read(&self) -> AmbientReading;
}

/// A source the host pushes readings into, e.g. once per block or tick.
#[derive(Debug, Default)]
pub struct StaticSource {
    reading: RwLock<AmbientReading>,
}

impl StaticSource {
    pub fn new(reading: AmbientReading) -> Self {
        Self {
            reading: RwLock::new(reading),
        }
    }

    /// Replace the current reading.
    pub fn update(&self, reading: AmbientReading) {
        match self.reading.write() {
            Ok(mut guard) => *guard = reading,
            Err(poisoned) => *poisoned.into_inner() = reading,
        }
    }
}

impl EntropySource for StaticSource {
    fn read(&self) -> AmbientReading {
        match self.reading.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl<S: EntropySource + ?Sized> EntropySource for std::sync::Arc<S> {
    fn read(&self) -> AmbientReading {
        (**self).read()
    }
}
