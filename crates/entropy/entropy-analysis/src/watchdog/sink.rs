//! AlertSink: The outbound edge for alert payloads.

use std::sync::Mutex;

/// Receives alert payloads and republishes them.
///
/// Sinks get the payload byte-for-byte as the evaluator produced it and
/// must not depend on any validation having happened upstream.
pub trait AlertSink: Send + Sync {
    fn emit(&self, payload: &[u8]);
}

/// Logs each payload as hex at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AlertSink for TracingSink {
    fn emit(&self, payload: &[u8]) {
        tracing::warn!(payload = %hex::encode(payload), "entropy drift alert");
    }
}

/// Keeps every emitted payload in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    payloads: Mutex<Vec<Vec<u8>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far, oldest first.
    pub fn payloads(&self) -> Vec<Vec<u8>> {
        match self.payloads.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.payloads.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AlertSink for RecordingSink {
    fn emit(&self, payload: &[u8]) {
        match self.payloads.lock() {
            Ok(mut guard) => guard.push(payload.to_vec()),
            Err(poisoned) => poisoned.into_inner().push(payload.to_vec()),
        }
    }
}
