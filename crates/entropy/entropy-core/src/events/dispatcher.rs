//! EventDispatcher: Synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::WatchEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn WatchEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn WatchEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn WatchEventHandler)>(&self, event_name: &'static str, f: F) {
        for (index, handler) in self.handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::error!(event = event_name, handler = index, "event handler panicked");
            }
        }
    }

    pub fn emit_snapshot_collected(&self, event: &SnapshotCollectedEvent) {
        self.emit("snapshot_collected", |h| h.on_snapshot_collected(event));
    }

    pub fn emit_drift_evaluated(&self, event: &DriftEvaluatedEvent) {
        self.emit("drift_evaluated", |h| h.on_drift_evaluated(event));
    }

    pub fn emit_alert_raised(&self, event: &AlertRaisedEvent) {
        self.emit("alert_raised", |h| h.on_alert_raised(event));
    }

    pub fn emit_thresholds_changed(&self, event: &ThresholdsChangedEvent) {
        self.emit("thresholds_changed", |h| h.on_thresholds_changed(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit("error", |h| h.on_error(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
