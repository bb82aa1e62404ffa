//! WatchEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing watchdog activity.
///
/// Handlers only override the events they care about. `Send + Sync` so a
/// single handler can be shared across watchdogs on different threads.
pub trait WatchEventHandler: Send + Sync {
    fn on_snapshot_collected(&self, _event: &SnapshotCollectedEvent) {}
    fn on_drift_evaluated(&self, _event: &DriftEvaluatedEvent) {}
    fn on_alert_raised(&self, _event: &AlertRaisedEvent) {}
    fn on_thresholds_changed(&self, _event: &ThresholdsChangedEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}
