//! Watchdog: Drives one sample/evaluate/publish cycle per `tick`.
//!
//! The host decides the cadence. Each tick captures a snapshot, pushes it
//! into the rolling window, evaluates the window, and hands alert payloads
//! to every registered sink unchanged.

use std::sync::Arc;

use entropy_core::config::WatchdogConfig;
use entropy_core::errors::{SnapshotError, WatchdogError, WatchdogErrorCode};
use entropy_core::events::types::{
    AlertRaisedEvent, DriftEvaluatedEvent, ErrorEvent, SnapshotCollectedEvent,
    ThresholdsChangedEvent,
};
use entropy_core::events::{EventDispatcher, WatchEventHandler};
use entropy_core::tracing::metrics;
use entropy_core::types::DriftPolicy;
use tracing::field;

use super::sink::AlertSink;
use super::window::HistoryWindow;
use crate::evaluator::{AlertPayload, DriftEvaluator, Evaluation};
use crate::snapshot::{EntropySnapshot, EntropySource, SnapshotCollector, SnapshotThresholds};

pub struct Watchdog<S> {
    collector: SnapshotCollector<S>,
    evaluator: DriftEvaluator,
    window: HistoryWindow,
    sinks: Vec<Arc<dyn AlertSink>>,
    events: EventDispatcher,
}

impl<S: EntropySource> Watchdog<S> {
    pub fn new(collector: SnapshotCollector<S>, evaluator: DriftEvaluator, window: HistoryWindow) -> Self {
        Self {
            collector,
            evaluator,
            window,
            sinks: Vec::new(),
            events: EventDispatcher::new(),
        }
    }

    /// Build a watchdog from resolved configuration.
    pub fn from_config(source: S, config: &WatchdogConfig) -> Self {
        Self::new(
            SnapshotCollector::with_thresholds(source, SnapshotThresholds::from(&config.thresholds)),
            DriftEvaluator::from_config(&config.evaluation),
            HistoryWindow::new(config.evaluation.effective_history_window()),
        )
    }

    pub fn register_sink(&mut self, sink: Arc<dyn AlertSink>) {
        self.sinks.push(sink);
    }

    pub fn register_handler(&mut self, handler: Arc<dyn WatchEventHandler>) {
        self.events.register(handler);
    }

    pub fn evaluator(&self) -> &DriftEvaluator {
        &self.evaluator
    }

    pub fn collector(&self) -> &SnapshotCollector<S> {
        &self.collector
    }

    pub fn window(&self) -> &HistoryWindow {
        &self.window
    }

    /// Change the thresholds stamped into future snapshots.
    pub fn set_thresholds(&mut self, thresholds: SnapshotThresholds) {
        self.collector.set_thresholds(thresholds);
        tracing::info!(
            max_timestamp_delta = %thresholds.max_timestamp_delta,
            max_randomness_delta = %thresholds.max_randomness_delta,
            "thresholds updated; effective from the evaluation after next"
        );
        self.events.emit_thresholds_changed(&ThresholdsChangedEvent {
            max_timestamp_delta: thresholds.max_timestamp_delta,
            max_randomness_delta: thresholds.max_randomness_delta,
        });
    }

    /// Run one cycle: collect, retain, evaluate, publish.
    pub fn tick(&mut self) -> Result<Evaluation, WatchdogError> {
        let snapshot = self.collector.capture();
        self.events.emit_snapshot_collected(&SnapshotCollectedEvent {
            timestamp: snapshot.timestamp,
            randomness_seed: snapshot.randomness_seed,
            encoded_len: entropy_core::constants::SNAPSHOT_ENCODED_LEN,
        });
        self.ingest(snapshot.encode())
    }

    /// Push an externally captured encoded snapshot and evaluate.
    ///
    /// Unlike `tick`, the bytes are not known to be well formed. Under
    /// `ThresholdDelta` a record that does not decode is rejected before it
    /// enters the window, so the window is unchanged and later ticks are
    /// unaffected.
    pub fn ingest(&mut self, encoded: Vec<u8>) -> Result<Evaluation, WatchdogError> {
        let span = tracing::debug_span!(
            "watchdog_tick",
            policy = self.evaluator.policy().as_str(),
            history_len = field::Empty,
            alert = field::Empty,
            ts_delta = field::Empty,
            rand_delta = field::Empty,
            payload_len = field::Empty,
            sink_count = field::Empty,
        );
        let _guard = span.enter();

        if self.evaluator.policy() == DriftPolicy::ThresholdDelta {
            if let Err(e) = EntropySnapshot::decode(&encoded, 0) {
                return Err(self.reject(e));
            }
        }

        self.window.push(encoded);
        let history = self.window.as_history();
        let history_len = history.len();
        span.record(metrics::HISTORY_LEN, history_len);

        let evaluation = match self.evaluator.try_evaluate(history) {
            Ok(evaluation) => evaluation,
            Err(e) => return Err(self.reject(e)),
        };

        span.record(metrics::ALERT, evaluation.alert);
        span.record(metrics::PAYLOAD_LEN, evaluation.payload.len());

        self.events.emit_drift_evaluated(&DriftEvaluatedEvent {
            policy: self.evaluator.policy(),
            alert: evaluation.alert,
            history_len,
        });

        if evaluation.alert {
            if let Ok(AlertPayload::Metrics {
                ts_delta,
                rand_delta,
                ..
            }) = evaluation.interpret(self.evaluator.policy())
            {
                span.record(metrics::TS_DELTA, field::display(ts_delta));
                span.record(metrics::RAND_DELTA, field::display(rand_delta));
            }
            self.publish(&evaluation.payload);
            span.record(metrics::SINK_COUNT, self.sinks.len());
        } else {
            tracing::debug!(
                reason = %String::from_utf8_lossy(&evaluation.payload),
                "no alert"
            );
        }

        Ok(evaluation)
    }

    /// Decode the newest retained snapshot, if any.
    pub fn latest_snapshot(&self) -> Option<EntropySnapshot> {
        self.window
            .newest()
            .and_then(|bytes| EntropySnapshot::decode(bytes, 0).ok())
    }

    fn reject(&self, e: SnapshotError) -> WatchdogError {
        tracing::error!(error = %e, "malformed snapshot rejected");
        self.events.emit_error(&ErrorEvent {
            message: e.to_string(),
            error_code: e.error_code().to_string(),
        });
        e.into()
    }

    fn publish(&self, payload: &[u8]) {
        tracing::warn!(
            policy = %self.evaluator.policy(),
            sinks = self.sinks.len(),
            "entropy drift detected"
        );
        for sink in &self.sinks {
            sink.emit(payload);
        }
        self.events.emit_alert_raised(&AlertRaisedEvent {
            policy: self.evaluator.policy(),
            payload: payload.to_vec(),
            sink_count: self.sinks.len(),
        });
    }
}
