//! Watchdog orchestration: sample → retain → evaluate → publish.

pub mod runner;
pub mod sink;
pub mod window;

pub use runner::Watchdog;
pub use sink::{AlertSink, RecordingSink, TracingSink};
pub use window::HistoryWindow;
