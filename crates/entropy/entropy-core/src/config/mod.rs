//! Configuration system for the watchdog.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod evaluation_config;
pub mod threshold_config;
pub mod watchdog_config;

pub use evaluation_config::EvaluationConfig;
pub use threshold_config::ThresholdConfig;
pub use watchdog_config::{CliOverrides, WatchdogConfig};
