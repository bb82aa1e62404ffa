//! Top-level watchdog configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{EvaluationConfig, ThresholdConfig};
use crate::constants::{CONFIG_FILE_NAME, MIN_HISTORY_LEN};
use crate::errors::ConfigError;
use crate::types::{DigestAlgorithm, DriftPolicy, U256};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ENTROPY_WATCH_*`)
/// 3. Project config (`entropy-watch.toml` in project root)
/// 4. User config (`~/.entropy-watch/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WatchdogConfig {
    pub thresholds: ThresholdConfig,
    pub evaluation: EvaluationConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_timestamp_delta: Option<U256>,
    pub max_randomness_delta: Option<U256>,
    pub policy: Option<DriftPolicy>,
    pub digest: Option<DigestAlgorithm>,
    pub history_window: Option<usize>,
}

impl WatchdogConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            policy = %config.evaluation.effective_policy(),
            history_window = config.evaluation.effective_history_window(),
            "watchdog config resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &WatchdogConfig) -> Result<(), ConfigError> {
        if let Some(window) = config.evaluation.history_window {
            if window < MIN_HISTORY_LEN {
                return Err(ConfigError::ValidationFailed {
                    field: "evaluation.history_window".to_string(),
                    message: format!("must be at least {MIN_HISTORY_LEN}"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.entropy-watch/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut WatchdogConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: WatchdogConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut WatchdogConfig, other: &WatchdogConfig) {
        // Thresholds
        if other.thresholds.max_timestamp_delta.is_some() {
            base.thresholds.max_timestamp_delta = other.thresholds.max_timestamp_delta;
        }
        if other.thresholds.max_randomness_delta.is_some() {
            base.thresholds.max_randomness_delta = other.thresholds.max_randomness_delta;
        }

        // Evaluation
        if other.evaluation.policy.is_some() {
            base.evaluation.policy = other.evaluation.policy;
        }
        if other.evaluation.digest.is_some() {
            base.evaluation.digest = other.evaluation.digest;
        }
        if other.evaluation.history_window.is_some() {
            base.evaluation.history_window = other.evaluation.history_window;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ENTROPY_WATCH_POLICY`, `ENTROPY_WATCH_MAX_TIMESTAMP_DELTA`, etc.
    /// Unparseable values are logged and skipped.
    fn apply_env_overrides(config: &mut WatchdogConfig) {
        if let Some(v) = env_value::<U256>("MAX_TIMESTAMP_DELTA") {
            config.thresholds.max_timestamp_delta = Some(v);
        }
        if let Some(v) = env_value::<U256>("MAX_RANDOMNESS_DELTA") {
            config.thresholds.max_randomness_delta = Some(v);
        }
        if let Some(v) = env_value::<DriftPolicy>("POLICY") {
            config.evaluation.policy = Some(v);
        }
        if let Some(v) = env_value::<DigestAlgorithm>("DIGEST") {
            config.evaluation.digest = Some(v);
        }
        if let Some(v) = env_value::<usize>("HISTORY_WINDOW") {
            config.evaluation.history_window = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut WatchdogConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_timestamp_delta {
            config.thresholds.max_timestamp_delta = Some(v);
        }
        if let Some(v) = cli.max_randomness_delta {
            config.thresholds.max_randomness_delta = Some(v);
        }
        if let Some(v) = cli.policy {
            config.evaluation.policy = Some(v);
        }
        if let Some(v) = cli.digest {
            config.evaluation.digest = Some(v);
        }
        if let Some(v) = cli.history_window {
            config.evaluation.history_window = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse `ENTROPY_WATCH_<suffix>`.
fn env_value<T>(suffix: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let key = format!("{}{suffix}", crate::constants::ENV_PREFIX);
    let raw = std::env::var(&key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key = %key, value = %raw, error = %e, "ignoring invalid env override");
            None
        }
    }
}

/// Returns the user-level config directory: `~/.entropy-watch/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".entropy-watch"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
