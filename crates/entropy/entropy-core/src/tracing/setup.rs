//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, VERSION};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `ENTROPY_WATCH_LOG` for per-crate log levels, e.g.
/// `ENTROPY_WATCH_LOG=entropy_analysis=debug,entropy_core=warn`.
/// Falls back to `entropy=info` if unset or invalid.
///
/// Idempotent. If another subscriber is already installed globally, that
/// one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();

        match installed {
            Ok(()) => ::tracing::debug!(version = VERSION, "tracing initialized"),
            Err(e) => ::tracing::debug!(
                version = VERSION,
                error = %e,
                "global subscriber already installed, keeping it"
            ),
        }
    });
}
