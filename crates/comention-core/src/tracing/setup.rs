//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the comention tracing/logging system.
///
/// Reads `COMENTION_LOG` for per-module log levels.
/// Format: `COMENTION_LOG=comention_analysis::scanner=debug,comention=info`
///
/// Falls back to `comention=info` if `COMENTION_LOG` is not set or is invalid.
/// Output goes to stderr; stdout is reserved for the report.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("comention=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .with(filter)
            .init();
    });
}
