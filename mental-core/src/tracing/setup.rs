//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Fallback directive when `MENTAL_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "mental=info";

/// Build the filter from `MENTAL_LOG`.
/// Format: `MENTAL_LOG=mental_compensation=debug,mental_core=warn`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the tracing/logging system with [`env_filter`].
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = env_filter();

        // try_init: an embedding application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
