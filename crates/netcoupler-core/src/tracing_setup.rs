//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize the NetCoupler tracing/logging system.
///
/// Reads the `NETCOUPLER_LOG` environment variable for per-module levels,
/// e.g. `NETCOUPLER_LOG=netcoupler_network=debug,netcoupler_links=info`.
/// Falls back to `netcoupler=info` when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));

        // A host may already have installed a subscriber; keep theirs.
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

/// Initialize tracing with structured JSON output and a custom filter string.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
