//! Tracing setup: structured JSON logs filtered by `MEDASSIST_LOG`.

use std::sync::Once;

use medassist_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global JSON subscriber.
///
/// `MEDASSIST_LOG` takes precedence over `default_level`. Idempotent, and a
/// no-op if the host process already installed a subscriber.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}
