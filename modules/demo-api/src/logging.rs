//! Logging initialization.
//!
//! Installs a global `tracing` subscriber from the `logging` config section.
//! `RUST_LOG` takes precedence over the configured level so operators can
//! raise verbosity without touching config files.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the global subscriber. Safe to call more than once; later
/// calls are no-ops (tests may have installed their own subscriber).
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if result.is_err() {
        tracing::debug!("global subscriber already installed, keeping it");
    }
}
