//! Tracing subscriber setup for the `wirerec` binary.
//!
//! `RUST_LOG` wins when set; otherwise the filter comes from
//! [`RuntimeConfig::log_level`]. Format (pretty or JSON) follows
//! [`RuntimeConfig::log_format`].

use crate::runtime_config::{LogFormat, RuntimeConfig};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once: a second initialization loses the race and
/// is reported on stderr instead of panicking.
pub fn init(config: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let result = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    if let Err(err) = result {
        eprintln!("failed to initialize logging: {err}");
    }
}
