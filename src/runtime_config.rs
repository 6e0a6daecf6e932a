//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the `wirerec` binary.
//!
//! ## Environment Variables
//!
//! ### `WIREREC_LOG_LEVEL`
//!
//! Default log filter when `RUST_LOG` is unset (e.g. `info`, `debug`,
//! `wirerec=trace`). Default: `info`.
//!
//! ### `WIREREC_LOG_FORMAT`
//!
//! Log output format: `pretty` (human-readable, the default) or `json`
//! (structured, one event per line).
//!
//! ## Usage
//!
//! ```rust
//! use wirerec::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("log level: {}", config.log_level);
//! ```

use std::env;

/// Log output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl RuntimeConfig {
    /// Load configuration from environment variables. Unrecognized values
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        let log_level = env::var("WIREREC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("WIREREC_LOG_FORMAT") {
            Ok(val) if val.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        RuntimeConfig {
            log_level,
            log_format,
        }
    }
}
