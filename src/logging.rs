//! Logging setup.
//!
//! The client only emits `tracing` events; applications that do not install
//! their own subscriber can call [`init_logging`] once at startup.

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `config.log_level` is used.
///
/// # Errors
///
/// Returns `ConfigError::Other` if a global subscriber is already set.
pub fn init_logging(config: &Config) -> ConfigResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Other(format!("Failed to initialize logging: {}", e)))
}
