//! Configuration management for the Enhetsregisteret client.
//!
//! Configuration is read from environment variables, with an optional `.env`
//! file loaded first. Every setting has a default, so an empty environment
//! yields a client pointed at the public API.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Base URL of the public Enhetsregisteret API.
pub const DEFAULT_BASE_URL: &str = "https://data.brreg.no/enhetsregisteret/api";

/// Configuration for the Enhetsregisteret client.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL (default: [`DEFAULT_BASE_URL`])
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BRREG_API_BASE_URL`: Base URL for the API (default: the public API)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let api_base_url =
            env::var("BRREG_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "BRREG_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
