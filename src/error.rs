//! Error types for the Enhetsregisteret client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! A record that does not exist is not an error: lookups return `Ok(None)` for it.

use thiserror::Error;

/// Errors that can occur when talking to the Enhetsregisteret API.
#[derive(Error, Debug)]
pub enum BrregError {
    /// The HTTP layer reported a problem: an unexpected status code, or a
    /// transport failure (DNS, connection, timeout) where `status` is `None`.
    #[error("REST error on {method} {url}: {message}")]
    Rest {
        method: String,
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// Anything else, such as a malformed JSON body or a payload that failed
    /// schema validation. The original cause is kept for `downcast_ref`.
    #[error("unexpected error: {0:#}")]
    Other(#[from] anyhow::Error),
}

impl BrregError {
    /// HTTP status code, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rest { status, .. } => *status,
            Self::Other(_) => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Logging could not be initialized, or another setup step failed
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with BrregError
pub type BrregResult<T> = Result<T, BrregError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BrregError::Rest {
            method: "GET".to_string(),
            url: "https://example.com/enheter/923609016".to_string(),
            status: Some(500),
            message: "status code 500".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "REST error on GET https://example.com/enheter/923609016: status code 500"
        );

        let err = ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT".to_string(),
            reason: "Must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for REQUEST_TIMEOUT: Must be greater than zero"
        );
    }

    #[test]
    fn test_status_accessor() {
        let err = BrregError::Rest {
            method: "GET".to_string(),
            url: "http://localhost".to_string(),
            status: None,
            message: "Connection failed".to_string(),
        };
        assert_eq!(err.status(), None);

        let err = BrregError::Other(anyhow::anyhow!("boom"));
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("boom"));
    }
}
