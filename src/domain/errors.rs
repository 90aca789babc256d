//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a 9 digit organization number.
    InvalidOrganisasjonsnummer(String),

    /// The value is not a 4 digit postal code.
    InvalidPostnummer(String),

    /// The value is not a 4 digit municipality number.
    InvalidKommunenummer(String),

    /// The value is not a 1 or 2 digit sector code.
    InvalidSektorkode(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrganisasjonsnummer(value) => {
                write!(f, "invalid organisasjonsnummer {:?}: expected 9 digits", value)
            }
            Self::InvalidPostnummer(value) => {
                write!(f, "invalid postnummer {:?}: expected 4 digits", value)
            }
            Self::InvalidKommunenummer(value) => {
                write!(f, "invalid kommunenummer {:?}: expected 4 digits", value)
            }
            Self::InvalidSektorkode(value) => {
                write!(f, "invalid sektorkode {:?}: expected 1 or 2 digits", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
