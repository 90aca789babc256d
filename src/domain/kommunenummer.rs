//! Kommunenummer value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static KOMMUNENUMMER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("Failed to compile kommunenummer regex"));

/// A Norwegian municipality number, exactly 4 digits (e.g. `"0301"` for Oslo).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kommunenummer(String);

impl Kommunenummer {
    /// Create a new Kommunenummer, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidKommunenummer` unless the value is exactly 4 ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !KOMMUNENUMMER_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidKommunenummer(value));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Kommunenummer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Kommunenummer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Kommunenummer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Kommunenummer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Kommunenummer::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Kommunenummer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
