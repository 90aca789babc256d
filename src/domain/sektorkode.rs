//! Sektorkode value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static SEKTORKODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}$").expect("Failed to compile sektorkode regex"));

/// An institutional sector code filter value, 1 or 2 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sektorkode(String);

impl Sektorkode {
    /// Create a new Sektorkode, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSektorkode` unless the value is 1 or 2 ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !SEKTORKODE_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidSektorkode(value));
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

impl FromStr for Sektorkode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Sektorkode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Sektorkode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Sektorkode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Sektorkode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Sektorkode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
