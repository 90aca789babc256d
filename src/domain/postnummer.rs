//! Postnummer value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static POSTNUMMER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("Failed to compile postnummer regex"));

/// A Norwegian postal code, exactly 4 digits (e.g. `"0150"`).
///
/// # Example
///
/// ```
/// use brreg::domain::Postnummer;
///
/// let postnummer = Postnummer::new("0150").unwrap();
/// assert_eq!(postnummer.as_str(), "0150");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Postnummer(String);

impl Postnummer {
    /// Create a new Postnummer, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPostnummer` unless the value is exactly 4 ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !POSTNUMMER_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidPostnummer(value));
        }

        Ok(Self(value))
    }

    /// Get the postal code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Postnummer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Postnummer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Postnummer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Postnummer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Postnummer::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Postnummer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postnummer_valid() {
        assert_eq!(Postnummer::new("0150").unwrap().as_str(), "0150");
        assert!(Postnummer::new("9990").is_ok());
    }

    #[test]
    fn test_postnummer_validates_format() {
        assert!(Postnummer::new("").is_err());
        assert!(Postnummer::new("150").is_err());
        assert!(Postnummer::new("01500").is_err());
        assert!(Postnummer::new("O150").is_err());
        assert!(Postnummer::new("0150 ").is_err());
    }

    #[test]
    fn test_postnummer_error_message() {
        let err = Postnummer::new("12").unwrap_err();
        assert_eq!(err.to_string(), "invalid postnummer \"12\": expected 4 digits");
    }

    #[test]
    fn test_postnummer_deserialization() {
        let postnummer: Postnummer = serde_json::from_str("\"5003\"").unwrap();
        assert_eq!(postnummer.as_str(), "5003");
        assert!(serde_json::from_str::<Postnummer>("5003").is_err());
    }
}
