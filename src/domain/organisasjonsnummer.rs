//! Organisasjonsnummer value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static ORGANISASJONSNUMMER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9}$").expect("Failed to compile organisasjonsnummer regex"));

/// A type-safe wrapper for organization numbers.
///
/// Every entity and sub-entity in Enhetsregisteret is identified by a
/// 9 digit organization number. The number is kept as a string since
/// leading zeros are significant.
///
/// # Example
///
/// ```
/// use brreg::domain::Organisasjonsnummer;
///
/// let orgnr = Organisasjonsnummer::new("923609016").unwrap();
/// assert_eq!(orgnr.as_str(), "923609016");
/// assert!(Organisasjonsnummer::new("92360901").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Organisasjonsnummer(String);

impl Organisasjonsnummer {
    /// Create a new Organisasjonsnummer, validating the format.
    ///
    /// The input must be exactly 9 ASCII digits. No trimming or padding is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidOrganisasjonsnummer` if the format is invalid.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !ORGANISASJONSNUMMER_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidOrganisasjonsnummer(value));
        }

        Ok(Self(value))
    }

    /// Get the organization number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Organisasjonsnummer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Organisasjonsnummer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Organisasjonsnummer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Organisasjonsnummer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Organisasjonsnummer::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Organisasjonsnummer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organisasjonsnummer_valid() {
        let orgnr = Organisasjonsnummer::new("923609016").unwrap();
        assert_eq!(orgnr.as_str(), "923609016");
    }

    #[test]
    fn test_organisasjonsnummer_keeps_leading_zeros() {
        let orgnr = Organisasjonsnummer::new("012345678").unwrap();
        assert_eq!(orgnr.into_inner(), "012345678");
    }

    #[test]
    fn test_organisasjonsnummer_validates_format() {
        assert!(Organisasjonsnummer::new("").is_err());
        assert!(Organisasjonsnummer::new("92360901").is_err());
        assert!(Organisasjonsnummer::new("9236090160").is_err());
        assert!(Organisasjonsnummer::new("92360901A").is_err());
        assert!(Organisasjonsnummer::new(" 923609016").is_err());
        assert!(Organisasjonsnummer::new("923 609 016").is_err());
        assert!(Organisasjonsnummer::new("٩٢٣٦٠٩٠١٦").is_err());
    }

    #[test]
    fn test_organisasjonsnummer_error_message() {
        let err = Organisasjonsnummer::new("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid organisasjonsnummer \"abc\": expected 9 digits"
        );
    }

    #[test]
    fn test_organisasjonsnummer_from_str() {
        let orgnr: Organisasjonsnummer = "923609016".parse().unwrap();
        assert_eq!(format!("{}", orgnr), "923609016");
    }

    #[test]
    fn test_organisasjonsnummer_serialization() {
        let orgnr = Organisasjonsnummer::new("923609016").unwrap();
        let json = serde_json::to_string(&orgnr).unwrap();
        assert_eq!(json, "\"923609016\"");
    }

    #[test]
    fn test_organisasjonsnummer_deserialization_invalid_fails() {
        let result: Result<Organisasjonsnummer, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }
}
