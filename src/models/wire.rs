//! Serde helpers for the registry's wire conventions.
//!
//! The API encodes "no date" as either `null` or an empty string, sends some
//! lists as `null`, and reports the year of the last annual accounts as a
//! digit string.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Calendar date format used on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono alone also takes "2019-1-7", "+2019-01-07" and short years
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile date regex")
});

/// A wire date that could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("expected YYYY-MM-DD")]
    Shape,

    #[error("{0}")]
    Calendar(#[from] chrono::ParseError),
}

/// Parse a wire date. The empty string means "no date".
pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, DateError> {
    if raw.is_empty() {
        return Ok(None);
    }
    if !DATE_REGEX.is_match(raw) {
        return Err(DateError::Shape);
    }
    Ok(Some(NaiveDate::parse_from_str(raw, DATE_FORMAT)?))
}

/// `Option<NaiveDate>` as `"YYYY-MM-DD"`, accepting `null` and `""` as `None`.
pub mod optional_date {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) => parse_date(&raw).map_err(|e| {
                de::Error::custom(format!("invalid date {:?}: {}", raw, e))
            }),
        }
    }
}

/// Deserialize a list that may be `null`, yielding an empty list.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let list: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(list.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(u16),
    Text(String),
}

/// Parse a year sent either as a number or as a digit string.
pub fn parse_year(raw: &str) -> Option<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// `Option<u16>` year, accepting `2022`, `"2022"`, `null` and `""`.
pub mod optional_year {
    use super::*;

    pub fn serialize<S>(year: &Option<u16>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        year.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<YearRepr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(YearRepr::Number(year)) => Ok(Some(year)),
            Some(YearRepr::Text(text)) if text.is_empty() => Ok(None),
            Some(YearRepr::Text(text)) => parse_year(&text)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid year {:?}", text))),
        }
    }
}
