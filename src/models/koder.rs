//! Code lists: organizational form, industry code and institutional sector code.

use super::wire::optional_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Organisasjonsform er virksomhetens formelle organisering.
///
/// The form gives guidelines for liability, tax, audit duty, rights and
/// obligations, e.g. `AS` (aksjeselskap) or `ENK` (enkeltpersonforetak).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organisasjonsform {
    /// Short code, e.g. "AS"
    pub kode: String,

    /// Textual description, e.g. "Aksjeselskap"
    pub beskrivelse: String,

    /// Date the form became invalid, if it has
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub utgaatt: Option<NaiveDate>,
}

impl Organisasjonsform {
    pub fn new(kode: impl Into<String>, beskrivelse: impl Into<String>) -> Self {
        Self {
            kode: kode.into(),
            beskrivelse: beskrivelse.into(),
            utgaatt: None,
        }
    }
}

/// Næringskode, the classification of an entity's economic activity.
///
/// Both parts may be absent, meaning the entity is not classified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Naeringskode {
    /// The industry code, e.g. "62.010"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beskrivelse: Option<String>,
}

/// Institusjonell sektorkode, the macro-economic sector classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InstitusjonellSektorkode {
    /// The sector code, e.g. "2100"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beskrivelse: Option<String>,
}
