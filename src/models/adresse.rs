//! Postal, business and location addresses.

use super::wire::null_as_empty;
use crate::domain::{Kommunenummer, Postnummer};
use serde::{Deserialize, Serialize};

/// An address as registered in Enhetsregisteret.
///
/// Used for `postadresse`, `forretningsadresse` and `beliggenhetsadresse`.
/// Every part is optional; the street lines may themselves be `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Adresse {
    /// Street lines
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub adresse: Vec<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postnummer: Option<Postnummer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poststed: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kommunenummer: Option<Kommunenummer>,

    /// Municipality name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kommune: Option<String>,

    /// ISO country code, e.g. "NO"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landkode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land: Option<String>,
}

impl Adresse {
    /// Street lines that are present, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.adresse.iter().filter_map(|line| line.as_deref())
    }
}
