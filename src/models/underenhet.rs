//! Underenhet model, the location/branch level of Enhetsregisteret.

use super::wire::{null_as_empty, optional_date};
use super::{Adresse, Naeringskode, Organisasjonsform};
use crate::domain::Organisasjonsnummer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Enhet på laveste nivå i registreringsstrukturen i Enhetsregisteret.
///
/// A sub-entity cannot exist on its own and is tied to a main entity through
/// `overordnet_enhet`. It is identified by its own organization number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Underenhet {
    pub organisasjonsnummer: Organisasjonsnummer,

    pub navn: String,

    pub organisasjonsform: Organisasjonsform,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hjemmeside: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postadresse: Option<Adresse>,

    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub registreringsdato_enhetsregisteret: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrert_i_mvaregisteret: Option<bool>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub frivillig_mva_registrert_beskrivelser: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naeringskode1: Option<Naeringskode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naeringskode2: Option<Naeringskode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naeringskode3: Option<Naeringskode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hjelpeenhetskode: Option<Naeringskode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antall_ansatte: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub har_registrert_antall_ansatte: Option<bool>,

    /// The main entity this sub-entity belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overordnet_enhet: Option<Organisasjonsnummer>,

    /// Location address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beliggenhetsadresse: Option<Adresse>,

    /// Start-up date
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub oppstartsdato: Option<NaiveDate>,

    /// Date of the last change of ownership
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub dato_eierskifte: Option<NaiveDate>,

    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub nedleggelsesdato: Option<NaiveDate>,

    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub slettedato: Option<NaiveDate>,
}

impl Underenhet {
    /// Create a sub-entity with only the required fields and its parent set.
    pub fn new(
        organisasjonsnummer: Organisasjonsnummer,
        navn: impl Into<String>,
        organisasjonsform: Organisasjonsform,
        overordnet_enhet: Organisasjonsnummer,
    ) -> Self {
        Self {
            organisasjonsnummer,
            navn: navn.into(),
            organisasjonsform,
            hjemmeside: None,
            postadresse: None,
            registreringsdato_enhetsregisteret: None,
            registrert_i_mvaregisteret: None,
            frivillig_mva_registrert_beskrivelser: Vec::new(),
            naeringskode1: None,
            naeringskode2: None,
            naeringskode3: None,
            hjelpeenhetskode: None,
            antall_ansatte: None,
            har_registrert_antall_ansatte: None,
            overordnet_enhet: Some(overordnet_enhet),
            beliggenhetsadresse: None,
            oppstartsdato: None,
            dato_eierskifte: None,
            nedleggelsesdato: None,
            slettedato: None,
        }
    }
}
