//! Enhet model, the top-level record in Enhetsregisteret.

use super::wire::{null_as_empty, optional_date, optional_year};
use super::{Adresse, InstitusjonellSektorkode, Naeringskode, Organisasjonsform};
use crate::domain::Organisasjonsnummer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Enhet på øverste nivå i registreringsstrukturen i Enhetsregisteret.
///
/// Sole proprietorships, associations, companies, housing co-operatives and
/// everything else registered in Enhetsregisteret. Identified by its
/// organization number.
///
/// `overordnet_enhet` only refers to another entity by number; it is never
/// resolved eagerly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Enhet {
    pub organisasjonsnummer: Organisasjonsnummer,

    pub navn: String,

    pub organisasjonsform: Organisasjonsform,

    /// Homepage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hjemmeside: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postadresse: Option<Adresse>,

    /// Registration date in Enhetsregisteret
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub registreringsdato_enhetsregisteret: Option<NaiveDate>,

    /// Whether the entity is registered in the VAT register
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrert_i_mvaregisteret: Option<bool>,

    /// Descriptions of voluntary VAT registrations
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

    /// Auxiliary unit code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hjelpeenhetskode: Option<Naeringskode>,

    /// Number of employees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antall_ansatte: Option<u32>,

    /// Whether the entity has ever reported its number of employees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub har_registrert_antall_ansatte: Option<bool>,

    /// Superior entity, only set for public sector entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overordnet_enhet: Option<Organisasjonsnummer>,

    /// Business address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forretningsadresse: Option<Adresse>,

    /// Founding date
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub stiftelsesdato: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institusjonell_sektorkode: Option<InstitusjonellSektorkode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrert_i_foretaksregisteret: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrert_i_stiftelsesregisteret: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrert_i_frivillighetsregisteret: Option<bool>,

    /// Year of the last submitted annual accounts
    #[serde(
        default,
        with = "optional_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub siste_innsendte_aarsregnskap: Option<u16>,

    /// Whether the entity is bankrupt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub konkurs: Option<bool>,

    /// Date of the bankruptcy ruling
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub konkursdato: Option<NaiveDate>,

    /// Whether the entity is being wound up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub under_avvikling: Option<bool>,

    /// Whether the entity is under compulsory winding-up or dissolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub under_tvangsavvikling_eller_tvangsopplosning: Option<bool>,

    /// Written language form, "Bokmål" or "Nynorsk"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maalform: Option<String>,

    /// Date of the bylaws
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub vedtektsdato: Option<NaiveDate>,

    /// Purpose as stated in the bylaws
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub vedtektsfestet_formaal: Vec<String>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub aktivitet: Vec<String>,

    /// Date the entity was closed down
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub nedleggelsesdato: Option<NaiveDate>,

    /// Date the entity was deleted
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub slettedato: Option<NaiveDate>,
}

impl Enhet {
    /// Create an entity with only the required fields set.
    pub fn new(
        organisasjonsnummer: Organisasjonsnummer,
        navn: impl Into<String>,
        organisasjonsform: Organisasjonsform,
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
            overordnet_enhet: None,
            forretningsadresse: None,
            stiftelsesdato: None,
            institusjonell_sektorkode: None,
            registrert_i_foretaksregisteret: None,
            registrert_i_stiftelsesregisteret: None,
            registrert_i_frivillighetsregisteret: None,
            siste_innsendte_aarsregnskap: None,
            konkurs: None,
            konkursdato: None,
            under_avvikling: None,
            under_tvangsavvikling_eller_tvangsopplosning: None,
            maalform: None,
            vedtektsdato: None,
            vedtektsfestet_formaal: Vec::new(),
            aktivitet: Vec::new(),
            nedleggelsesdato: None,
            slettedato: None,
        }
    }

    /// Industry codes that are present, in order of precedence.
    pub fn naeringskoder(&self) -> impl Iterator<Item = &Naeringskode> {
        [&self.naeringskode1, &self.naeringskode2, &self.naeringskode3]
            .into_iter()
            .filter_map(Option::as_ref)
    }

    /// Whether the entity has been deleted from the register.
    pub fn is_deleted(&self) -> bool {
        self.slettedato.is_some()
    }
}
