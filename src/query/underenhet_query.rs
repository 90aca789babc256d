//! Search filters for `GET /underenheter`.

use super::{QueryParams, SearchQuery};
use crate::domain::{Kommunenummer, Organisasjonsnummer, Postnummer};
use crate::models::Underenhet;
use chrono::NaiveDate;

/// Filters for searching sub-entities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnderenhetQuery {
    pub navn: Option<String>,
    pub organisasjonsnummer: Vec<Organisasjonsnummer>,
    /// Main entity the sub-entities belong to
    pub overordnet_enhet: Option<Organisasjonsnummer>,
    pub fra_antall_ansatte: Option<u32>,
    pub til_antall_ansatte: Option<u32>,
    pub registrert_i_mvaregisteret: Option<bool>,
    pub fra_oppstartsdato: Option<NaiveDate>,
    pub til_oppstartsdato: Option<NaiveDate>,
    pub fra_dato_eierskifte: Option<NaiveDate>,
    pub til_dato_eierskifte: Option<NaiveDate>,
    pub fra_nedleggelsesdato: Option<NaiveDate>,
    pub til_nedleggelsesdato: Option<NaiveDate>,
    pub organisasjonsform: Vec<String>,
    pub hjemmeside: Option<String>,
    pub kommunenummer: Vec<Kommunenummer>,
    pub naeringskode: Vec<String>,
    pub beliggenhetsadresse_kommunenummer: Vec<Kommunenummer>,
    pub beliggenhetsadresse_postnummer: Vec<Postnummer>,
    pub sort: Option<String>,
    pub page: u32,
    pub size: Option<u32>,
}

impl SearchQuery for UnderenhetQuery {
    type Record = Underenhet;

    const PATH: &'static str = "underenheter";
    const EMBEDDED_KEY: &'static str = "underenheter";

    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("navn", self.navn.as_ref());
        params.push_list("organisasjonsnummer", &self.organisasjonsnummer);
        params.push_opt("overordnetEnhet", self.overordnet_enhet.as_ref());
        params.push_opt("fraAntallAnsatte", self.fra_antall_ansatte.as_ref());
        params.push_opt("tilAntallAnsatte", self.til_antall_ansatte.as_ref());
        params.push_opt(
            "registrertIMvaregisteret",
            self.registrert_i_mvaregisteret.as_ref(),
        );
        params.push_date("fraOppstartsdato", self.fra_oppstartsdato);
        params.push_date("tilOppstartsdato", self.til_oppstartsdato);
        params.push_date("fraDatoEierskifte", self.fra_dato_eierskifte);
        params.push_date("tilDatoEierskifte", self.til_dato_eierskifte);
        params.push_date("fraNedleggelsesdato", self.fra_nedleggelsesdato);
        params.push_date("tilNedleggelsesdato", self.til_nedleggelsesdato);
        params.push_list("organisasjonsform", &self.organisasjonsform);
        params.push_opt("hjemmeside", self.hjemmeside.as_ref());
        params.push_list("kommunenummer", &self.kommunenummer);
        params.push_list("naeringskode", &self.naeringskode);
        params.push_list(
            "beliggenhetsadresse.kommunenummer",
            &self.beliggenhetsadresse_kommunenummer,
        );
        params.push_list(
            "beliggenhetsadresse.postnummer",
            &self.beliggenhetsadresse_postnummer,
        );
        params.push_opt("sort", self.sort.as_ref());
        params.push("page", self.page);
        params.push_opt("size", self.size.as_ref());
        params
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}
