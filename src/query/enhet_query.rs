//! Search filters for `GET /enheter`.

use super::{QueryParams, SearchQuery};
use crate::domain::{Kommunenummer, Organisasjonsnummer, Postnummer, Sektorkode};
use crate::models::Enhet;
use chrono::NaiveDate;

/// Filters for searching entities.
///
/// All filters are optional; build one with struct update syntax:
///
/// ```
/// use brreg::query::EnhetQuery;
///
/// let query = EnhetQuery {
///     navn: Some("Sesam".to_string()),
///     organisasjonsform: vec!["AS".to_string()],
///     ..Default::default()
/// };
/// assert_eq!(query.page, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnhetQuery {
    /// Name, or part of the name
    pub navn: Option<String>,
    pub organisasjonsnummer: Vec<Organisasjonsnummer>,
    pub overordnet_enhet: Option<Organisasjonsnummer>,
    pub fra_antall_ansatte: Option<u32>,
    pub til_antall_ansatte: Option<u32>,
    pub konkurs: Option<bool>,
    pub registrert_i_mvaregisteret: Option<bool>,
    pub registrert_i_foretaksregisteret: Option<bool>,
    pub registrert_i_stiftelsesregisteret: Option<bool>,
    pub registrert_i_frivillighetsregisteret: Option<bool>,
    pub under_tvangsavvikling_eller_tvangsopplosning: Option<bool>,
    pub under_avvikling: Option<bool>,
    pub fra_registreringsdato_enhetsregisteret: Option<NaiveDate>,
    pub til_registreringsdato_enhetsregisteret: Option<NaiveDate>,
    pub fra_stiftelsesdato: Option<NaiveDate>,
    pub til_stiftelsesdato: Option<NaiveDate>,
    /// Organizational form codes, e.g. "AS"
    pub organisasjonsform: Vec<String>,
    pub hjemmeside: Option<String>,
    pub postadresse_kommunenummer: Vec<Kommunenummer>,
    pub postadresse_postnummer: Vec<Postnummer>,
    pub forretningsadresse_kommunenummer: Vec<Kommunenummer>,
    pub forretningsadresse_postnummer: Vec<Postnummer>,
    /// Municipality of either address
    pub kommunenummer: Vec<Kommunenummer>,
    pub naeringskode: Vec<String>,
    pub sektorkode: Vec<Sektorkode>,
    /// Sort expression, e.g. "navn,ASC"
    pub sort: Option<String>,
    /// Zero-based page index
    pub page: u32,
    /// Page size; the API default applies when unset
    pub size: Option<u32>,
}

impl SearchQuery for EnhetQuery {
    type Record = Enhet;

    const PATH: &'static str = "enheter";
    const EMBEDDED_KEY: &'static str = "enheter";

    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("navn", self.navn.as_ref());
        params.push_list("organisasjonsnummer", &self.organisasjonsnummer);
        params.push_opt("overordnetEnhet", self.overordnet_enhet.as_ref());
        params.push_opt("fraAntallAnsatte", self.fra_antall_ansatte.as_ref());
        params.push_opt("tilAntallAnsatte", self.til_antall_ansatte.as_ref());
        params.push_opt("konkurs", self.konkurs.as_ref());
        params.push_opt(
            "registrertIMvaregisteret",
            self.registrert_i_mvaregisteret.as_ref(),
        );
        params.push_opt(
            "registrertIForetaksregisteret",
            self.registrert_i_foretaksregisteret.as_ref(),
        );
        params.push_opt(
            "registrertIStiftelsesregisteret",
            self.registrert_i_stiftelsesregisteret.as_ref(),
        );
        params.push_opt(
            "registrertIFrivillighetsregisteret",
            self.registrert_i_frivillighetsregisteret.as_ref(),
        );
        params.push_opt(
            "underTvangsavviklingEllerTvangsopplosning",
            self.under_tvangsavvikling_eller_tvangsopplosning.as_ref(),
        );
        params.push_opt("underAvvikling", self.under_avvikling.as_ref());
        params.push_date(
            "fraRegistreringsdatoEnhetsregisteret",
            self.fra_registreringsdato_enhetsregisteret,
        );
        params.push_date(
            "tilRegistreringsdatoEnhetsregisteret",
            self.til_registreringsdato_enhetsregisteret,
        );
        params.push_date("fraStiftelsesdato", self.fra_stiftelsesdato);
        params.push_date("tilStiftelsesdato", self.til_stiftelsesdato);
        params.push_list("organisasjonsform", &self.organisasjonsform);
        params.push_opt("hjemmeside", self.hjemmeside.as_ref());
        params.push_list("postadresse.kommunenummer", &self.postadresse_kommunenummer);
        params.push_list("postadresse.postnummer", &self.postadresse_postnummer);
        params.push_list(
            "forretningsadresse.kommunenummer",
            &self.forretningsadresse_kommunenummer,
        );
        params.push_list(
            "forretningsadresse.postnummer",
            &self.forretningsadresse_postnummer,
        );
        params.push_list("kommunenummer", &self.kommunenummer);
        params.push_list("naeringskode", &self.naeringskode);
        params.push_list("sektorkode", &self.sektorkode);
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
