//! Sample registry payloads for integration tests.
//!
//! Shapes follow what `data.brreg.no` actually returns, including the
//! `_links` blocks the client ignores.

#![allow(dead_code)]

use serde_json::{json, Value};

/// Minimal entity: only the required fields.
pub fn minimal_enhet(organisasjonsnummer: &str, navn: &str) -> Value {
    json!({
        "organisasjonsnummer": organisasjonsnummer,
        "navn": navn,
        "organisasjonsform": {
            "kode": "AS",
            "beskrivelse": "Aksjeselskap"
        }
    })
}

/// Entity with every documented field populated.
pub fn full_enhet() -> Value {
    json!({
        "organisasjonsnummer": "923609016",
        "navn": "EQUINOR ASA",
        "organisasjonsform": {
            "kode": "ASA",
            "beskrivelse": "Allmennaksjeselskap",
            "_links": {"self": {"href": "https://data.brreg.no/enhetsregisteret/api/organisasjonsformer/ASA"}}
        },
        "hjemmeside": "www.equinor.com",
        "postadresse": {
            "land": "Norge",
            "landkode": "NO",
            "postnummer": "4035",
            "poststed": "STAVANGER",
            "adresse": ["Postboks 8500 Forus"],
            "kommune": "STAVANGER",
            "kommunenummer": "1103"
        },
        "registreringsdatoEnhetsregisteret": "1995-03-12",
        "registrertIMvaregisteret": true,
        "frivilligMvaRegistrertBeskrivelser": [],
        "naeringskode1": {
            "beskrivelse": "Utvinning av råolje",
            "kode": "06.100"
        },
        "naeringskode2": {
            "beskrivelse": "Utvinning av naturgass",
            "kode": "06.200"
        },
        "antallAnsatte": 21126,
        "harRegistrertAntallAnsatte": true,
        "forretningsadresse": {
            "land": "Norge",
            "landkode": "NO",
            "postnummer": "4035",
            "poststed": "STAVANGER",
            "adresse": ["Forusbeen 50", null],
            "kommune": "STAVANGER",
            "kommunenummer": "1103"
        },
        "stiftelsesdato": "1972-09-18",
        "institusjonellSektorkode": {
            "kode": "1120",
            "beskrivelse": "Statlig eide aksjeselskaper mv."
        },
        "registrertIForetaksregisteret": true,
        "registrertIStiftelsesregisteret": false,
        "registrertIFrivillighetsregisteret": false,
        "sisteInnsendteAarsregnskap": "2023",
        "konkurs": false,
        "underAvvikling": false,
        "underTvangsavviklingEllerTvangsopplosning": false,
        "maalform": "Bokmål",
        "vedtektsdato": "2023-05-10",
        "vedtektsfestetFormaal": [
            "Selskapets formål er å drive undersøkelse etter og utvinning,",
            "transport, foredling og markedsføring av petroleum."
        ],
        "aktivitet": [
            "Undersøkelse etter og utvinning av petroleum",
            "og annen virksomhet i tilknytning til dette."
        ],
        "_links": {
            "self": {"href": "https://data.brreg.no/enhetsregisteret/api/enheter/923609016"},
            "overordnetEnhet": null
        }
    })
}

/// Sub-entity with every documented field populated.
pub fn full_underenhet() -> Value {
    json!({
        "organisasjonsnummer": "973152351",
        "navn": "EQUINOR ASA AVD FORUS",
        "organisasjonsform": {
            "kode": "BEDR",
            "beskrivelse": "Underenhet til næringsdrivende og offentlig forvaltning"
        },
        "postadresse": {
            "land": "Norge",
            "landkode": "NO",
            "postnummer": "4035",
            "poststed": "STAVANGER",
            "adresse": ["Postboks 8500 Forus"],
            "kommune": "STAVANGER",
            "kommunenummer": "1103"
        },
        "registreringsdatoEnhetsregisteret": "1995-02-19",
        "registrertIMvaregisteret": true,
        "naeringskode1": {
            "beskrivelse": "Utvinning av råolje",
            "kode": "06.100"
        },
        "antallAnsatte": 5210,
        "harRegistrertAntallAnsatte": true,
        "overordnetEnhet": "923609016",
        "oppstartsdato": "1972-09-18",
        "datoEierskifte": "",
        "beliggenhetsadresse": {
            "land": "Norge",
            "landkode": "NO",
            "postnummer": "4035",
            "poststed": "STAVANGER",
            "adresse": ["Forusbeen 50"],
            "kommune": "STAVANGER",
            "kommunenummer": "1103"
        },
        "_links": {
            "self": {"href": "https://data.brreg.no/enhetsregisteret/api/underenheter/973152351"},
            "overordnetEnhet": {"href": "https://data.brreg.no/enhetsregisteret/api/enheter/923609016"}
        }
    })
}

/// A search response body in the registry's HAL shape.
pub fn search_page(key: &str, items: Vec<Value>, number: u32, total_pages: u32) -> Value {
    let size = items.len().max(1) as u32;
    let total_elements = u64::from(size) * u64::from(total_pages);
    json!({
        "_embedded": { key: items },
        "_links": {
            "self": {"href": format!("https://data.brreg.no/enhetsregisteret/api/{}?page={}", key, number)}
        },
        "page": {
            "size": size,
            "totalElements": total_elements,
            "totalPages": total_pages,
            "number": number
        }
    })
}

/// A search response with no hits: the registry omits `_embedded`.
pub fn empty_search_page() -> Value {
    json!({
        "_links": {"self": {"href": "https://data.brreg.no/enhetsregisteret/api/enheter"}},
        "page": {"size": 20, "totalElements": 0, "totalPages": 0, "number": 0}
    })
}
