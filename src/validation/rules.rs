//! Field rules for every record the registry returns.
//!
//! Names are the wire (camelCase) names. Each table must list the same fields
//! as the matching struct in `models`.

use crate::domain::{Kommunenummer, Organisasjonsnummer, Postnummer, ValidationError};

/// What a single JSON value must look like.
#[derive(Clone, Copy)]
pub enum Kind {
    /// Any string
    Text,
    /// A string that is not empty
    NonEmptyText,
    Flag,
    /// A non-negative integer
    Count,
    /// A year as number or digit string; `""` means absent
    Year,
    /// `YYYY-MM-DD`; `""` means absent
    Date,
    /// List of strings
    TextList,
    /// List of strings or nulls
    NullableTextList,
    /// A string checked by a value-type constructor
    Identifier(fn(&str) -> Result<(), ValidationError>),
    /// A nested record
    Record(&'static [Field]),
}

/// A named field and its rule.
#[derive(Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
    pub required: bool,
}

const fn required(name: &'static str, kind: Kind) -> Field {
    Field {
        name,
        kind,
        required: true,
    }
}

const fn optional(name: &'static str, kind: Kind) -> Field {
    Field {
        name,
        kind,
        required: false,
    }
}

fn organisasjonsnummer(value: &str) -> Result<(), ValidationError> {
    Organisasjonsnummer::new(value).map(drop)
}

fn postnummer(value: &str) -> Result<(), ValidationError> {
    Postnummer::new(value).map(drop)
}

fn kommunenummer(value: &str) -> Result<(), ValidationError> {
    Kommunenummer::new(value).map(drop)
}

const ORGANISASJONSNUMMER: Kind = Kind::Identifier(organisasjonsnummer);

pub const ADRESSE: &[Field] = &[
    optional("adresse", Kind::NullableTextList),
    optional("postnummer", Kind::Identifier(postnummer)),
    optional("poststed", Kind::Text),
    optional("kommunenummer", Kind::Identifier(kommunenummer)),
    optional("kommune", Kind::Text),
    optional("landkode", Kind::Text),
    optional("land", Kind::Text),
];

pub const ORGANISASJONSFORM: &[Field] = &[
    required("kode", Kind::Text),
    required("beskrivelse", Kind::Text),
    optional("utgaatt", Kind::Date),
];

/// Shared by `Naeringskode` and `InstitusjonellSektorkode`.
pub const KODE: &[Field] = &[optional("kode", Kind::Text), optional("beskrivelse", Kind::Text)];

pub const ENHET: &[Field] = &[
    required("organisasjonsnummer", ORGANISASJONSNUMMER),
    required("navn", Kind::NonEmptyText),
    required("organisasjonsform", Kind::Record(ORGANISASJONSFORM)),
    optional("hjemmeside", Kind::Text),
    optional("postadresse", Kind::Record(ADRESSE)),
    optional("registreringsdatoEnhetsregisteret", Kind::Date),
    optional("registrertIMvaregisteret", Kind::Flag),
    optional("frivilligMvaRegistrertBeskrivelser", Kind::TextList),
    optional("naeringskode1", Kind::Record(KODE)),
    optional("naeringskode2", Kind::Record(KODE)),
    optional("naeringskode3", Kind::Record(KODE)),
    optional("hjelpeenhetskode", Kind::Record(KODE)),
    optional("antallAnsatte", Kind::Count),
    optional("harRegistrertAntallAnsatte", Kind::Flag),
    optional("overordnetEnhet", ORGANISASJONSNUMMER),
    optional("forretningsadresse", Kind::Record(ADRESSE)),
    optional("stiftelsesdato", Kind::Date),
    optional("institusjonellSektorkode", Kind::Record(KODE)),
    optional("registrertIForetaksregisteret", Kind::Flag),
    optional("registrertIStiftelsesregisteret", Kind::Flag),
    optional("registrertIFrivillighetsregisteret", Kind::Flag),
    optional("sisteInnsendteAarsregnskap", Kind::Year),
    optional("konkurs", Kind::Flag),
    optional("konkursdato", Kind::Date),
    optional("underAvvikling", Kind::Flag),
    optional("underTvangsavviklingEllerTvangsopplosning", Kind::Flag),
    optional("maalform", Kind::Text),
    optional("vedtektsdato", Kind::Date),
    optional("vedtektsfestetFormaal", Kind::TextList),
    optional("aktivitet", Kind::TextList),
    optional("nedleggelsesdato", Kind::Date),
    optional("slettedato", Kind::Date),
];

pub const UNDERENHET: &[Field] = &[
    required("organisasjonsnummer", ORGANISASJONSNUMMER),
    required("navn", Kind::NonEmptyText),
    required("organisasjonsform", Kind::Record(ORGANISASJONSFORM)),
    optional("hjemmeside", Kind::Text),
    optional("postadresse", Kind::Record(ADRESSE)),
    optional("registreringsdatoEnhetsregisteret", Kind::Date),
    optional("registrertIMvaregisteret", Kind::Flag),
    optional("frivilligMvaRegistrertBeskrivelser", Kind::TextList),
    optional("naeringskode1", Kind::Record(KODE)),
    optional("naeringskode2", Kind::Record(KODE)),
    optional("naeringskode3", Kind::Record(KODE)),
    optional("hjelpeenhetskode", Kind::Record(KODE)),
    optional("antallAnsatte", Kind::Count),
    optional("harRegistrertAntallAnsatte", Kind::Flag),
    optional("overordnetEnhet", ORGANISASJONSNUMMER),
    optional("beliggenhetsadresse", Kind::Record(ADRESSE)),
    optional("oppstartsdato", Kind::Date),
    optional("datoEierskifte", Kind::Date),
    optional("nedleggelsesdato", Kind::Date),
    optional("slettedato", Kind::Date),
];
