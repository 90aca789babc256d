//! Payload validation for registry records.
//!
//! `serde` alone stops at the first problem. Before a payload is turned into
//! a record it is checked against the field rules in [`rules`], so that a
//! rejected payload reports every non-conforming field with its dotted path,
//! e.g. `postadresse.postnummer`.

pub mod rules;

use crate::models::wire::{parse_date, parse_year};
use crate::models::{Enhet, Underenhet};
use rules::{Field, Kind};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// One field that did not conform to its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Dotted path to the field, `[i]` for list items. Empty for the root.
    pub path: String,

    pub message: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// A payload that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Name of the record being built, e.g. "Enhet"
    pub record: &'static str,

    /// Every violation found, in field order. Never empty.
    pub violations: Vec<FieldViolation>,
}

impl SchemaError {
    /// Look up the violation reported for a path.
    pub fn violation(&self, path: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.path == path)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.violations.len() == 1 {
            "error"
        } else {
            "errors"
        };
        write!(
            f,
            "{} validation {} for {}",
            self.violations.len(),
            noun,
            self.record
        )?;
        for violation in &self.violations {
            write!(f, "\n  {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// A record that can be built from a registry JSON payload.
pub trait Record: DeserializeOwned {
    /// Record name used in error messages.
    const NAME: &'static str;

    /// Field rules for the payload.
    const FIELDS: &'static [Field];

    /// Validate a decoded JSON payload and build the record.
    ///
    /// Unknown fields are ignored. On failure every violation is reported.
    fn from_json(value: Value) -> Result<Self, SchemaError> {
        parse_at(value, "")
    }
}

impl Record for Enhet {
    const NAME: &'static str = "Enhet";
    const FIELDS: &'static [Field] = rules::ENHET;
}

impl Record for Underenhet {
    const NAME: &'static str = "Underenhet";
    const FIELDS: &'static [Field] = rules::UNDERENHET;
}

/// Validate and build a record found at `path` inside a larger payload.
pub(crate) fn parse_at<T: Record>(value: Value, path: &str) -> Result<T, SchemaError> {
    let mut violations = Vec::new();
    check_record(T::FIELDS, &value, path, &mut violations);
    if !violations.is_empty() {
        return Err(SchemaError {
            record: T::NAME,
            violations,
        });
    }

    // The rules mirror the serde model, so this only fails if they drift apart.
    serde_json::from_value(value).map_err(|e| SchemaError {
        record: T::NAME,
        violations: vec![FieldViolation::new(path, e.to_string())],
    })
}

/// Check `value` against a record's field rules, appending violations to `out`.
pub fn check_record(fields: &[Field], value: &Value, path: &str, out: &mut Vec<FieldViolation>) {
    let Some(object) = value.as_object() else {
        out.push(FieldViolation::new(path, "expected an object"));
        return;
    };

    for field in fields {
        let field_path = join(path, field.name);
        match object.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    out.push(FieldViolation::new(field_path, "field required"));
                }
            }
            Some(value) => check_value(field.kind, value, &field_path, out),
        }
    }
}

fn check_value(kind: Kind, value: &Value, path: &str, out: &mut Vec<FieldViolation>) {
    match kind {
        Kind::Text => {
            if !value.is_string() {
                out.push(FieldViolation::new(path, "expected a string"));
            }
        }
        Kind::NonEmptyText => match value.as_str() {
            Some("") => out.push(FieldViolation::new(path, "must not be empty")),
            Some(_) => {}
            None => out.push(FieldViolation::new(path, "expected a string")),
        },
        Kind::Flag => {
            if !value.is_boolean() {
                out.push(FieldViolation::new(path, "expected a boolean"));
            }
        }
        Kind::Count => {
            let fits = value
                .as_u64()
                .map_or(false, |n| n <= u64::from(u32::MAX));
            if !fits {
                out.push(FieldViolation::new(path, "expected a non-negative integer"));
            }
        }
        Kind::Year => {
            let valid = match value {
                Value::Number(n) => n.as_u64().map_or(false, |n| n <= u64::from(u16::MAX)),
                Value::String(s) => s.is_empty() || parse_year(s).is_some(),
                _ => false,
            };
            if !valid {
                out.push(FieldViolation::new(path, format!("invalid year {}", value)));
            }
        }
        Kind::Date => match value.as_str() {
            Some(raw) => {
                if parse_date(raw).is_err() {
                    out.push(FieldViolation::new(
                        path,
                        format!("invalid date {:?}: expected YYYY-MM-DD", raw),
                    ));
                }
            }
            None => out.push(FieldViolation::new(path, "expected a date string")),
        },
        Kind::TextList => check_list(value, path, false, out),
        Kind::NullableTextList => check_list(value, path, true, out),
        Kind::Identifier(validate) => match value.as_str() {
            Some(raw) => {
                if let Err(e) = validate(raw) {
                    out.push(FieldViolation::new(path, e.to_string()));
                }
            }
            None => out.push(FieldViolation::new(path, "expected a string")),
        },
        Kind::Record(fields) => check_record(fields, value, path, out),
    }
}

fn check_list(value: &Value, path: &str, nullable_items: bool, out: &mut Vec<FieldViolation>) {
    let Some(items) = value.as_array() else {
        out.push(FieldViolation::new(path, "expected a list"));
        return;
    };

    for (index, item) in items.iter().enumerate() {
        let ok = item.is_string() || (nullable_items && item.is_null());
        if !ok {
            out.push(FieldViolation::new(
                format!("{}[{}]", path, index),
                "expected a string",
            ));
        }
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "organisasjonsnummer": "923609016",
            "navn": "Foo AS",
            "organisasjonsform": {"kode": "AS", "beskrivelse": "Aksjeselskap"}
        })
    }

    #[test]
    fn test_minimal_payload_validates() {
        let enhet = Enhet::from_json(minimal()).unwrap();
        assert_eq!(enhet.navn, "Foo AS");
        assert!(enhet.postadresse.is_none());
        assert!(enhet.vedtektsfestet_formaal.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut payload = minimal();
        payload["epostadresse"] = json!("post@example.com");
        payload["_links"] = json!({"self": {"href": "https://example.com"}});
        assert!(Enhet::from_json(payload).is_ok());
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let err = Enhet::from_json(json!({})).unwrap_err();
        assert_eq!(err.record, "Enhet");
        let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["organisasjonsnummer", "navn", "organisasjonsform"]);
        assert!(err.violations.iter().all(|v| v.message == "field required"));
    }

    #[test]
    fn test_nested_violations_have_paths() {
        let mut payload = minimal();
        payload["organisasjonsnummer"] = json!("92360901A");
        payload["postadresse"] = json!({"postnummer": "12", "kommunenummer": 301});
        payload["organisasjonsform"] = json!({"kode": "AS"});

        let err = Enhet::from_json(payload).unwrap_err();
        assert_eq!(err.violations.len(), 4);
        assert_eq!(
            err.violation("postadresse.postnummer").unwrap().to_string(),
            "postadresse.postnummer: invalid postnummer \"12\": expected 4 digits"
        );
        assert_eq!(
            err.violation("postadresse.kommunenummer").unwrap().message,
            "expected a string"
        );
        assert!(err.violation("organisasjonsform.beskrivelse").is_some());
        assert!(err
            .violation("organisasjonsnummer")
            .unwrap()
            .message
            .contains("expected 9 digits"));
    }

    #[test]
    fn test_empty_string_date_is_absent() {
        let mut payload = minimal();
        payload["stiftelsesdato"] = json!("");
        payload["konkursdato"] = Value::Null;
        let enhet = Enhet::from_json(payload).unwrap();
        assert_eq!(enhet.stiftelsesdato, None);
        assert_eq!(enhet.konkursdato, None);
    }

    #[test]
    fn test_bad_date_is_reported() {
        let mut payload = minimal();
        payload["stiftelsesdato"] = json!("yesterday");
        payload["vedtektsdato"] = json!(20200101);
        let err = Enhet::from_json(payload).unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert!(err.violation("stiftelsesdato").is_some());
        assert_eq!(
            err.violation("vedtektsdato").unwrap().message,
            "expected a date string"
        );
    }

    #[test]
    fn test_loosely_shaped_dates_are_reported() {
        for raw in ["2019-1-7", "+2019-01-07", " 2019-01-07", "19-01-07"] {
            let mut payload = minimal();
            payload["stiftelsesdato"] = json!(raw);
            let err = Enhet::from_json(payload).unwrap_err();
            assert_eq!(
                err.violation("stiftelsesdato").unwrap().message,
                format!("invalid date {:?}: expected YYYY-MM-DD", raw)
            );
        }
    }

    #[test]
    fn test_empty_navn_is_rejected() {
        let mut payload = minimal();
        payload["navn"] = json!("");
        let err = Enhet::from_json(payload).unwrap_err();
        assert_eq!(err.violation("navn").unwrap().message, "must not be empty");
    }

    #[test]
    fn test_list_items_are_checked() {
        let mut payload = minimal();
        payload["aktivitet"] = json!(["Utvikling", 42]);
        payload["postadresse"] = json!({"adresse": ["Gate 1", null]});
        let err = Enhet::from_json(payload).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].path, "aktivitet[1]");
    }

    #[test]
    fn test_null_lists_are_empty() {
        let mut payload = minimal();
        payload["aktivitet"] = Value::Null;
        let enhet = Enhet::from_json(payload).unwrap();
        assert!(enhet.aktivitet.is_empty());
    }

    #[test]
    fn test_year_as_string_or_number() {
        let mut payload = minimal();
        payload["sisteInnsendteAarsregnskap"] = json!("2022");
        assert_eq!(
            Enhet::from_json(payload.clone()).unwrap().siste_innsendte_aarsregnskap,
            Some(2022)
        );
        payload["sisteInnsendteAarsregnskap"] = json!(2021);
        assert_eq!(
            Enhet::from_json(payload.clone()).unwrap().siste_innsendte_aarsregnskap,
            Some(2021)
        );
        payload["sisteInnsendteAarsregnskap"] = json!("i fjor");
        assert!(Enhet::from_json(payload).is_err());
    }

    #[test]
    fn test_non_object_payload() {
        let err = Enhet::from_json(json!(["923609016"])).unwrap_err();
        assert_eq!(err.violations, vec![FieldViolation::new("", "expected an object")]);
    }

    #[test]
    fn test_schema_error_display() {
        let err = Enhet::from_json(json!({"navn": "Foo AS"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "2 validation errors for Enhet\n  organisasjonsnummer: field required\n  organisasjonsform: field required"
        );
    }

    #[test]
    fn test_underenhet_uses_its_own_rules() {
        let payload = json!({
            "organisasjonsnummer": "974760673",
            "navn": "Filial",
            "organisasjonsform": {"kode": "BEDR", "beskrivelse": "Bedrift"},
            "overordnetEnhet": "92366",
            "beliggenhetsadresse": {"postnummer": "8900"},
            "datoEierskifte": ""
        });
        let err = Underenhet::from_json(payload).unwrap_err();
        assert_eq!(err.record, "Underenhet");
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].path, "overordnetEnhet");
    }

    #[test]
    fn test_parse_at_prefixes_paths() {
        let mut payload = minimal();
        payload["postadresse"] = json!({"postnummer": "x"});
        let err = parse_at::<Enhet>(payload, "_embedded.enheter[2]").unwrap_err();
        assert_eq!(
            err.violations[0].path,
            "_embedded.enheter[2].postadresse.postnummer"
        );
    }
}
