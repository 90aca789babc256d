/// Property-based tests using proptest
/// Tests invariants of identifier validation and record parsing
mod fixtures;

use brreg::{Enhet, Kommunenummer, Organisasjonsnummer, Postnummer, Record, Sektorkode, Underenhet};
use proptest::prelude::*;

// Property: identifiers accept exactly their digit count
proptest! {
    #[test]
    fn organisasjonsnummer_accepts_nine_digits(value in "[0-9]{9}") {
        let orgnr = Organisasjonsnummer::new(value.clone()).unwrap();
        prop_assert_eq!(orgnr.as_str(), value.as_str());
    }

    #[test]
    fn organisasjonsnummer_rejects_other_lengths(value in "[0-9]{0,8}|[0-9]{10,14}") {
        prop_assert!(Organisasjonsnummer::new(value).is_err());
    }

    #[test]
    fn organisasjonsnummer_rejects_non_digits(
        prefix in "[0-9]{0,8}",
        bad in "[^0-9]",
    ) {
        let mut value = prefix;
        value.push_str(&bad);
        while value.chars().count() < 9 {
            value.push('0');
        }
        prop_assert!(Organisasjonsnummer::new(value).is_err());
    }

    #[test]
    fn validation_never_panics(value in "\\PC*") {
        let _ = Organisasjonsnummer::new(value.clone());
        let _ = Postnummer::new(value.clone());
        let _ = Kommunenummer::new(value.clone());
        let _ = Sektorkode::new(value);
    }

    #[test]
    fn postnummer_and_kommunenummer_accept_four_digits(value in "[0-9]{4}") {
        prop_assert!(Postnummer::new(value.clone()).is_ok());
        prop_assert!(Kommunenummer::new(value).is_ok());
    }

    #[test]
    fn postnummer_rejects_other_lengths(value in "[0-9]{0,3}|[0-9]{5,8}") {
        prop_assert!(Postnummer::new(value.clone()).is_err());
        prop_assert!(Kommunenummer::new(value).is_err());
    }

    #[test]
    fn sektorkode_accepts_one_or_two_digits(value in "[0-9]{1,2}") {
        prop_assert!(Sektorkode::new(value).is_ok());
    }

    #[test]
    fn sektorkode_rejects_longer_codes(value in "[0-9]{3,6}") {
        prop_assert!(Sektorkode::new(value).is_err());
    }
}

// Property: a parsed record serializes to a payload that parses back to the same record
proptest! {
    #[test]
    fn enhet_survives_serialization(
        orgnr in "[0-9]{9}",
        navn in "[A-ZÆØÅ ]{1,40}",
        ansatte in proptest::option::of(0u32..100_000),
    ) {
        let mut payload = fixtures::full_enhet();
        payload["organisasjonsnummer"] = orgnr.clone().into();
        payload["navn"] = navn.into();
        payload["antallAnsatte"] = ansatte.into();

        let enhet = Enhet::from_json(payload).unwrap();
        prop_assert_eq!(enhet.organisasjonsnummer.as_str(), orgnr.as_str());
        prop_assert_eq!(enhet.antall_ansatte, ansatte);

        let reparsed = Enhet::from_json(serde_json::to_value(&enhet).unwrap()).unwrap();
        prop_assert_eq!(reparsed, enhet);
    }

    #[test]
    fn underenhet_survives_serialization(parent in "[0-9]{9}") {
        let mut payload = fixtures::full_underenhet();
        payload["overordnetEnhet"] = parent.into();

        let underenhet = Underenhet::from_json(payload).unwrap();
        let reparsed = Underenhet::from_json(serde_json::to_value(&underenhet).unwrap()).unwrap();
        prop_assert_eq!(reparsed, underenhet);
    }
}
