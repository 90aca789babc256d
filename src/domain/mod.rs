//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the registry's identifiers:
//! organization numbers, postal codes, municipality numbers and sector codes.
//! These value objects validate at construction time and keep the raw string,
//! since leading zeros are significant.

pub mod errors;
pub mod kommunenummer;
pub mod organisasjonsnummer;
pub mod postnummer;
pub mod sektorkode;

pub use errors::ValidationError;
pub use kommunenummer::Kommunenummer;
pub use organisasjonsnummer::Organisasjonsnummer;
pub use postnummer::Postnummer;
pub use sektorkode::Sektorkode;
