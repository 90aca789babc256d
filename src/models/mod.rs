//! Data models for Enhetsregisteret records.
//!
//! This module contains the records returned by the registry: entities,
//! sub-entities and their nested addresses and code lists. Wire names are
//! camelCase; every struct maps them with `rename_all`.

pub mod adresse;
pub mod enhet;
pub mod koder;
pub mod page;
pub mod underenhet;
pub mod wire;

pub use adresse::Adresse;
pub use enhet::Enhet;
pub use koder::{InstitusjonellSektorkode, Naeringskode, Organisasjonsform};
pub use page::PageInfo;
pub use underenhet::Underenhet;
