//! brreg - A typed client for the Norwegian business registry (Enhetsregisteret).
//!
//! This library looks up registered entities (enheter) and sub-entities
//! (underenheter) by organization number, searches both collections, and
//! validates every response against the registry's schema before handing
//! back strongly typed records.
//!
//! # Architecture
//!
//! - **domain**: Validated identifier types (organisasjonsnummer, postnummer, ...)
//! - **models**: Record structures for entities, sub-entities and their parts
//! - **validation**: Field rules and the collecting schema validator
//! - **query**: Search queries and paged results
//! - **client**: Blocking HTTP client and its async wrapper
//! - **error**: Error types for requests and configuration
//! - **config**: Configuration from environment variables
//! - **logging**: Tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use brreg::{BrregClient, Organisasjonsnummer};
//!
//! let client = BrregClient::default();
//! let orgnr: Organisasjonsnummer = "923609016".parse()?;
//! match client.get_enhet(&orgnr)? {
//!     Some(enhet) => println!("{} ({})", enhet.navn, enhet.organisasjonsform.kode),
//!     None => println!("not registered"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod validation;

pub use client::{AsyncBrregClient, AsyncBrregClientImpl, BrregClient, Pages};
pub use config::Config;
pub use domain::{Kommunenummer, Organisasjonsnummer, Postnummer, Sektorkode, ValidationError};
pub use error::{BrregError, BrregResult, ConfigError, ConfigResult};
pub use logging::init_logging;
pub use models::{
    Adresse, Enhet, InstitusjonellSektorkode, Naeringskode, Organisasjonsform, PageInfo,
    Underenhet,
};
pub use query::{EnhetQuery, Page, QueryParams, SearchQuery, UnderenhetQuery};
pub use validation::{FieldViolation, Record, SchemaError};
