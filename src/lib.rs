//! # wirerec
//!
//! **wirerec** is a toolkit for JSON-backed record types with per-field
//! presence and validity tracking, in the shape that OpenAPI client
//! generators emit their model classes.
//!
//! ## Overview
//!
//! Every field of a record carries its own provenance: whether it was
//! explicitly assigned or present in parsed input (*set*), and whether the
//! last parse found a type-conforming value (*valid*). Parsing never fails
//! for the whole record; malformed input degrades field by field and the
//! caller inspects [`record::Record::is_valid`] afterwards. Serialization
//! omits absent and empty fields instead of emitting `null`s, producing
//! compact JSON on the wire.
//!
//! ## Architecture
//!
//! - **[`record`]** - the `Field<T>` capability, descriptor tables, and the
//!   `Record` trait
//! - **[`models`]** - the Petstore entities (`Pet`, `Category`, `Tag`,
//!   `Order`, `User`, `ApiResponse`) instantiated on the record core
//! - **[`report`]** - per-field parse reports for human inspection
//! - **[`registry`]** - name-keyed model lookup for the CLI
//! - **[`cli`]** - `validate` / `normalize` / `models` subcommands
//! - **[`logging`]** / **[`runtime_config`]** - subscriber setup and
//!   environment configuration for the binary
//!
//! ## Example
//!
//! ```
//! use wirerec::models::Pet;
//! use wirerec::record::Record;
//!
//! let pet = Pet::from_json(r#"{"name":"Rex","photoUrls":["http://a/1.jpg"]}"#);
//! assert!(pet.is_valid());
//! assert_eq!(pet.name(), "Rex");
//! assert_eq!(pet.photo_urls(), ["http://a/1.jpg"]);
//!
//! // A missing required field never aborts the parse; it shows up in the
//! // aggregate validity check instead.
//! let stray = Pet::from_json(r#"{"photoUrls":[]}"#);
//! assert!(!stray.is_valid());
//! ```

pub mod cli;
pub mod logging;
pub mod models;
pub mod record;
pub mod registry;
pub mod report;
pub mod runtime_config;

pub use record::{Field, FieldDescriptor, FromWire, Record, ToWire};
