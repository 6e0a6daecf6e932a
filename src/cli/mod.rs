//! # CLI Module
//!
//! Command-line interface for inspecting payloads against the registered
//! record models.
//!
//! ## Commands
//!
//! ### `validate`
//!
//! Parse a payload as a model and print per-field presence and validity:
//!
//! ```bash
//! wirerec validate --input pet.json --model pet
//! ```
//!
//! `--fail-on-invalid` makes the command exit non-zero when a required
//! field is missing or mistyped; `--json` emits the report as JSON for
//! machine consumption.
//!
//! ### `normalize`
//!
//! Parse a payload and re-emit it as canonical compact JSON, with absent
//! and empty fields omitted:
//!
//! ```bash
//! wirerec normalize --input pet.yaml --model pet --output pet.json
//! ```
//!
//! ### `models`
//!
//! List the registered models and their wire tables.
//!
//! Input files ending in `.yaml`/`.yml` are read as YAML; everything else
//! is treated as JSON text. Malformed payloads degrade to the empty object
//! rather than aborting, matching the library's parse contract.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{load_payload, run_cli, Cli, Commands};
