//! # Record Module
//!
//! Core building blocks for JSON-backed record types with per-field
//! presence and validity tracking.
//!
//! ## Overview
//!
//! Generated API clients repeat the same shape for every schema entity: a
//! struct with one block per field, a pair of booleans tracking whether the
//! field was set and whether it parsed cleanly, and lossless conversion to
//! and from a JSON object keyed by the schema's wire names.
//!
//! This module factors that shape into three pieces:
//!
//! - [`Field`] - a generic `{value, set, valid}` capability replacing the
//!   per-field flag pairs
//! - [`FieldDescriptor`] - table-driven wire-name and required-ness metadata
//! - [`Record`] - the trait tying a fixed field set to object conversion and
//!   whole-record presence/validity queries
//!
//! Parsing never fails for the whole record: conversion failures are
//! localized to the affected field's `valid` flag and the caller decides
//! what to trust via [`Record::is_valid`].

mod field;
mod record;
mod wire;

pub use field::{Field, FieldDescriptor};
pub use record::Record;
pub use wire::{json_kind, FromWire, ToWire};

pub(crate) use wire::record_wire;
