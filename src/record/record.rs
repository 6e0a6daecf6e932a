use super::field::FieldDescriptor;
use super::wire::json_kind;
use serde_json::{Map, Value};
use tracing::warn;

/// A fixed set of named, typed, independently optional fields that converts
/// losslessly to and from a JSON object.
///
/// Implementors supply the descriptor table and the per-field plumbing
/// (`read_object`, `to_object`, the presence/validity queries); text-level
/// parsing and rendering are provided on top.
///
/// No method fails for the whole record. Malformed input degrades to the
/// empty object and per-field conversion failures are recorded on the
/// affected field only, so the caller checks [`Record::is_valid`] after
/// parsing to decide whether to trust the result.
pub trait Record: Default {
    /// Schema-supplied field metadata: internal name, wire key, required-ness.
    const DESCRIPTORS: &'static [FieldDescriptor];

    /// Read every declared field from a source JSON object.
    fn read_object(&mut self, obj: &Map<String, Value>);

    /// Emit one entry per field that satisfies its inclusion predicate:
    /// scalar fields when set, sequence fields when non-empty (independent
    /// of the set flag), nested records when they have any field. Absent
    /// and empty fields are omitted rather than emitted as `null`.
    fn to_object(&self) -> Map<String, Value>;

    /// True iff at least one field would be emitted by [`Record::to_object`].
    fn has_any_field(&self) -> bool;

    /// True iff every required field parsed to a type-conforming value.
    /// Optional fields never gate validity.
    fn is_valid(&self) -> bool;

    /// Validity flag of a single field, by internal name. Unknown names
    /// report false.
    fn field_valid(&self, ident: &str) -> bool;

    /// Parse a record from a JSON object.
    fn from_object(obj: &Map<String, Value>) -> Self {
        let mut record = Self::default();
        record.read_object(obj);
        record
    }

    /// Parse a record from a JSON value. Anything other than an object
    /// degrades to the empty object: every field then reports absence and
    /// required fields come out invalid.
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(obj) => Self::from_object(obj),
            other => {
                warn!(
                    kind = json_kind(other),
                    "payload is not a JSON object, treating as empty"
                );
                Self::from_object(&Map::new())
            }
        }
    }

    /// Parse a record from JSON text. Malformed text degrades to the empty
    /// object the same way a non-object value does.
    fn from_json(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_value(&value),
            Err(err) => {
                warn!(error = %err, "malformed JSON text, treating as empty object");
                Self::from_object(&Map::new())
            }
        }
    }

    /// Canonical compact JSON rendering of [`Record::to_object`].
    fn to_json(&self) -> String {
        Value::Object(self.to_object()).to_string()
    }

    /// Look up a field's descriptor by internal name.
    fn descriptor(ident: &str) -> Option<&'static FieldDescriptor> {
        Self::DESCRIPTORS.iter().find(|d| d.ident == ident)
    }
}
