use super::wire::FromWire;
use serde_json::{Map, Value};
use tracing::debug;

/// Schema-supplied metadata for one record field.
///
/// `ident` is the internal accessor name, `wire` the key used in the JSON
/// object representation. The two differ whenever the schema's external
/// naming convention does (e.g. `photo_urls` vs `photoUrls`); the
/// translation lives in these tables, never inline in parse or serialize
/// logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Internal (accessor) field name
    pub ident: &'static str,
    /// Wire key in the JSON object representation
    pub wire: &'static str,
    /// Whether the schema declares the field required
    pub required: bool,
}

impl FieldDescriptor {
    /// Descriptor for a field the schema declares required.
    pub const fn required(ident: &'static str, wire: &'static str) -> Self {
        FieldDescriptor {
            ident,
            wire,
            required: true,
        }
    }

    /// Descriptor for an optional field.
    pub const fn optional(ident: &'static str, wire: &'static str) -> Self {
        FieldDescriptor {
            ident,
            wire,
            required: false,
        }
    }
}

/// A typed record field carrying its own presence and validity provenance.
///
/// A field starts with both flags false. `set` becomes true when the field
/// is written through [`Field::set`] or when its wire key is present in a
/// parsed source object. `valid` is parse provenance only: it records
/// whether the most recent [`Field::read_from`] found a type-conforming
/// value (a missing optional field counts as valid, a missing required one
/// does not). Setters deliberately leave `valid` untouched.
///
/// The original generated code marked presence only through setters, so a
/// freshly parsed record dropped its scalar fields on the next serialize.
/// Here presence is also recorded during parsing, which is what makes
/// `parse -> serialize -> parse` stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field<T> {
    value: T,
    set: bool,
    valid: bool,
}

impl<T> Field<T> {
    /// Borrow the current value. Defaults to `T::default()` until the field
    /// is set or parsed.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Assign a value and mark the field set.
    ///
    /// Marks the field set even when the value is semantically empty (an
    /// empty sequence, an empty string). Note that sequence-valued fields
    /// are emitted on non-emptiness rather than on this flag, so a sequence
    /// set to empty still disappears from serialized output.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.set = true;
    }

    /// Was the field written through its setter or present in parsed input?
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Did the last parse find a type-conforming value for this field?
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl<T: FromWire> Field<T> {
    /// Read this field from a source JSON object using its descriptor.
    ///
    /// Failures never propagate: a missing required key or a value of the
    /// wrong JSON kind clears `valid` for this field and leaves the rest of
    /// the record's parse untouched.
    pub fn read_from(&mut self, obj: &Map<String, Value>, desc: &FieldDescriptor) {
        match obj.get(desc.wire) {
            None => {
                // Missing optional fields are valid by default; missing
                // required fields are what make a record invalid.
                self.valid = !desc.required;
            }
            Some(raw) => {
                self.set = true;
                match T::from_wire(raw) {
                    Ok(value) => {
                        self.value = value;
                        self.valid = true;
                    }
                    Err(err) => {
                        self.valid = false;
                        debug!(
                            field = desc.ident,
                            wire = desc.wire,
                            error = %err,
                            "field failed typed conversion"
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NAME: FieldDescriptor = FieldDescriptor::required("name", "name");
    const STATUS: FieldDescriptor = FieldDescriptor::optional("status", "status");

    fn obj(value: serde_json::Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_new_field_has_all_flags_false() {
        let field: Field<String> = Field::default();
        assert!(!field.is_set());
        assert!(!field.is_valid());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_setter_marks_set_but_not_valid() {
        let mut field: Field<String> = Field::default();
        field.set("Rex".to_string());
        assert!(field.is_set());
        assert!(!field.is_valid());
        assert_eq!(field.value(), "Rex");
    }

    #[test]
    fn test_read_from_present_key() {
        let mut field: Field<String> = Field::default();
        field.read_from(&obj(json!({"name": "Rex"})), &NAME);
        assert!(field.is_set());
        assert!(field.is_valid());
        assert_eq!(field.value(), "Rex");
    }

    #[test]
    fn test_missing_required_is_invalid() {
        let mut field: Field<String> = Field::default();
        field.read_from(&obj(json!({})), &NAME);
        assert!(!field.is_set());
        assert!(!field.is_valid());
    }

    #[test]
    fn test_missing_optional_is_valid() {
        let mut field: Field<String> = Field::default();
        field.read_from(&obj(json!({})), &STATUS);
        assert!(!field.is_set());
        assert!(field.is_valid());
    }

    #[test]
    fn test_type_mismatch_marks_invalid_and_keeps_prior_value() {
        let mut field: Field<String> = Field::default();
        field.set("prior".to_string());
        field.read_from(&obj(json!({"name": 42})), &NAME);
        assert!(field.is_set());
        assert!(!field.is_valid());
        assert_eq!(field.value(), "prior");
    }

    #[test]
    fn test_null_is_not_type_conforming() {
        let mut field: Field<i64> = Field::default();
        field.read_from(&obj(json!({"status": null})), &STATUS);
        assert!(!field.is_valid());
    }
}
