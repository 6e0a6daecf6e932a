//! Per-field parse reports for records, printable in the shape the
//! `validate` CLI command expects.

use crate::record::Record;
use serde::Serialize;
use serde_json::{Map, Value};

/// Presence and validity of one field after parsing a source object.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub ident: &'static str,
    pub wire: &'static str,
    pub required: bool,
    /// The wire key was present in the source object
    pub present: bool,
    /// The field's validity flag after parsing
    pub valid: bool,
}

/// Whole-record parse report: the aggregate validity verdict plus one entry
/// per declared field.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub valid: bool,
    pub fields: Vec<FieldReport>,
}

impl ParseReport {
    /// Fields that parsed to a non-conforming value or were required and
    /// missing.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|f| !f.valid)
    }
}

/// Parse `obj` as `R` and report presence and validity per declared field.
pub fn report_for<R: Record>(obj: &Map<String, Value>) -> ParseReport {
    let record = R::from_object(obj);
    let fields = R::DESCRIPTORS
        .iter()
        .map(|desc| FieldReport {
            ident: desc.ident,
            wire: desc.wire,
            required: desc.required,
            present: obj.contains_key(desc.wire),
            valid: record.field_valid(desc.ident),
        })
        .collect();
    ParseReport {
        valid: record.is_valid(),
        fields,
    }
}

/// Print a human-readable report for a parsed payload.
pub fn print_report(model: &str, report: &ParseReport) {
    let verdict = if report.valid { "✅ valid" } else { "❌ invalid" };
    println!("{model}: {verdict}");
    for field in &report.fields {
        let requirement = if field.required { "required" } else { "optional" };
        let presence = if field.present { "present" } else { "absent" };
        let state = if field.valid { "ok" } else { "INVALID" };
        println!(
            "  {:<12} ({:<12}) {:<8} {:<8} {}",
            field.ident, field.wire, requirement, presence, state
        );
    }
}

/// Exit with an error code when the report is invalid, after summarizing
/// the offending fields on stderr.
pub fn fail_if_invalid(report: &ParseReport) {
    if !report.valid {
        let offenders: Vec<&str> = report
            .invalid_fields()
            .filter(|f| f.required)
            .map(|f| f.ident)
            .collect();
        eprintln!(
            "\n❌ record is invalid; required field(s) failed: {}\n",
            offenders.join(", ")
        );
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pet;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_report_flags_missing_required() {
        let report = report_for::<Pet>(&obj(json!({"photoUrls": []})));
        assert!(!report.valid);
        let name = report.fields.iter().find(|f| f.ident == "name").unwrap();
        assert!(name.required);
        assert!(!name.present);
        assert!(!name.valid);
        let urls = report
            .fields
            .iter()
            .find(|f| f.ident == "photo_urls")
            .unwrap();
        assert!(urls.present);
        assert!(urls.valid);
    }

    #[test]
    fn test_report_tracks_mistyped_optional() {
        let report = report_for::<Pet>(&obj(json!({
            "name": "Rex",
            "photoUrls": ["http://a/1.jpg"],
            "id": "not-a-number"
        })));
        // A mistyped optional field never gates aggregate validity.
        assert!(report.valid);
        let id = report.fields.iter().find(|f| f.ident == "id").unwrap();
        assert!(id.present);
        assert!(!id.valid);
        assert_eq!(report.invalid_fields().count(), 1);
    }
}
