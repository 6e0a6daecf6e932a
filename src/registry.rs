//! Name-keyed registry of the record models this crate ships, so callers
//! (the CLI in particular) can parse and report on a payload without naming
//! a concrete type.

use crate::models::{ApiResponse, Category, Order, Pet, Tag, User};
use crate::record::{FieldDescriptor, Record};
use crate::report::{report_for, ParseReport};
use serde_json::{Map, Value};

/// One registered record model: its name, descriptor table, and
/// monomorphized entry points.
pub struct ModelEntry {
    pub name: &'static str,
    pub descriptors: &'static [FieldDescriptor],
    pub report: fn(&Map<String, Value>) -> ParseReport,
    pub normalize: fn(&Value) -> Value,
}

fn normalize_as<R: Record>(value: &Value) -> Value {
    Value::Object(R::from_value(value).to_object())
}

/// All models known to the crate, in schema order.
pub static MODELS: &[ModelEntry] = &[
    ModelEntry {
        name: "pet",
        descriptors: Pet::DESCRIPTORS,
        report: report_for::<Pet>,
        normalize: normalize_as::<Pet>,
    },
    ModelEntry {
        name: "category",
        descriptors: Category::DESCRIPTORS,
        report: report_for::<Category>,
        normalize: normalize_as::<Category>,
    },
    ModelEntry {
        name: "tag",
        descriptors: Tag::DESCRIPTORS,
        report: report_for::<Tag>,
        normalize: normalize_as::<Tag>,
    },
    ModelEntry {
        name: "order",
        descriptors: Order::DESCRIPTORS,
        report: report_for::<Order>,
        normalize: normalize_as::<Order>,
    },
    ModelEntry {
        name: "user",
        descriptors: User::DESCRIPTORS,
        report: report_for::<User>,
        normalize: normalize_as::<User>,
    },
    ModelEntry {
        name: "api_response",
        descriptors: ApiResponse::DESCRIPTORS,
        report: report_for::<ApiResponse>,
        normalize: normalize_as::<ApiResponse>,
    },
];

/// Look up a registered model by name (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static ModelEntry> {
    MODELS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(lookup("pet").is_some());
        assert!(lookup("Pet").is_some());
        assert!(lookup("unicorn").is_none());
    }

    #[test]
    fn test_normalize_drops_absent_and_empty_fields() {
        let entry = lookup("pet").unwrap();
        let normalized = (entry.normalize)(&json!({
            "name": "Rex",
            "photoUrls": [],
            "tags": []
        }));
        assert_eq!(normalized, json!({"name": "Rex"}));
    }

    #[test]
    fn test_every_model_reports_its_own_descriptors() {
        for entry in MODELS {
            let report = (entry.report)(&Map::new());
            assert_eq!(report.fields.len(), entry.descriptors.len());
        }
    }
}
