#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::{json, Value};
use wirerec::models::{Category, Pet, Tag};
use wirerec::record::Record;

#[test]
fn test_setter_round_trip() {
    let pet = Pet::default()
        .with_id(7)
        .with_name("Rex".to_string())
        .with_photo_urls(vec!["http://a/1.jpg".to_string(), "http://a/2.jpg".to_string()])
        .with_status("available".to_string())
        .with_category(Category::default().with_id(1).with_name("dogs".to_string()))
        .with_tags(vec![Tag::default().with_name("fluffy".to_string())]);

    let reparsed = Pet::from_json(&pet.to_json());
    assert_eq!(reparsed.id(), 7);
    assert_eq!(reparsed.name(), "Rex");
    assert_eq!(
        reparsed.photo_urls(),
        ["http://a/1.jpg".to_string(), "http://a/2.jpg".to_string()]
    );
    assert_eq!(reparsed.status(), "available");
    assert_eq!(reparsed.category().id(), 1);
    assert_eq!(reparsed.category().name(), "dogs");
    assert_eq!(reparsed.tags().len(), 1);
    assert_eq!(reparsed.tags()[0].name(), "fluffy");
}

#[test]
fn test_parse_serialize_parse_is_stable() {
    let text = r#"{
        "id": 5,
        "name": "Rex",
        "photoUrls": ["http://a/1.jpg"],
        "status": "available",
        "category": {"id": 1, "name": "dogs"},
        "tags": [{"id": 2, "name": "fluffy"}]
    }"#;
    let once = Pet::from_json(text);
    let twice = Pet::from_json(&once.to_json());
    assert_eq!(once, twice);
    assert_eq!(once.to_json(), twice.to_json());
}

#[test]
fn test_empty_object_fails_required_gating() {
    let pet = Pet::from_json("{}");
    assert!(!pet.is_valid());
    assert!(!pet.field_valid("name"));
    assert!(!pet.field_valid("photo_urls"));
    // Optional fields stay valid when absent.
    assert!(pet.field_valid("id"));
    assert!(pet.field_valid("status"));
    assert!(!pet.has_any_field());
}

#[test]
fn test_missing_optional_is_valid_and_omitted() {
    let pet = Pet::from_json(r#"{"name":"Rex","photoUrls":["http://a/1.jpg"]}"#);
    assert!(pet.field_valid("status"));
    assert!(pet.field_valid("category"));
    let obj = pet.to_object();
    assert!(!obj.contains_key("status"));
    assert!(!obj.contains_key("category"));
    assert!(!obj.contains_key("tags"));
}

#[test]
fn test_empty_sequence_set_via_setter_is_omitted() {
    let mut pet = Pet::default();
    pet.set_name("Rex".to_string());
    pet.set_photo_urls(Vec::new());
    let obj = pet.to_object();
    assert!(obj.contains_key("name"));
    assert!(!obj.contains_key("photoUrls"));
}

#[test]
fn test_valid_minimal_pet() {
    let pet = Pet::from_json(r#"{"name":"Rex","photoUrls":["http://a/1.jpg"]}"#);
    assert!(pet.is_valid());
    assert_eq!(pet.name(), "Rex");
    assert_eq!(pet.photo_urls(), ["http://a/1.jpg".to_string()]);

    let obj = pet.to_object();
    let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, ["name", "photoUrls"]);
}

#[test]
fn test_present_photo_urls_does_not_rescue_missing_name() {
    let pet = Pet::from_json(r#"{"photoUrls":[]}"#);
    assert!(!pet.is_valid());
    assert!(pet.field_valid("photo_urls"));
    assert!(!pet.field_valid("name"));
}

#[test]
fn test_malformed_text_degrades_to_empty_object() {
    let pet = Pet::from_json("{not valid json");
    assert!(!pet.is_valid());
    assert!(!pet.has_any_field());
    assert_eq!(pet.to_json(), "{}");
}

#[test]
fn test_non_object_top_level_degrades_to_empty_object() {
    let pet = Pet::from_json("[1,2,3]");
    assert!(!pet.is_valid());
    assert!(!pet.has_any_field());
}

#[test]
fn test_field_failure_does_not_abort_siblings() {
    let pet = Pet::from_json(
        r#"{"id":"oops","name":"Rex","photoUrls":["http://a/1.jpg"],"tags":"oops"}"#,
    );
    // Mistyped optional fields are recorded but never gate validity.
    assert!(pet.is_valid());
    assert!(!pet.field_valid("id"));
    assert!(!pet.field_valid("tags"));
    assert_eq!(pet.name(), "Rex");
    assert_eq!(pet.photo_urls(), ["http://a/1.jpg".to_string()]);
}

#[test]
fn test_mistyped_required_field_invalidates_record() {
    let pet = Pet::from_json(r#"{"name":42,"photoUrls":["http://a/1.jpg"]}"#);
    assert!(!pet.is_valid());
    assert!(!pet.field_valid("name"));
    assert!(pet.field_valid("photo_urls"));
}

#[test]
fn test_nested_category_and_tags() {
    let pet = Pet::from_json(
        r#"{
            "name": "Rex",
            "photoUrls": ["http://a/1.jpg"],
            "category": {"id": 3, "name": "dogs"},
            "tags": [{"id": 1, "name": "fluffy"}, {"name": "small"}]
        }"#,
    );
    assert!(pet.is_valid());
    assert_eq!(pet.category().id(), 3);
    assert_eq!(pet.category().name(), "dogs");
    assert_eq!(pet.tags().len(), 2);
    assert_eq!(pet.tags()[1].name(), "small");
    assert_eq!(pet.tags()[1].id(), 0);

    let obj = pet.to_object();
    assert_eq!(obj["category"], json!({"id": 3, "name": "dogs"}));
}

#[test]
fn test_empty_nested_category_is_not_emitted() {
    let mut pet = Pet::default();
    pet.set_name("Rex".to_string());
    // An explicitly set but fieldless nested record has nothing to say on
    // the wire.
    pet.set_category(Category::default());
    let obj = pet.to_object();
    assert!(!obj.contains_key("category"));
    assert!(pet.has_any_field());
}

#[test]
fn test_mistyped_nested_category_is_invalid() {
    let pet = Pet::from_json(r#"{"name":"Rex","photoUrls":[],"category":42}"#);
    assert!(pet.is_valid());
    assert!(!pet.field_valid("category"));
}

#[test]
fn test_wire_key_translation() {
    let pet = Pet::from_json(r#"{"name":"Rex","photoUrls":["http://a/1.jpg"]}"#);
    let obj = pet.to_object();
    assert!(obj.contains_key("photoUrls"));
    assert!(!obj.contains_key("photo_urls"));

    let desc = Pet::descriptor("photo_urls").unwrap();
    assert_eq!(desc.wire, "photoUrls");
    assert!(desc.required);
    assert!(Pet::descriptor("photoUrls").is_none());
}

#[test]
fn test_to_json_is_compact_and_canonical() {
    let mut pet = Pet::default();
    pet.set_name("Rex".to_string());
    pet.set_id(1);
    let text = pet.to_json();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, json!({"id": 1, "name": "Rex"}));
    assert!(!text.contains(' '));
}
