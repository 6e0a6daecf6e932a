#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::commands::{load_payload, run_cli, Cli, Commands};
use serde_json::json;
use std::io::Write;

fn write_temp(ext: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{ext}"))
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write payload");
    file
}

#[test]
fn test_load_payload_json() {
    let file = write_temp("json", r#"{"name":"Rex","photoUrls":["http://a/1.jpg"]}"#);
    let value = load_payload(file.path()).unwrap();
    assert_eq!(value["name"], json!("Rex"));
}

#[test]
fn test_load_payload_yaml() {
    let file = write_temp("yaml", "name: Rex\nphotoUrls:\n  - http://a/1.jpg\n");
    let value = load_payload(file.path()).unwrap();
    assert_eq!(value["name"], json!("Rex"));
    assert_eq!(value["photoUrls"], json!(["http://a/1.jpg"]));
}

#[test]
fn test_load_payload_malformed_degrades_to_empty_object() {
    let file = write_temp("json", "{not json");
    let value = load_payload(file.path()).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn test_load_payload_missing_file_is_an_error() {
    let err = load_payload(std::path::Path::new("/nonexistent/payload.json"));
    assert!(err.is_err());
}

#[test]
fn test_validate_unknown_model_fails() {
    let file = write_temp("json", "{}");
    let cli = Cli {
        command: Commands::Validate {
            input: file.path().to_path_buf(),
            model: "unicorn".to_string(),
            fail_on_invalid: false,
            json: false,
        },
    };
    let result = run_cli(&cli);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("unknown model"));
}

#[test]
fn test_validate_known_model_succeeds() {
    let file = write_temp("json", r#"{"name":"Rex","photoUrls":["http://a/1.jpg"]}"#);
    let cli = Cli {
        command: Commands::Validate {
            input: file.path().to_path_buf(),
            model: "pet".to_string(),
            fail_on_invalid: false,
            json: false,
        },
    };
    run_cli(&cli).unwrap();
}

#[test]
fn test_validate_json_report() {
    let file = write_temp("json", r#"{"photoUrls":[]}"#);
    let cli = Cli {
        command: Commands::Validate {
            input: file.path().to_path_buf(),
            model: "pet".to_string(),
            fail_on_invalid: false,
            json: true,
        },
    };
    run_cli(&cli).unwrap();
}

#[test]
fn test_normalize_writes_compact_output() {
    let input = write_temp("yaml", "name: Rex\nphotoUrls: []\nid: 7\n");
    let output = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("temp file");
    let cli = Cli {
        command: Commands::Normalize {
            input: input.path().to_path_buf(),
            model: "pet".to_string(),
            output: Some(output.path().to_path_buf()),
        },
    };
    run_cli(&cli).unwrap();

    let written = std::fs::read_to_string(output.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    // Empty photoUrls is dropped by the emission predicate.
    assert_eq!(value, json!({"id": 7, "name": "Rex"}));
}

#[test]
fn test_models_command_runs() {
    let cli = Cli {
        command: Commands::Models,
    };
    run_cli(&cli).unwrap();
}
