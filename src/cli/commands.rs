use crate::registry;
use crate::report::{fail_if_invalid, print_report};
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Command-line interface for wirerec
///
/// Provides commands for validating and normalizing JSON payloads against
/// the registered record models.
#[derive(Parser)]
#[command(name = "wirerec")]
#[command(about = "wirerec CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a payload and report per-field presence and validity
    Validate {
        /// Path to the payload file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Model to parse the payload as (see `models`)
        #[arg(short, long)]
        model: String,

        /// Exit with an error code if the record is invalid
        #[arg(long, default_value_t = false)]
        fail_on_invalid: bool,

        /// Emit the report as JSON instead of the human-readable table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Parse a payload and re-emit it as canonical compact JSON
    Normalize {
        /// Path to the payload file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Model to parse the payload as (see `models`)
        #[arg(short, long)]
        model: String,

        /// Write the normalized payload to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List registered models and their wire tables
    Models,
}

/// Read a payload file into a JSON value. Files ending in `.yaml`/`.yml`
/// are parsed as YAML, everything else as JSON text. Malformed content
/// degrades to an empty object, matching the record parse contract.
pub fn load_payload(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload file {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
        match serde_yaml::from_str(&content) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "malformed YAML payload, treating as empty object");
                Ok(Value::Object(Map::new()))
            }
        }
    } else {
        match serde_json::from_str(&content) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "malformed JSON payload, treating as empty object");
                Ok(Value::Object(Map::new()))
            }
        }
    }
}

fn as_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(obj) => obj,
        other => {
            warn!(
                kind = crate::record::json_kind(&other),
                "payload is not an object, treating as empty"
            );
            Map::new()
        }
    }
}

/// Execute a parsed CLI invocation.
pub fn run_cli(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Validate {
            input,
            model,
            fail_on_invalid,
            json,
        } => {
            let entry = registry::lookup(model)
                .ok_or_else(|| anyhow!("unknown model '{model}'; run `wirerec models`"))?;
            let obj = as_object(load_payload(input)?);
            let report = (entry.report)(&obj);
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(entry.name, &report);
            }
            if *fail_on_invalid {
                fail_if_invalid(&report);
            }
            Ok(())
        }
        Commands::Normalize {
            input,
            model,
            output,
        } => {
            let entry = registry::lookup(model)
                .ok_or_else(|| anyhow!("unknown model '{model}'; run `wirerec models`"))?;
            let value = load_payload(input)?;
            let text = (entry.normalize)(&value).to_string();
            match output {
                Some(path) => std::fs::write(path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{text}"),
            }
            Ok(())
        }
        Commands::Models => {
            for entry in registry::MODELS {
                println!("{}", entry.name);
                for desc in entry.descriptors {
                    let requirement = if desc.required { "required" } else { "optional" };
                    println!("  {:<12} -> {:<12} {}", desc.ident, desc.wire, requirement);
                }
            }
            Ok(())
        }
    }
}
