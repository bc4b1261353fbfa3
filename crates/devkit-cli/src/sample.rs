//! # Sample Subcommand
//!
//! Emits a ready-made schema and a document that conforms to it, as a
//! starting point for experimenting with `devkit validate`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{json, Value};

use crate::EXIT_VALID;

pub const SCHEMA_FILE: &str = "schema.json";
pub const DOCUMENT_FILE: &str = "document.json";

/// Arguments for the sample subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Write `schema.json` and `document.json` into this directory instead
    /// of printing them.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn sample_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name", "age", "email", "roles"],
        "additionalProperties": false,
        "properties": {
            "name": { "type": "string", "minLength": 2 },
            "age": { "type": "integer", "minimum": 18 },
            "email": { "type": "string", "format": "email" },
            "roles": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "string",
                    "enum": ["admin", "editor", "viewer"]
                }
            },
            "address": {
                "type": "object",
                "required": ["city", "zip"],
                "additionalProperties": false,
                "properties": {
                    "city": { "type": "string" },
                    "zip": { "type": "string", "pattern": "^\\d{5}$" }
                }
            }
        }
    })
}

pub fn sample_document() -> Value {
    json!({
        "name": "Ada Lovelace",
        "age": 28,
        "email": "ada@example.com",
        "roles": ["admin"],
        "address": {
            "city": "London",
            "zip": "12345"
        }
    })
}

pub fn run_sample(args: &SampleArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(args, &mut out)
}

pub fn execute(args: &SampleArgs, out: &mut impl Write) -> Result<u8> {
    match &args.out_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create {}", dir.display()))?;
            for (name, value) in [(SCHEMA_FILE, sample_schema()), (DOCUMENT_FILE, sample_document())] {
                let path = dir.join(name);
                let text = serde_json::to_string_pretty(&value)?;
                std::fs::write(&path, text + "\n")
                    .with_context(|| format!("cannot write {}", path.display()))?;
                writeln!(out, "wrote {}", path.display())?;
            }
        }
        None => {
            let bundle = json!({ "schema": sample_schema(), "document": sample_document() });
            serde_json::to_writer_pretty(&mut *out, &bundle)?;
            writeln!(out)?;
        }
    }
    Ok(EXIT_VALID)
}
