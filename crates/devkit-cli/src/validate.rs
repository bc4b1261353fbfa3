//! # Validate Subcommand
//!
//! `devkit validate --schema schema.json document.json`
//!
//! Loads both files (JSON, or YAML by extension), validates, and prints the
//! result. Exit code 0 when valid, 1 when issues were found.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use devkit_schema::{load_value, Schema, Validator};

use crate::config::{CliConfig, OutputFormat};
use crate::output::render;
use crate::{EXIT_INVALID, EXIT_VALID};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to validate (.json, .yaml or .yml).
    pub document: PathBuf,

    /// Schema to validate against (.json, .yaml or .yml).
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Output format. Overrides the config file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum nesting depth. Overrides the config file.
    #[arg(long)]
    pub max_depth: Option<usize>,
}

pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(args, config, &mut out)
}

/// Run the subcommand, writing the rendered result to `out`.
pub fn execute(args: &ValidateArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let schema_value = load_value(&args.schema)
        .with_context(|| format!("loading schema {}", args.schema.display()))?;
    let schema = Schema::from_value(&schema_value)
        .with_context(|| format!("interpreting schema {}", args.schema.display()))?;
    let document = load_value(&args.document)
        .with_context(|| format!("loading document {}", args.document.display()))?;

    if !schema.unrecognized.is_empty() {
        tracing::info!(
            keywords = ?schema.unrecognized_keywords(),
            "ignoring unrecognized top-level schema keywords"
        );
    }

    let mut options = config.validation.clone();
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    let format = args.format.unwrap_or(config.output);

    let report = Validator::new(options).report(&document, &schema);
    tracing::info!(
        document = %args.document.display(),
        issues = report.len(),
        "validation finished"
    );

    render(&report, format, out)?;
    Ok(if report.is_empty() { EXIT_VALID } else { EXIT_INVALID })
}
