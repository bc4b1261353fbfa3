//! # devkit CLI entry point
//!
//! Parses command-line arguments, sets up tracing, loads the optional
//! config file, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use devkit_cli::config::CliConfig;
use devkit_cli::sample::{run_sample, SampleArgs};
use devkit_cli::validate::{run_validate, ValidateArgs};
use devkit_cli::EXIT_ERROR;

/// Developer toolbox: structural JSON Schema validation.
#[derive(Parser, Debug)]
#[command(name = "devkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Explicit tracing filter (e.g. `devkit_schema=debug`). Overrides -v.
    #[arg(long, global = true)]
    log_filter: Option<String>,

    /// Path to a YAML or JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a JSON or YAML document against a schema.
    Validate(ValidateArgs),

    /// Print (or write) a sample schema and a conforming document.
    Sample(SampleArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.log_filter.as_deref() {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!("devkit: ignoring invalid --log-filter: {e}");
            EnvFilter::new("warn")
        }),
        None => verbosity_filter(cli.verbose),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("devkit CLI starting");

    let result = CliConfig::resolve(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Validate(args) => run_validate(args, &config),
        Commands::Sample(args) => run_sample(args),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn verbosity_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devkit_cli::config::OutputFormat;

    #[test]
    fn cli_parse_validate() {
        let cli = Cli::try_parse_from(["devkit", "validate", "--schema", "s.json", "d.json"]).unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.schema, PathBuf::from("s.json"));
                assert_eq!(args.document, PathBuf::from("d.json"));
                assert!(args.format.is_none());
                assert!(args.max_depth.is_none());
            }
            other => panic!("expected validate, got {other:?}"),
        }
    }

    #[test]
    fn cli_parse_validate_overrides() {
        let cli = Cli::try_parse_from([
            "devkit",
            "validate",
            "-s",
            "s.yaml",
            "d.yaml",
            "--format",
            "json",
            "--max-depth",
            "8",
        ])
        .unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert_eq!(args.max_depth, Some(8));
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_validate_requires_schema() {
        assert!(Cli::try_parse_from(["devkit", "validate", "d.json"]).is_err());
    }

    #[test]
    fn cli_parse_rejects_unknown_format() {
        assert!(
            Cli::try_parse_from(["devkit", "validate", "-s", "s.json", "d.json", "--format", "xml"])
                .is_err()
        );
    }

    #[test]
    fn cli_parse_sample_with_out_dir() {
        let cli = Cli::try_parse_from(["devkit", "sample", "--out-dir", "tmp"]).unwrap();
        if let Commands::Sample(args) = cli.command {
            assert_eq!(args.out_dir, Some(PathBuf::from("tmp")));
        } else {
            panic!("expected sample");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "devkit", "sample", "-vv", "--config", "devkit.yaml", "--log-filter", "debug",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("devkit.yaml")));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
