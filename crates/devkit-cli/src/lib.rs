//! # devkit-cli — Command-Line Front End
//!
//! The `devkit` binary reads schema and document files, hands the parsed
//! values to `devkit-schema`, and presents the resulting issues.
//!
//! ## Subcommands
//!
//! - `devkit validate --schema <SCHEMA> <DOCUMENT>` — validate and report.
//! - `devkit sample [--out-dir <DIR>]` — emit a sample schema and document.
//!
//! ## Exit Codes
//!
//! - `0` — valid (or command succeeded).
//! - `1` — the document has issues.
//! - `2` — usage, configuration, load, or parse error.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handler logic; handlers write to
//!   any `io::Write` so they can be driven from tests.
//! - Parse failures never reach the validator; they are surfaced here.

pub mod config;
pub mod output;
pub mod sample;
pub mod validate;

pub const EXIT_VALID: u8 = 0;
pub const EXIT_INVALID: u8 = 1;
pub const EXIT_ERROR: u8 = 2;
