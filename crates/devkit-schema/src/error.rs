//! # Error Types
//!
//! Structural violations are never errors: they are reported as
//! [`Issue`](crate::Issue)s. The types here cover what happens around the
//! recursive walk: turning raw JSON into a [`Schema`](crate::Schema),
//! loading files, and the strict [`Validator::check`](crate::Validator::check)
//! wrapper.

use thiserror::Error;

use crate::issue::ValidationReport;

/// Message shown when either input is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please provide both a schema and JSON data";

/// Errors raised outside the structural walk.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema root is neither an object nor a boolean.
    #[error("schema parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A schema or document file could not be read or parsed.
    #[error("load error for '{path}': {reason}")]
    Load {
        /// Path of the file that failed to load.
        path: String,
        /// Reason the file could not be loaded.
        reason: String,
    },

    /// Schema or document input was empty or whitespace only.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    /// The document did not conform to the schema.
    #[error("validation failed with {} issue(s):\n{report}", .report.len())]
    ValidationFailed {
        /// Every issue found during the walk.
        report: ValidationReport,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Issue;

    #[test]
    fn empty_input_message_matches_tool_text() {
        assert_eq!(
            SchemaError::EmptyInput.to_string(),
            "Please provide both a schema and JSON data"
        );
    }

    #[test]
    fn load_error_names_path() {
        let err = SchemaError::Load {
            path: "schema.json".into(),
            reason: "cannot read file".into(),
        };
        assert_eq!(err.to_string(), "load error for 'schema.json': cannot read file");
    }

    #[test]
    fn validation_failed_lists_issues() {
        let report = ValidationReport::from(vec![Issue::new("$.a", "Property is required")]);
        let err = SchemaError::ValidationFailed { report };
        let text = err.to_string();
        assert!(text.starts_with("validation failed with 1 issue(s):"));
        assert!(text.contains("$.a: Property is required"));
    }
}
