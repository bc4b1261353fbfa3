//! # Result Rendering

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use devkit_schema::{Issue, ValidationReport};

use crate::config::OutputFormat;

pub const VALID_BANNER: &str = "✓ JSON is valid for this schema";

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    issues: &'a [Issue],
}

/// Write `report` to `out` in the requested format.
pub fn render(report: &ValidationReport, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, out),
        OutputFormat::Json => render_json(report, out),
    }
}

fn render_text(report: &ValidationReport, out: &mut impl Write) -> Result<()> {
    if report.is_empty() {
        writeln!(out, "{VALID_BANNER}")?;
        return Ok(());
    }

    let count = report.len();
    let noun = if count == 1 { "issue" } else { "issues" };
    writeln!(out, "Validation Errors ({count} {noun})")?;
    for issue in report.issues() {
        writeln!(out, "  {}", issue.path)?;
        writeln!(out, "    {}", issue.message)?;
    }
    Ok(())
}

fn render_json(report: &ValidationReport, out: &mut impl Write) -> Result<()> {
    let body = JsonReport {
        valid: report.is_empty(),
        issues: report.issues(),
    };
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rendered(report: &ValidationReport, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render(report, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_valid() {
        assert_eq!(
            rendered(&ValidationReport::default(), OutputFormat::Text),
            "✓ JSON is valid for this schema\n"
        );
    }

    #[test]
    fn text_singular_and_plural() {
        let one = ValidationReport::from(vec![Issue::new("$.a", "Property is required")]);
        assert_eq!(
            rendered(&one, OutputFormat::Text),
            "Validation Errors (1 issue)\n  $.a\n    Property is required\n"
        );
        let two = ValidationReport::from(vec![
            Issue::new("$.a", "Property is required"),
            Issue::new("$.b", "Additional properties are not allowed"),
        ]);
        assert!(rendered(&two, OutputFormat::Text).starts_with("Validation Errors (2 issues)\n"));
    }

    #[test]
    fn json_shape() {
        let report = ValidationReport::from(vec![Issue::new("$[1]", "Expected type integer, got string")]);
        let value: serde_json::Value =
            serde_json::from_str(&rendered(&report, OutputFormat::Json)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "valid": false,
                "issues": [{ "path": "$[1]", "message": "Expected type integer, got string" }]
            })
        );
    }
}
