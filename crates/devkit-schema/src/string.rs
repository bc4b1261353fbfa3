//! # String Evaluator
//!
//! Lengths count UTF-16 code units, so an astral-plane character such as
//! an emoji counts as two. `pattern` uses ECMAScript regular-expression
//! syntax (lookaround, backreferences, ASCII-only `\d`). It is compiled on
//! every evaluation and matched anywhere in the string; a pattern that fails
//! to compile is reported as an issue at the node rather than aborting the
//! walk.

use regress::Regex;

use crate::format::Format;
use crate::issue::Issue;
use crate::number::format_number;
use crate::schema::Schema;

pub(crate) fn evaluate(value: &str, schema: &Schema, path: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    let length = utf16_length(value);
    if let Some(min) = schema.min_length {
        if length < min {
            issues.push(Issue::new(
                path,
                format!("Expected at least {} characters", format_number(min)),
            ));
        }
    }
    if let Some(max) = schema.max_length {
        if length > max {
            issues.push(Issue::new(
                path,
                format!("Expected at most {} characters", format_number(max)),
            ));
        }
    }

    if let Some(pattern) = schema.pattern() {
        match Regex::new(pattern) {
            Ok(regex) => {
                if regex.find(value).is_none() {
                    issues.push(Issue::new(
                        path,
                        format!("Value does not match pattern {pattern}"),
                    ));
                }
            }
            Err(e) => {
                tracing::debug!(pattern, error = %e, "pattern failed to compile");
                issues.push(Issue::new(path, format!("Invalid pattern: {pattern}")));
            }
        }
    }

    // Unknown format names are ignored.
    if let Some(format) = schema.format.as_deref().and_then(Format::from_name) {
        if !format.accepts(value) {
            issues.push(Issue::new(path, format.message()));
        }
    }

    issues
}

fn utf16_length(value: &str) -> f64 {
    value.encode_utf16().count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn run(document: Value, schema: Value) -> Vec<Issue> {
        validate(&document, &Schema::from_value(&schema).unwrap())
    }

    #[test]
    fn length_bounds() {
        let schema = json!({ "minLength": 2, "maxLength": 4 });
        assert_eq!(
            run(json!("x"), schema.clone()),
            vec![Issue::new("$", "Expected at least 2 characters")]
        );
        assert_eq!(
            run(json!("abcde"), schema.clone()),
            vec![Issue::new("$", "Expected at most 4 characters")]
        );
        assert!(run(json!("abcd"), schema).is_empty());
    }

    #[test]
    fn length_counts_utf16_code_units() {
        assert_eq!(utf16_length("héllo"), 5.0);
        assert_eq!(utf16_length("😀"), 2.0);
        assert!(run(json!("😀"), json!({ "minLength": 2 })).is_empty());
        assert_eq!(
            run(json!("😀"), json!({ "maxLength": 1 })),
            vec![Issue::new("$", "Expected at most 1 characters")]
        );
    }

    #[test]
    fn pattern_is_unanchored() {
        assert!(run(json!("abc123def"), json!({ "pattern": "[0-9]+" })).is_empty());
        assert_eq!(
            run(json!("1234"), json!({ "pattern": "^[0-9]{5}$" })),
            vec![Issue::new("$", "Value does not match pattern ^[0-9]{5}$")]
        );
    }

    #[test]
    fn pattern_supports_lookaround_and_backreferences() {
        assert!(run(json!("guest"), json!({ "pattern": "^(?!admin)" })).is_empty());
        assert_eq!(
            run(json!("admin"), json!({ "pattern": "^(?!admin)" })),
            vec![Issue::new("$", "Value does not match pattern ^(?!admin)")]
        );
        assert!(run(json!("aa"), json!({ "pattern": "^(a)\\1$" })).is_empty());
        assert!(run(json!("price: $5"), json!({ "pattern": "(?<=\\$)\\d" })).is_empty());
    }

    #[test]
    fn digit_class_is_ascii_only() {
        let schema = json!({ "pattern": "^\\d{5}$" });
        assert!(run(json!("12345"), schema.clone()).is_empty());
        assert_eq!(
            run(json!("١٢٣٤٥"), schema),
            vec![Issue::new("$", "Value does not match pattern ^\\d{5}$")]
        );
    }

    #[test]
    fn invalid_pattern_is_an_issue_not_a_failure() {
        let schema = json!({
            "properties": {
                "a": { "pattern": "([a-z" },
                "b": { "type": "string" }
            }
        });
        assert_eq!(
            run(json!({ "a": "x", "b": 1 }), schema),
            vec![
                Issue::new("$.a", "Invalid pattern: ([a-z"),
                Issue::new("$.b", "Expected type string, got integer"),
            ]
        );
    }

    #[test]
    fn format_checks() {
        assert!(run(json!("ada@example.com"), json!({ "format": "email" })).is_empty());
        assert_eq!(
            run(json!("ada@example"), json!({ "format": "email" })),
            vec![Issue::new("$", "Value must be a valid email")]
        );
        assert_eq!(
            run(json!("not a uri"), json!({ "format": "uri" })),
            vec![Issue::new("$", "Value must be a valid URI")]
        );
        assert_eq!(
            run(json!("yesterday"), json!({ "format": "date-time" })),
            vec![Issue::new("$", "Value must be a valid date-time string")]
        );
    }

    #[test]
    fn unknown_format_is_ignored() {
        assert!(run(json!("anything"), json!({ "format": "ipv4" })).is_empty());
    }

    #[test]
    fn all_string_checks_accumulate() {
        let schema = json!({ "minLength": 20, "pattern": "^z", "format": "email" });
        assert_eq!(run(json!("nope"), schema).len(), 3);
    }
}
