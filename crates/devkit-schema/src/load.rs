//! # Input Loading
//!
//! Reads schema and document files into the JSON value model. The validator
//! itself never sees raw text; parse failures are surfaced here as
//! [`SchemaError`]s before any walk starts.
//!
//! `.yaml`/`.yml` files are parsed as YAML and converted into the JSON value
//! tree; everything else is parsed as JSON.

use std::path::Path;

use serde_json::{Map, Value};
use serde_yaml::Value as Yaml;

use crate::error::SchemaError;

/// Parse raw text as JSON, rejecting blank input.
///
/// # Errors
///
/// Returns [`SchemaError::EmptyInput`] for blank text and
/// [`SchemaError::Load`] (labelled with `origin`) for invalid JSON.
pub fn parse_json_text(text: &str, origin: &str) -> Result<Value, SchemaError> {
    if text.trim().is_empty() {
        return Err(SchemaError::EmptyInput);
    }
    serde_json::from_str(text).map_err(|e| SchemaError::Load {
        path: origin.to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}

/// Parse raw text as YAML and convert it into a JSON value.
///
/// # Errors
///
/// Returns [`SchemaError::EmptyInput`] for blank text and
/// [`SchemaError::Load`] for invalid YAML or YAML that has no JSON
/// equivalent.
pub fn parse_yaml_text(text: &str, origin: &str) -> Result<Value, SchemaError> {
    if text.trim().is_empty() {
        return Err(SchemaError::EmptyInput);
    }
    let yaml: Yaml = serde_yaml::from_str(text).map_err(|e| SchemaError::Load {
        path: origin.to_string(),
        reason: format!("invalid YAML: {e}"),
    })?;
    json_from_yaml(yaml).map_err(|reason| SchemaError::Load {
        path: origin.to_string(),
        reason: format!("YAML-to-JSON conversion failed: {reason}"),
    })
}

/// Load a JSON or YAML file, choosing the parser by extension.
///
/// # Errors
///
/// Returns [`SchemaError::Load`] when the file cannot be read or parsed,
/// and [`SchemaError::EmptyInput`] when it is blank.
pub fn load_value(path: &Path) -> Result<Value, SchemaError> {
    let origin = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| SchemaError::Load {
        path: origin.clone(),
        reason: format!("cannot read file: {e}"),
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => parse_yaml_text(&content, &origin),
        _ => parse_json_text(&content, &origin),
    }
}

/// Convert a YAML node into the JSON value model, consuming it. Tags are
/// dropped; scalar mapping keys become their string form.
fn json_from_yaml(node: Yaml) -> Result<Value, String> {
    Ok(match node {
        Yaml::Null => Value::Null,
        Yaml::Bool(flag) => Value::Bool(flag),
        Yaml::Number(number) => json_number(&number)?,
        Yaml::String(text) => Value::String(text),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(json_from_yaml)
                .collect::<Result<Vec<Value>, String>>()?,
        ),
        Yaml::Mapping(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, entry)| -> Result<(String, Value), String> {
                    Ok((object_key(key)?, json_from_yaml(entry)?))
                })
                .collect::<Result<Map<String, Value>, String>>()?,
        ),
        Yaml::Tagged(tagged) => json_from_yaml(tagged.value)?,
    })
}

fn json_number(number: &serde_yaml::Number) -> Result<Value, String> {
    if let Some(signed) = number.as_i64() {
        return Ok(Value::from(signed));
    }
    if let Some(unsigned) = number.as_u64() {
        return Ok(Value::from(unsigned));
    }
    number
        .as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| format!("number {number} has no JSON representation"))
}

fn object_key(key: Yaml) -> Result<String, String> {
    match key {
        Yaml::String(text) => Ok(text),
        Yaml::Number(number) => Ok(number.to_string()),
        Yaml::Bool(flag) => Ok(flag.to_string()),
        other => Err(format!("mapping key {other:?} cannot be a JSON object key")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_text_is_empty_input() {
        assert!(matches!(parse_json_text("  \n", "doc"), Err(SchemaError::EmptyInput)));
        assert!(matches!(parse_yaml_text("", "doc"), Err(SchemaError::EmptyInput)));
    }

    #[test]
    fn invalid_json_reports_origin() {
        let err = parse_json_text("{", "document.json").unwrap_err();
        match err {
            SchemaError::Load { path, reason } => {
                assert_eq!(path, "document.json");
                assert!(reason.starts_with("invalid JSON"));
            }
            other => panic!("expected Load, got {other}"),
        }
    }

    #[test]
    fn yaml_converts_to_json_model() {
        let value = parse_yaml_text(
            "name: Ada\nage: 28\nratio: 0.5\nroles:\n  - admin\n1: numeric-key\ntrue: bool-key\n",
            "doc.yaml",
        )
        .unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["age"], 28);
        assert_eq!(value["ratio"], 0.5);
        assert_eq!(value["roles"], json!(["admin"]));
        assert_eq!(value["1"], "numeric-key");
        assert_eq!(value["true"], "bool-key");
    }

    #[test]
    fn yaml_tags_are_dropped_and_complex_keys_rejected() {
        let value = parse_yaml_text("zip: !postcode \"12345\"\n", "doc.yaml").unwrap();
        assert_eq!(value, json!({ "zip": "12345" }));

        let err = parse_yaml_text("? [a, b]\n: 1\n", "doc.yaml").unwrap_err();
        assert!(err.to_string().contains("cannot be a JSON object key"), "got {err}");
    }

    #[test]
    fn yaml_keeps_key_order() {
        let value = parse_yaml_text("zeta: 1\nalpha: 2\n", "doc.yaml").unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn load_value_picks_parser_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("doc.json");
        let yaml_path = dir.path().join("doc.yml");
        std::fs::write(&json_path, r#"{"a": [1, 2]}"#).unwrap();
        std::fs::write(&yaml_path, "a:\n  - 1\n  - 2\n").unwrap();
        assert_eq!(load_value(&json_path).unwrap(), load_value(&yaml_path).unwrap());
    }

    #[test]
    fn load_value_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_value(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SchemaError::Load { .. }));
        assert!(err.to_string().contains("cannot read file"));
    }
}
