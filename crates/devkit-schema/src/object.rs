//! # Object Evaluator

use serde_json::{Map, Value};

use crate::issue::{property_path, Issue};
use crate::number::format_number;
use crate::schema::{AdditionalProperties, Schema};
use crate::validate::Validator;

pub(crate) fn evaluate(
    validator: &Validator,
    object: &Map<String, Value>,
    schema: &Schema,
    path: &str,
    depth: usize,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(required) = &schema.required {
        for name in required {
            if !object.contains_key(name) {
                issues.push(Issue::new(property_path(path, name), "Property is required"));
            }
        }
    }

    let count = object.len() as f64;
    if let Some(min) = schema.min_properties {
        if count < min {
            issues.push(Issue::new(
                path,
                format!("Expected at least {} properties", format_number(min)),
            ));
        }
    }
    if let Some(max) = schema.max_properties {
        if count > max {
            issues.push(Issue::new(
                path,
                format!("Expected at most {} properties", format_number(max)),
            ));
        }
    }

    // Declared-but-absent keys are only an error via `required`.
    if let Some(properties) = &schema.properties {
        for (key, property_schema) in properties {
            if let Some(child) = object.get(key) {
                issues.extend(validator.collect(
                    child,
                    property_schema,
                    &property_path(path, key),
                    depth + 1,
                ));
            }
        }
    }

    let declared = |key: &str| {
        schema
            .properties
            .as_ref()
            .is_some_and(|properties| properties.contains_key(key))
    };
    let extras = object.iter().filter(|(key, _)| !declared(key.as_str()));

    match &schema.additional_properties {
        Some(AdditionalProperties::Allowed(false)) => {
            for (key, _) in extras {
                issues.push(Issue::new(
                    property_path(path, key),
                    "Additional properties are not allowed",
                ));
            }
        }
        Some(AdditionalProperties::Schema(extra_schema)) => {
            for (key, child) in extras {
                issues.extend(validator.collect(
                    child,
                    extra_schema,
                    &property_path(path, key),
                    depth + 1,
                ));
            }
        }
        Some(AdditionalProperties::Allowed(true)) | None => {}
    }

    issues
}
