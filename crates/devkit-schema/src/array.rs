//! # Array Evaluator

use serde_json::Value;

use crate::issue::{index_path, Issue};
use crate::number::format_number;
use crate::schema::Schema;
use crate::validate::Validator;

pub(crate) fn evaluate(
    validator: &Validator,
    items: &[Value],
    schema: &Schema,
    path: &str,
    depth: usize,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    let len = items.len() as f64;
    if let Some(min) = schema.min_items {
        if len < min {
            issues.push(Issue::new(
                path,
                format!("Expected at least {} items", format_number(min)),
            ));
        }
    }
    if let Some(max) = schema.max_items {
        if len > max {
            issues.push(Issue::new(
                path,
                format!("Expected at most {} items", format_number(max)),
            ));
        }
    }

    if let Some(item_schema) = &schema.items {
        for (index, item) in items.iter().enumerate() {
            issues.extend(validator.collect(item, item_schema, &index_path(path, index), depth + 1));
        }
    }

    issues
}
