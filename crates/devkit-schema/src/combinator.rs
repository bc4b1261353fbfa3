//! # Combinators and Literals
//!
//! `allOf`, `anyOf`, `oneOf`, `const` and `enum`. These keywords do not
//! depend on the value's kind and always run, in that order, before the
//! `type` check.
//!
//! Literal comparison is strict identity: primitives compare by value
//! (numbers numerically, so `1` equals `1.0`), while arrays and objects are
//! never equal to anything, not even a structurally identical literal.

use serde_json::{Number, Value};

use crate::issue::Issue;
use crate::number::format_number;
use crate::schema::Schema;
use crate::validate::Validator;

pub const ANY_OF_MESSAGE: &str = "Value does not match any of the allowed schemas";
pub const ONE_OF_MESSAGE: &str = "Value must match exactly one schema option";

pub(crate) fn evaluate(
    validator: &Validator,
    value: &Value,
    schema: &Schema,
    path: &str,
    depth: usize,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(all_of) = schema.all_of() {
        for branch in all_of {
            issues.extend(validator.collect(value, branch, path, depth + 1));
        }
    }

    // Branch-level detail is discarded for anyOf/oneOf.
    if let Some(any_of) = schema.any_of() {
        let matched = any_of
            .iter()
            .any(|branch| validator.collect(value, branch, path, depth + 1).is_empty());
        if !matched {
            issues.push(Issue::new(path, ANY_OF_MESSAGE));
        }
    }

    if let Some(one_of) = schema.one_of() {
        let matches = one_of
            .iter()
            .filter(|branch| validator.collect(value, branch, path, depth + 1).is_empty())
            .count();
        if matches != 1 {
            issues.push(Issue::new(path, ONE_OF_MESSAGE));
        }
    }

    if let Some(expected) = &schema.constant {
        if !strict_equals(value, expected) {
            issues.push(Issue::new(
                path,
                format!("Value must equal {}", render_literal(expected)),
            ));
        }
    }

    if let Some(allowed) = &schema.enumeration {
        if !allowed.iter().any(|entry| strict_equals(value, entry)) {
            let rendered: Vec<String> = allowed.iter().map(render_literal).collect();
            issues.push(Issue::new(
                path,
                format!("Value must be one of: {}", rendered.join(", ")),
            ));
        }
    }

    issues
}

/// Strict identity between a document value and a schema literal.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        _ => false,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    matches!((x.as_f64(), y.as_f64()), (Some(a), Some(b)) if a == b)
}

/// Render a literal for a message: strings quoted, everything else as JSON.
pub fn render_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Number(n) => render_number(n),
        other => other.to_string(),
    }
}

fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(|| n.to_string(), format_number)
    }
}
