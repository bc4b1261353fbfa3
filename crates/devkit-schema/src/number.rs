//! # Number and Integer Evaluator
//!
//! Both kinds share the bound and `multipleOf` checks. `multipleOf` uses
//! the raw floating-point remainder with no tolerance, so `0.3` is *not* a
//! multiple of `0.1`.

use serde_json::Number;

use crate::issue::Issue;
use crate::kind::is_integral;
use crate::schema::Schema;

/// Smallest magnitude still written in positional notation.
const POSITIONAL_MIN: f64 = 1e-6;
/// Magnitude from which numbers switch to exponent notation.
const POSITIONAL_MAX: f64 = 1e21;

pub(crate) fn evaluate(number: &Number, schema: &Schema, path: &str) -> Vec<Issue> {
    let Some(value) = number.as_f64() else {
        return Vec::new();
    };
    if is_integral(number) {
        evaluate_integer(value, schema, path)
    } else {
        evaluate_number(value, schema, path)
    }
}

fn evaluate_integer(value: f64, schema: &Schema, path: &str) -> Vec<Issue> {
    if value.fract() != 0.0 {
        return vec![Issue::new(path, "Value must be an integer")];
    }
    evaluate_number(value, schema, path)
}

fn evaluate_number(value: f64, schema: &Schema, path: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(minimum) = schema.minimum {
        if value < minimum {
            issues.push(Issue::new(
                path,
                format!("Value must be >= {}", format_number(minimum)),
            ));
        }
    }
    if let Some(maximum) = schema.maximum {
        if value > maximum {
            issues.push(Issue::new(
                path,
                format!("Value must be <= {}", format_number(maximum)),
            ));
        }
    }
    if let Some(bound) = schema.exclusive_minimum {
        if value <= bound {
            issues.push(Issue::new(
                path,
                format!("Value must be > {}", format_number(bound)),
            ));
        }
    }
    if let Some(bound) = schema.exclusive_maximum {
        if value >= bound {
            issues.push(Issue::new(
                path,
                format!("Value must be < {}", format_number(bound)),
            ));
        }
    }
    if let Some(divisor) = schema.multiple_of {
        // NaN remainder (divisor 0) is also a violation.
        if value % divisor != 0.0 {
            issues.push(Issue::new(
                path,
                format!("Value must be a multiple of {}", format_number(divisor)),
            ));
        }
    }

    issues
}

/// Render a number the way schema authors write it in JavaScript: whole
/// numbers without a fraction, exponent notation (`1e+21`, `1.5e-7`) only
/// outside `[1e-6, 1e21)`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if (POSITIONAL_MIN..POSITIONAL_MAX).contains(&value.abs()) {
        return value.to_string();
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}
