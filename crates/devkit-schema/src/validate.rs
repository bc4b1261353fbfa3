//! # Root Evaluator
//!
//! One recursive descent per call. At every node the combinators and
//! literal keywords run first and their issues accumulate; then `type` is
//! checked. A `type` mismatch records one issue and ends evaluation of that
//! node. Otherwise the node is handed to the evaluator for the value's
//! *resolved* kind, whether or not the schema declared a `type`.
//!
//! Every recursive call returns its own fresh issue list, so `anyOf` and
//! `oneOf` branches never observe each other's partial results.

use serde_json::Value;

use crate::error::SchemaError;
use crate::issue::{Issue, ValidationReport, ROOT_PATH};
use crate::kind::JsonType;
use crate::options::{ValidationOptions, DEPTH_EXCEEDED_MESSAGE};
use crate::schema::Schema;
use crate::{array, combinator, number, object, string};

/// A configured, stateless validator.
///
/// `Validator` holds only its options, so one instance can be shared
/// across threads and reused for any number of (document, schema) pairs.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate `document` against `schema`, returning every issue found.
    ///
    /// An empty list means the document conforms.
    pub fn validate(&self, document: &Value, schema: &Schema) -> Vec<Issue> {
        let issues = self.collect(document, schema, ROOT_PATH, 0);
        tracing::debug!(issues = issues.len(), "validation complete");
        issues
    }

    /// Like [`validate`](Self::validate), wrapped in a [`ValidationReport`].
    pub fn report(&self, document: &Value, schema: &Schema) -> ValidationReport {
        ValidationReport::from(self.validate(document, schema))
    }

    pub fn is_valid(&self, document: &Value, schema: &Schema) -> bool {
        self.validate(document, schema).is_empty()
    }

    /// Strict form: `Ok(())` when valid, otherwise the full report as an error.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ValidationFailed`] if any issue was found.
    pub fn check(&self, document: &Value, schema: &Schema) -> Result<(), SchemaError> {
        let report = self.report(document, schema);
        if report.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { report })
        }
    }

    /// Evaluate one node. `depth` counts nested evaluations above this one.
    pub(crate) fn collect(
        &self,
        value: &Value,
        schema: &Schema,
        path: &str,
        depth: usize,
    ) -> Vec<Issue> {
        if depth > self.options.max_depth {
            tracing::warn!(
                path,
                max_depth = self.options.max_depth,
                "nesting depth limit reached; subtree not evaluated"
            );
            return vec![Issue::new(path, DEPTH_EXCEEDED_MESSAGE)];
        }

        let mut issues = combinator::evaluate(self, value, schema, path, depth);

        if let Some(types) = &schema.types {
            if !types.matches(value) {
                issues.push(Issue::new(
                    path,
                    format!("Expected type {types}, got {}", JsonType::of(value)),
                ));
                return issues;
            }
        }

        match value {
            Value::Object(map) => issues.extend(object::evaluate(self, map, schema, path, depth)),
            Value::Array(items) => issues.extend(array::evaluate(self, items, schema, path, depth)),
            Value::String(s) => issues.extend(string::evaluate(s, schema, path)),
            Value::Number(n) => issues.extend(number::evaluate(n, schema, path)),
            Value::Null | Value::Bool(_) => {}
        }

        issues
    }
}

/// Validate `document` against `schema` with default options.
pub fn validate(document: &Value, schema: &Schema) -> Vec<Issue> {
    Validator::default().validate(document, schema)
}
