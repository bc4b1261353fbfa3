//! # Type Resolution
//!
//! Maps runtime JSON values onto the seven canonical type names. A number
//! with no fractional part (including zero and negatives, and floats such as
//! `4.0`) resolves to `integer`; every other number resolves to `number`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// The resolved kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Boolean,
    Object,
    Array,
    String,
    Number,
    Integer,
}

impl JsonType {
    /// Resolve the type of a runtime value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(n) if is_integral(n) => Self::Integer,
            Value::Number(_) => Self::Number,
        }
    }

    /// Canonical schema name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
        }
    }

    /// Whether a declared type name admits values of this resolved type.
    ///
    /// `"number"` admits integers as well.
    pub fn is_admitted_by(&self, declared: &str) -> bool {
        declared == self.as_str() || (declared == "number" && *self == Self::Integer)
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if the number has no fractional part.
pub fn is_integral(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

/// Resolve the type of a runtime value (free-function form of [`JsonType::of`]).
pub fn type_of(value: &Value) -> JsonType {
    JsonType::of(value)
}

/// The `type` keyword: a single type name or a set of names.
///
/// Names are kept as written so that unknown names still render in
/// messages; they simply never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeSpec {
    /// The declared names, in order.
    pub fn names(&self) -> &[String] {
        match self {
            Self::Single(name) => std::slice::from_ref(name),
            Self::Multiple(names) => names,
        }
    }

    /// `typeMatches`: true if the resolved type of `value` is admitted.
    pub fn matches(&self, value: &Value) -> bool {
        let resolved = JsonType::of(value);
        self.names().iter().any(|name| resolved.is_admitted_by(name))
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(" | "))
    }
}

/// Free-function form of [`TypeSpec::matches`].
pub fn type_matches(value: &Value, declared: &TypeSpec) -> bool {
    declared.matches(value)
}
