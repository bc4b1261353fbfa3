//! # Schema Model
//!
//! A single immutable record with one optional field per recognised keyword.
//! Sub-schemas have the same shape as the root. Keywords outside the
//! vocabulary (`$schema`, `$ref`, `title`, `description`, ...) are collected
//! into [`Schema::unrecognized`] and never interpreted.

use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::kind::TypeSpec;
use crate::load::load_value;

/// A schema node.
///
/// Count and bound keywords are kept as `f64` so that any JSON number is
/// accepted (`minLength: 2.0` behaves like `minLength: 2`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<TypeSpec>,

    // Object keywords. `properties` keeps declaration order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<f64>,

    // Array keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<f64>,

    // Literal keywords. `const: null` is present, not absent.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<Value>>,
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub constant: Option<Value>,

    // String keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    // Numeric keywords, shared by `number` and `integer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,

    // Combinators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Schema>>,

    /// Keywords this validator does not understand, and recognised keywords
    /// whose value has the wrong JSON shape. Neither is interpreted.
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, Value>,
}

/// `additionalProperties`: a boolean switch or a schema for extra keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

impl Schema {
    /// Interpret a parsed JSON value as a schema.
    ///
    /// Boolean schemas (`true`/`false`) place no constraint on the value.
    /// A keyword whose value has the wrong shape is set aside in
    /// [`Schema::unrecognized`]; the rest of the tree is still read.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] when the root is neither an object
    /// nor a boolean.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(keywords) => Ok(Self::from_keywords(keywords)),
            Value::Bool(_) => Ok(Self::default()),
            other => Err(SchemaError::Parse(de::Error::invalid_type(
                unexpected(other),
                &"a schema object or boolean",
            ))),
        }
    }

    /// Load a schema from a JSON or YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] or [`SchemaError::EmptyInput`] when
    /// the file cannot be read or parsed, and [`SchemaError::Parse`] when
    /// its root is not a schema.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let value = load_value(path)?;
        Self::from_value(&value)
    }

    /// Names of unrecognised or set-aside keywords at this node, sorted.
    pub fn unrecognized_keywords(&self) -> Vec<&str> {
        self.unrecognized.keys().map(String::as_str).collect()
    }

    /// `allOf`, ignoring an empty sequence.
    pub(crate) fn all_of(&self) -> Option<&[Schema]> {
        non_empty(self.all_of.as_deref())
    }

    /// `anyOf`, ignoring an empty sequence.
    pub(crate) fn any_of(&self) -> Option<&[Schema]> {
        non_empty(self.any_of.as_deref())
    }

    /// `oneOf`, ignoring an empty sequence.
    pub(crate) fn one_of(&self) -> Option<&[Schema]> {
        non_empty(self.one_of.as_deref())
    }

    /// `pattern`, ignoring an empty string.
    pub(crate) fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref().filter(|p| !p.is_empty())
    }

    fn from_keywords(keywords: &Map<String, Value>) -> Self {
        let mut schema = Self::default();
        for (name, value) in keywords {
            let well_formed = match name.as_str() {
                "type" => assign(&mut schema.types, type_spec(value)),
                "properties" => assign(&mut schema.properties, property_schemas(value)),
                "required" => assign(&mut schema.required, string_list(value)),
                "additionalProperties" => {
                    assign(&mut schema.additional_properties, additional_properties(value))
                }
                "minProperties" => assign(&mut schema.min_properties, value.as_f64()),
                "maxProperties" => assign(&mut schema.max_properties, value.as_f64()),
                "items" => assign(&mut schema.items, subschema(value).map(Box::new)),
                "minItems" => assign(&mut schema.min_items, value.as_f64()),
                "maxItems" => assign(&mut schema.max_items, value.as_f64()),
                "enum" => assign(&mut schema.enumeration, value.as_array().cloned()),
                "const" => assign(&mut schema.constant, Some(value.clone())),
                "minLength" => assign(&mut schema.min_length, value.as_f64()),
                "maxLength" => assign(&mut schema.max_length, value.as_f64()),
                "pattern" => assign(&mut schema.pattern, value.as_str().map(str::to_owned)),
                "format" => assign(&mut schema.format, value.as_str().map(str::to_owned)),
                "minimum" => assign(&mut schema.minimum, value.as_f64()),
                "maximum" => assign(&mut schema.maximum, value.as_f64()),
                "exclusiveMinimum" => assign(&mut schema.exclusive_minimum, value.as_f64()),
                "exclusiveMaximum" => assign(&mut schema.exclusive_maximum, value.as_f64()),
                "multipleOf" => assign(&mut schema.multiple_of, value.as_f64()),
                "allOf" => assign(&mut schema.all_of, schema_list(value)),
                "anyOf" => assign(&mut schema.any_of, schema_list(value)),
                "oneOf" => assign(&mut schema.one_of, schema_list(value)),
                _ => {
                    schema.unrecognized.insert(name.clone(), value.clone());
                    continue;
                }
            };
            if !well_formed {
                tracing::debug!(keyword = %name, "keyword value has the wrong shape; ignoring it");
                schema.unrecognized.insert(name.clone(), value.clone());
            }
        }
        schema
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}

impl TryFrom<&Value> for Schema {
    type Error = SchemaError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

fn assign<T>(slot: &mut Option<T>, parsed: Option<T>) -> bool {
    *slot = parsed;
    slot.is_some()
}

/// A nested schema position. Booleans are unconstrained; anything other
/// than an object or a boolean is not a schema.
fn subschema(value: &Value) -> Option<Schema> {
    match value {
        Value::Object(keywords) => Some(Schema::from_keywords(keywords)),
        Value::Bool(_) => Some(Schema::default()),
        _ => None,
    }
}

fn type_spec(value: &Value) -> Option<TypeSpec> {
    match value {
        Value::String(name) => Some(TypeSpec::Single(name.clone())),
        Value::Array(_) => string_list(value).map(TypeSpec::Multiple),
        _ => None,
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    let entries = value.as_array()?;
    Some(entries.iter().filter_map(Value::as_str).map(str::to_owned).collect())
}

// A declared property whose schema is malformed is still declared, so it
// stays in the map as an unconstrained entry.
fn property_schemas(value: &Value) -> Option<IndexMap<String, Schema>> {
    let entries = value.as_object()?;
    Some(
        entries
            .iter()
            .map(|(key, entry)| (key.clone(), subschema(entry).unwrap_or_default()))
            .collect(),
    )
}

fn schema_list(value: &Value) -> Option<Vec<Schema>> {
    let branches = value.as_array()?;
    Some(branches.iter().map(|branch| subschema(branch).unwrap_or_default()).collect())
}

fn additional_properties(value: &Value) -> Option<AdditionalProperties> {
    match value {
        Value::Bool(allowed) => Some(AdditionalProperties::Allowed(*allowed)),
        Value::Object(keywords) => Some(AdditionalProperties::Schema(Box::new(
            Schema::from_keywords(keywords),
        ))),
        _ => None,
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => n.as_f64().map_or(Unexpected::Other("number"), Unexpected::Float),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn non_empty(schemas: Option<&[Schema]>) -> Option<&[Schema]> {
    schemas.filter(|s| !s.is_empty())
}
