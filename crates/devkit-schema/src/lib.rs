//! # devkit-schema — Structural JSON Schema Validation
//!
//! Checks an already-parsed JSON document against a schema written in a
//! Draft-07-style keyword subset and reports *every* violation it can find,
//! each tagged with the JSONPath (`$`, `$.address.zip`, `$.roles[2]`) at
//! which it occurred.
//!
//! ```
//! use devkit_schema::{validate, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::from_value(&json!({
//!     "type": "object",
//!     "required": ["a"],
//!     "properties": { "a": { "type": "string" } }
//! }))
//! .unwrap();
//!
//! let issues = validate(&json!({}), &schema);
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].path, "$.a");
//! assert_eq!(issues[0].message, "Property is required");
//! ```
//!
//! ## Vocabulary
//!
//! `type`, `properties`, `required`, `additionalProperties`, `items`,
//! `enum`, `const`, `minLength`, `maxLength`, `pattern`, `format`
//! (`email`, `uri`, `date-time`), `minimum`, `maximum`, `exclusiveMinimum`,
//! `exclusiveMaximum`, `multipleOf`, `minItems`, `maxItems`,
//! `minProperties`, `maxProperties`, `allOf`, `anyOf`, `oneOf`.
//! Anything else is ignored, as is a recognised keyword whose value has
//! the wrong shape. Boolean sub-schemas place no constraint. There is no `$ref` resolution and no schema
//! compilation: schema and document are walked together on every call.
//!
//! ## Crate Policy
//!
//! - Structural violations are data ([`Issue`]), never errors. Only input
//!   handling outside the walk produces [`SchemaError`].
//! - Validation is pure: no I/O, no shared mutable state. Recursion is
//!   bounded by [`ValidationOptions::max_depth`].
//! - No `panic!()` or `.unwrap()` outside tests.

mod array;
pub mod combinator;
pub mod error;
pub mod format;
pub mod issue;
pub mod kind;
pub mod load;
mod number;
mod object;
pub mod options;
pub mod schema;
mod string;
pub mod validate;

pub use error::SchemaError;
pub use format::Format;
pub use issue::{Issue, ValidationReport, ROOT_PATH};
pub use kind::{type_matches, type_of, JsonType, TypeSpec};
pub use load::load_value;
pub use options::ValidationOptions;
pub use schema::{AdditionalProperties, Schema};
pub use validate::{validate, Validator};
