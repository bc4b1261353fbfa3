//! # Validation Options

use serde::{Deserialize, Serialize};

/// Default recursion limit for nested evaluations.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Message of the issue recorded when the depth limit is hit.
pub const DEPTH_EXCEEDED_MESSAGE: &str = "maximum nesting depth exceeded";

/// Tunables for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
    /// Deepest nested evaluation allowed. Each descent into a property,
    /// array element, or combinator branch adds one level. Past the limit
    /// the subtree is reported with a single depth issue instead of being
    /// walked.
    pub max_depth: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidationOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
