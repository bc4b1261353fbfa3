//! # Issues and Paths
//!
//! An [`Issue`] is one reported violation: a `$`-rooted path plus a message.
//! Paths use `.` for object-key descent and `[index]` for array-index
//! descent, e.g. `$.address.zip` or `$.roles[2]`. Issues at the same path
//! are neither merged nor deduplicated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Path of the document root.
pub const ROOT_PATH: &str = "$";

/// Path of the property `key` under `parent`.
pub fn property_path(parent: &str, key: &str) -> String {
    format!("{parent}.{key}")
}

/// Path of the array element `index` under `parent`.
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// A single structural violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    /// Where in the document the violation occurred.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// The ordered issue list produced by one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// Returns the number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if the document conformed.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns a slice of all issues.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Issue> {
        self.issues
    }
}

impl From<Vec<Issue>> for ValidationReport {
    fn from(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {issue}")?;
        }
        Ok(())
    }
}
