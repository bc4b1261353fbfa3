//! # CLI Configuration
//!
//! Optional YAML (or JSON) file passed with `--config`:
//!
//! ```yaml
//! validation:
//!   max_depth: 64
//! output: json
//! ```
//!
//! Missing fields take their defaults; explicit command-line flags win over
//! the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use devkit_schema::ValidationOptions;

/// How validation results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// `{"valid": bool, "issues": [...]}`.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub validation: ValidationOptions,
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// The file's configuration if a path was given, defaults otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                tracing::debug!(config = ?config, path = %path.display(), "loaded config");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devkit_schema::options::DEFAULT_MAX_DEPTH;

    #[test]
    fn no_path_means_defaults() {
        let config = CliConfig::resolve(None).unwrap();
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.validation.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn loads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devkit.yaml");
        std::fs::write(&path, "validation:\n  max_depth: 12\noutput: json\n").unwrap();
        let config = CliConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.validation.max_depth, 12);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn loads_json_file_with_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devkit.json");
        std::fs::write(&path, r#"{"output": "json"}"#).unwrap();
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.validation, ValidationOptions::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devkit.yaml");
        std::fs::write(&path, "outptu: json\n").unwrap();
        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config file"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config file"));
    }
}
