//! CLI configuration, loaded from an optional TOML file.
//!
//! ```toml
//! output = "json"
//! pretty = true
//! log_level = "debug"
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Human,
    /// JSON result record
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub output: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Human,
            pretty: false,
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output, OutputFormat::Human);
        assert!(!config.pretty);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml_str("output = \"json\"\n").unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.pretty);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_full_file() {
        let config = CliConfig::from_toml_str(
            "output = \"json\"\npretty = true\nlog_level = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(
            config,
            CliConfig {
                output: OutputFormat::Json,
                pretty: true,
                log_level: "debug".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(CliConfig::from_toml_str("output = \"xml\"\n").is_err());
        assert!(CliConfig::from_toml_str("colour = true\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/earthing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
