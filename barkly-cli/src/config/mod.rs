//! Configuration file for the CLI
//!
//! ```toml
//! [chunking]
//! strategy = "hybrid"
//! max_chunk_size = 1500
//!
//! [output]
//! format = "json"
//! ```
//!
//! The `[chunking]` table takes the same keys as
//! [`ChunkingConfiguration`]; missing keys keep their defaults.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use barkly_core::ChunkingConfiguration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfiguration,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Include per-chunk metadata in text and Markdown output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            include_metadata: true,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file without validating the chunking values
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Check that the chunking values are consistent
    pub fn validate(&self) -> Result<(), CliError> {
        self.chunking.validate().map_err(CliError::from)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barkly_core::{Preset, Strategy};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
[chunking]
strategy = "semantic"
max_chunk_size = 900

[output]
format = "markdown"
"#,
        );

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.chunking.strategy, Strategy::Semantic);
        assert_eq!(config.chunking.max_chunk_size, 900);
        assert_eq!(config.chunking.min_chunk_size, 100);
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert!(config.output.pretty_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write_config("");
        assert_eq!(CliConfig::from_file(file.path()).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let file = write_config("[performance]\nworker_threads = 4\n");
        let error = CliConfig::from_file(file.path()).unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_inconsistent_values_fail_validation() {
        let file = write_config("[chunking]\nmin_chunk_size = 3000\n");
        let config = CliConfig::from_file(file.path()).unwrap();
        assert!(matches!(config.validate(), Err(CliError::ConfigError(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CliConfig {
            chunking: Preset::Academic.configuration(),
            output: OutputConfig {
                format: OutputFormat::Json,
                ..OutputConfig::default()
            },
        };
        let file = write_config(&config.to_toml().unwrap());
        assert_eq!(CliConfig::from_file(file.path()).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let error = CliConfig::from_file(Path::new("/nonexistent/barkly.toml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read configuration"));
    }
}
