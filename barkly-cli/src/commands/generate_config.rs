//! Generate config command implementation

use crate::config::{CliConfig, OutputConfig};
use anyhow::{Context, Result};
use barkly_core::{ChunkingConfiguration, Preset};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Preset to start from (default: the built-in defaults)
    #[arg(short, long, value_name = "PRESET")]
    pub preset: Option<Preset>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating chunking configuration...");
        if let Some(preset) = self.preset {
            println!("  Preset: {preset}");
        }
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the sizes, strategy and heuristics");
        println!("2. Validate your configuration:");
        println!("   barkly validate -c {}", self.output.display());
        println!("3. Use it for chunking:");
        println!("   barkly chunk -i document.md -c {}", self.output.display());

        Ok(())
    }

    /// Commented TOML for the chosen preset
    fn generate_template(&self) -> Result<String> {
        let (label, chunking) = match self.preset {
            Some(preset) => (preset.as_str(), preset.configuration()),
            None => ("defaults", ChunkingConfiguration::default()),
        };
        let config = CliConfig {
            chunking,
            output: OutputConfig::default(),
        };

        Ok(format!(
            r#"# Barkly chunking configuration ({label})
#
# All sizes are whitespace-delimited words. A chunk's own content is at
# most max_chunk_size - 2 * overlap_tokens words; overlap from both
# neighbours fills the rest.
#
# strategy: semantic | structural | hybrid | sliding
# [output] format: text | json | markdown

{}"#,
            config.to_toml()?
        ))
    }
}
