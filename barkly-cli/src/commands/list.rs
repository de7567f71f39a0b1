//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use barkly_core::{Preset, Strategy};
use clap::Subcommand;

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List chunking strategies
    Strategies,

    /// List configuration presets
    Presets,

    /// List output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        for (name, description) in self.entries() {
            println!("{name:<18} {description}");
        }
        Ok(())
    }

    /// Name and description of every listed item
    pub fn entries(&self) -> Vec<(String, String)> {
        match self {
            ListCommands::Strategies => Strategy::ALL
                .iter()
                .map(|s| {
                    let name = if *s == Strategy::default() {
                        format!("{s} (default)")
                    } else {
                        s.to_string()
                    };
                    (name, s.description().to_string())
                })
                .collect(),
            ListCommands::Presets => Preset::ALL
                .iter()
                .map(|p| {
                    let config = p.configuration();
                    let description = format!(
                        "{} [{}, {}..{} words]",
                        p.description(),
                        config.strategy,
                        config.min_chunk_size,
                        config.max_chunk_size
                    );
                    (p.to_string(), description)
                })
                .collect(),
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|f| (f.as_str().to_string(), f.description().to_string()))
                .collect(),
        }
    }
}
