//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use barkly_core::Lexicon;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file to validate
    #[arg(short, long, value_name = "FILE", required_unless_present = "lexicon")]
    pub config: Option<PathBuf>,

    /// Lexicon file to validate
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.config {
            println!("Validating configuration: {}", path.display());
            self.report(Self::check_config(path))?;
        }

        if let Some(path) = &self.lexicon {
            println!("Validating lexicon: {}", path.display());
            self.report(Self::check_lexicon(path))?;
        }

        Ok(())
    }

    fn check_config(path: &Path) -> Result<Vec<String>> {
        let config = CliConfig::from_file(path)?;
        config.validate()?;

        let chunking = &config.chunking;
        Ok(vec![
            format!("Strategy: {}", chunking.strategy),
            format!(
                "Chunk size: {}..{} words (target {})",
                chunking.min_chunk_size, chunking.max_chunk_size, chunking.target_chunk_size
            ),
            format!(
                "Overlap: {} words, {}% for semantic and sliding",
                chunking.overlap_tokens, chunking.overlap_percentage
            ),
            format!("Content budget per chunk: {} words", chunking.ceiling()),
            format!("Output format: {}", config.output.format.as_str()),
        ])
    }

    fn check_lexicon(path: &Path) -> Result<Vec<String>> {
        let lexicon = Lexicon::from_file(path)?;
        Ok(vec![
            format!("Name: {}", lexicon.name()),
            format!("Transition phrases: {}", lexicon.transition_phrases().len()),
            format!("Importance keywords: {}", lexicon.importance_keywords().len()),
        ])
    }

    fn report(&self, result: Result<Vec<String>>) -> Result<()> {
        match result {
            Ok(lines) => {
                println!("✓ Valid");
                for line in lines {
                    println!("  {line}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid");
                println!("  Error: {e:#}");
                Err(e.context("Validation failed"))
            }
        }
    }
}
