//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod chunk;
pub mod generate_config;
pub mod list;
pub mod validate;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split documents into chunks
    Chunk(chunk::ChunkArgs),

    /// Check a configuration or lexicon file
    Validate(validate::ValidateArgs),

    /// Write a configuration file to start from
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Chunk(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
