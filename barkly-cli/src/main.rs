//! The `barkly` command-line tool

use anyhow::Result;
use barkly_cli::commands::Commands;
use clap::Parser;

/// Split research documents into chunks for embedding and analysis
#[derive(Debug, Parser)]
#[command(name = "barkly", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
