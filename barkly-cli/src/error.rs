//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// User-facing failures the CLI reports before or around chunking
#[derive(Debug)]
pub enum CliError {
    /// An input path that is not a pattern does not exist
    FileNotFound(PathBuf),
    /// A glob pattern is malformed or matches no files
    InvalidPattern(String),
    /// A configuration or lexicon file is unreadable or inconsistent
    ConfigError(String),
    /// A document could not be chunked
    ProcessingError { path: PathBuf, message: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError { path, message } => {
                write!(f, "Failed to chunk {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<barkly_core::Error> for CliError {
    fn from(error: barkly_core::Error) -> Self {
        CliError::ConfigError(error.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
