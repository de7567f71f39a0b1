//! Error types for configuration and lexicon loading
//!
//! Chunking itself never fails; these errors only come from reading or
//! validating configuration supplied by a caller.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration values are inconsistent
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// TOML could not be parsed into the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
