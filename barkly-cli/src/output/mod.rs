//! Output formatting module

use anyhow::Result;
use barkly_core::{Chunk, ChunkingMethod};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Chunks of one input file
#[derive(Debug, Clone, Serialize)]
pub struct ChunkedDocument {
    /// Path of the input file as given on the command line
    pub source: String,
    /// Set when the resilient chunker picked the method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<ChunkingMethod>,
    pub chunks: Vec<Chunk>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the chunks of one document
    fn format_document(&mut self, document: &ChunkedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Chunk text under a separator line
    #[default]
    Text,
    /// JSON array of documents with chunk metadata
    Json,
    /// Markdown section per chunk
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Chunk text separated by header lines",
            OutputFormat::Json => "Array of documents with full chunk metadata",
            OutputFormat::Markdown => "A heading per chunk with a summary footer",
        }
    }

    /// Build the formatter for this format
    pub fn formatter<W>(
        &self,
        writer: W,
        include_metadata: bool,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, include_metadata)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, include_metadata)),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ChunkedDocument;
    use barkly_core::{AdaptiveChunker, ChunkingConfiguration, Strategy};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Writer whose contents stay readable after the formatter takes it
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub(crate) fn sample_document() -> ChunkedDocument {
        let config = ChunkingConfiguration::builder()
            .strategy(Strategy::Structural)
            .min_chunk_size(1)
            .max_chunk_size(100)
            .target_chunk_size(10)
            .overlap_tokens(0)
            .build()
            .unwrap();
        let text = "# Harbor\n\nThe elders met at dawn.\n\n# Valley\n\nChildren carried baskets home.";
        ChunkedDocument {
            source: "notes.md".to_string(),
            method: None,
            chunks: AdaptiveChunker::new(config).chunk_document(text),
        }
    }
}
