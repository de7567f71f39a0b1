//! Output types for chunking results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dominant kind of content in a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    List,
    Code,
    Quote,
    Mixed,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::List => "list",
            ContentType::Code => "code",
            ContentType::Quote => "quote",
            ContentType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata computed for every chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// 1-based position in the output
    pub chunk_number: usize,
    pub total_chunks: usize,
    /// Character offset where the chunk's own span starts (overlap excluded)
    pub start_char: usize,
    /// Character offset one past the chunk's own span
    pub end_char: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub has_header: bool,
    pub header_text: Option<String>,
    pub content_type: ContentType,
    /// Unique-word ratio in [0, 1]
    pub semantic_density: f64,
    /// Heuristic score in [0, 1]
    pub contextual_importance: f64,
    /// Page of the chunk start, when page breaks are known
    pub page_number: Option<usize>,
}

/// A chunk of document text ready for embedding or analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Final text including overlap from neighbouring chunks
    pub text: String,
    pub metadata: ChunkMetadata,
    /// 0-based indices of chunks with a similar keyword set
    pub related_chunks: Vec<usize>,
}

impl Chunk {
    /// Character span of the chunk's own content
    pub fn span(&self) -> std::ops::Range<usize> {
        self.metadata.start_char..self.metadata.end_char
    }

    pub fn is_related_to(&self, index: usize) -> bool {
        self.related_chunks.contains(&index)
    }
}
