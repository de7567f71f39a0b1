//! Adaptive chunking with graceful degradation

use super::document::{basic_chunking, DocumentChunker};
use crate::api::{restore_offsets, AdaptiveChunker, Chunk, ChunkingConfiguration};
use crate::domain::{detect_paragraphs, normalize_with_offsets, text::count_words};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Which chunker produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChunkingMethod {
    Adaptive,
    DocumentFallback,
    Basic,
}

impl fmt::Display for ChunkingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChunkingMethod::Adaptive => "adaptive",
            ChunkingMethod::DocumentFallback => "document-fallback",
            ChunkingMethod::Basic => "basic",
        })
    }
}

/// Chunks plus the method that produced them
#[derive(Debug, Clone, Serialize)]
pub struct ChunkingOutcome {
    pub method: ChunkingMethod,
    pub chunks: Vec<Chunk>,
}

/// Tries the adaptive chunker, then the document chunker, then basic chunking
///
/// The adaptive chunker is skipped for text without detectable structure:
/// no sentence terminator and a single paragraph longer than the ceiling.
/// Every method runs on the normalized text and reports character offsets
/// into the original text, whichever method wins.
pub struct ResilientChunker {
    adaptive: AdaptiveChunker,
    document: DocumentChunker,
}

impl ResilientChunker {
    pub fn new(config: ChunkingConfiguration) -> Self {
        Self::from_adaptive(AdaptiveChunker::new(config))
    }

    /// Wrap an existing adaptive chunker; the fallbacks reuse its size limits
    pub fn from_adaptive(adaptive: AdaptiveChunker) -> Self {
        let config = adaptive.config();
        let document = DocumentChunker::new(config.max_chunk_size, config.overlap_tokens);
        Self { adaptive, document }
    }

    pub fn adaptive(&self) -> &AdaptiveChunker {
        &self.adaptive
    }

    pub fn chunk(&self, original: &str) -> ChunkingOutcome {
        let normalized = normalize_with_offsets(original);
        let text = normalized.as_str();

        if self.has_detectable_structure(text) {
            let chunks = self.adaptive.chunk_document(original);
            if !chunks.is_empty() || text.is_empty() {
                return ChunkingOutcome {
                    method: ChunkingMethod::Adaptive,
                    chunks,
                };
            }
            warn!("adaptive chunker produced no chunks, falling back");
        } else {
            debug!(
                words = count_words(text),
                "no detectable structure, skipping adaptive chunker"
            );
        }

        let mut chunks = self.document.chunk(text);
        if !chunks.is_empty() {
            restore_offsets(&normalized, &mut chunks);
            return ChunkingOutcome {
                method: ChunkingMethod::DocumentFallback,
                chunks,
            };
        }

        warn!("document chunker produced no chunks, using basic chunking");
        let mut chunks = basic_chunking(text, self.adaptive.config().max_chunk_size);
        restore_offsets(&normalized, &mut chunks);
        ChunkingOutcome {
            method: ChunkingMethod::Basic,
            chunks,
        }
    }

    fn has_detectable_structure(&self, text: &str) -> bool {
        text.contains(['.', '!', '?'])
            || detect_paragraphs(text).len() > 1
            || count_words(text) <= self.adaptive.config().ceiling()
    }
}
