//! Fallback chunkers
//!
//! Simpler chunkers for text the adaptive chunker handles poorly, and a
//! wrapper that picks between them.

mod document;
mod resilient;

pub use document::{basic_chunking, DocumentChunker};
pub use resilient::{ChunkingMethod, ChunkingOutcome, ResilientChunker};
