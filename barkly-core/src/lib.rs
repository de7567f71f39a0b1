//! Structure-aware document chunking for research text
//!
//! This crate splits long documents into chunks sized for embedding and AI
//! analysis. A document passes through four stages:
//!
//! 1. **Normalization**: whitespace and text-extraction artifacts are repaired
//! 2. **Structure analysis**: headers, paragraphs, sentences, list items,
//!    quotes and fenced code blocks are located
//! 3. **Strategy**: the semantic, structural, sliding or hybrid strategy cuts
//!    the text into raw segments
//! 4. **Post-processing**: undersized segments are merged, neighbouring
//!    context is added as overlap, and metadata and relatedness are computed
//!
//! # Architecture
//!
//! - **Domain layer**: normalization, structure detection, word lists
//! - **Application layer**: strategies and post-processing
//! - **API layer**: configuration, presets, the [`AdaptiveChunker`] facade
//! - **Fallback**: fixed-size chunkers and the [`ResilientChunker`]
//!
//! # Example
//!
//! ```rust
//! use barkly_core::{AdaptiveChunker, ChunkingConfiguration, Strategy};
//!
//! let config = ChunkingConfiguration::builder()
//!     .strategy(Strategy::Structural)
//!     .min_chunk_size(2)
//!     .max_chunk_size(40)
//!     .target_chunk_size(10)
//!     .overlap_tokens(0)
//!     .build()
//!     .unwrap();
//! let chunker = AdaptiveChunker::new(config);
//!
//! let text = "# Background\n\nThe study began in spring.\n\n# Findings\n\nElders shared stories.";
//! let chunks = chunker.chunk_document(text);
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[1].metadata.header_text.as_deref(), Some("Findings"));
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod fallback;

pub use api::{
    AdaptiveChunker, Chunk, ChunkMetadata, ChunkingConfiguration, ChunkingConfigurationBuilder,
    ContentType, Heuristics, Preset, Strategy,
};
pub use domain::{
    normalize, normalize_with_offsets, DocumentStructure, Lexicon, NormalizedText,
    StructureAnalyzer,
};
pub use error::{Error, Result};
pub use fallback::{
    basic_chunking, ChunkingMethod, ChunkingOutcome, DocumentChunker, ResilientChunker,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_chunker_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdaptiveChunker>();
        assert_send_sync::<ResilientChunker>();
    }

    #[test]
    fn test_root_exports() {
        let chunker = AdaptiveChunker::new(ChunkingConfiguration::for_conversational_data());
        let chunks = chunker.chunk_document("One short sentence here.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(normalize("aB"), "a B");
    }
}
