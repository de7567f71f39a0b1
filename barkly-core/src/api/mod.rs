//! Public API for document chunking
//!
//! ```
//! use barkly_core::api::{AdaptiveChunker, ChunkingConfiguration, Strategy};
//!
//! let config = ChunkingConfiguration::builder()
//!     .strategy(Strategy::Semantic)
//!     .min_chunk_size(5)
//!     .max_chunk_size(60)
//!     .target_chunk_size(20)
//!     .overlap_tokens(5)
//!     .build()?;
//!
//! let chunker = AdaptiveChunker::new(config);
//! let chunks = chunker.chunk_document("The river rose. However, the village stayed dry.");
//! assert!(!chunks.is_empty());
//! # Ok::<(), barkly_core::Error>(())
//! ```

mod chunker;
mod config;
mod output;


pub use crate::error::{Error, Result};
pub use chunker::AdaptiveChunker;
pub(crate) use chunker::restore_offsets;
pub use config::{
    defaults, ChunkingConfiguration, ChunkingConfigurationBuilder, Heuristics, Preset, Strategy,
};
pub use output::{Chunk, ChunkMetadata, ContentType};
