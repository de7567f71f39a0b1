//! Turning raw segments into finished chunks
//!
//! Order matters: undersized segments are merged first so that no overlap
//! text is duplicated, then chunks are padded, described, numbered and
//! finally linked by relatedness.

mod merge;
mod metadata;
mod overlap;
mod relatedness;

pub use merge::merge_undersized;
pub use metadata::{semantic_density, MetadataEnricher};
pub use overlap::apply_overlap;
pub use relatedness::{jaccard, keyword_set, related_indices};

use crate::api::{Chunk, ChunkingConfiguration};
use crate::application::strategies::Segment;
use crate::domain::{text::char_offsets, DocumentStructure, Lexicon};
use tracing::trace;

/// Finishes the raw segments of one document
pub struct PostProcessor<'a> {
    text: &'a str,
    structure: &'a DocumentStructure,
    config: &'a ChunkingConfiguration,
    lexicon: &'a Lexicon,
}

impl<'a> PostProcessor<'a> {
    pub fn new(
        text: &'a str,
        structure: &'a DocumentStructure,
        config: &'a ChunkingConfiguration,
        lexicon: &'a Lexicon,
    ) -> Self {
        Self {
            text,
            structure,
            config,
            lexicon,
        }
    }

    pub fn finalize(&self, segments: Vec<Segment>) -> Vec<Chunk> {
        let raw_count = segments.len();
        let segments = merge_undersized(
            self.text,
            segments,
            self.config.min_chunk_size,
            self.config.ceiling(),
        );
        trace!(before = raw_count, after = segments.len(), "merged undersized segments");

        let cores: Vec<&str> = segments.iter().map(|s| s.text(self.text)).collect();
        let padded = apply_overlap(&cores, self.config.overlap_tokens);

        let bounds: Vec<usize> = segments.iter().flat_map(|s| [s.start, s.end]).collect();
        let chars = char_offsets(self.text, &bounds);

        let heuristics = &self.config.heuristics;
        let enricher = MetadataEnricher::new(self.text, self.structure, self.lexicon, heuristics);
        let total = segments.len();

        let mut chunks: Vec<Chunk> = segments
            .iter()
            .zip(padded)
            .enumerate()
            .map(|(i, (segment, text))| {
                let span = (chars[2 * i], chars[2 * i + 1]);
                let mut metadata = enricher.describe(*segment, &text, span);
                metadata.chunk_number = i + 1;
                metadata.total_chunks = total;
                Chunk {
                    text,
                    metadata,
                    related_chunks: Vec::new(),
                }
            })
            .collect();

        let keywords: Vec<_> = cores
            .iter()
            .map(|core| keyword_set(core, self.lexicon, heuristics.min_keyword_chars))
            .collect();
        let related = related_indices(&keywords, heuristics.relatedness_threshold);
        for (chunk, related) in chunks.iter_mut().zip(related) {
            chunk.related_chunks = related;
        }

        chunks
    }
}
