//! The adaptive chunker facade

use crate::api::{Chunk, ChunkingConfiguration, Preset};
use crate::application::{PostProcessor, StrategyContext, StrategySelector};
use crate::domain::{
    normalize, normalize_with_offsets, DocumentStructure, Lexicon, NormalizedText,
};
use tracing::debug;

/// Structure-aware document chunker
///
/// Holds a sanitized configuration and a lexicon, both read-only after
/// construction, so one chunker can serve many threads at once.
///
/// # Example
///
/// ```
/// use barkly_core::{AdaptiveChunker, ChunkingConfiguration};
///
/// let chunker = AdaptiveChunker::new(ChunkingConfiguration::default());
/// let chunks = chunker.chunk_document("Short text.");
///
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].metadata.total_chunks, 1);
/// ```
pub struct AdaptiveChunker {
    config: ChunkingConfiguration,
    lexicon: Lexicon,
    selector: StrategySelector,
}

impl AdaptiveChunker {
    /// Create a chunker; inconsistent settings are clamped into shape
    pub fn new(config: ChunkingConfiguration) -> Self {
        Self::with_lexicon(config, Lexicon::default())
    }

    /// Create a chunker with custom word lists
    pub fn with_lexicon(config: ChunkingConfiguration, lexicon: Lexicon) -> Self {
        let config = config.sanitized();
        debug!(
            strategy = %config.strategy,
            min = config.min_chunk_size,
            max = config.max_chunk_size,
            ceiling = config.ceiling(),
            lexicon = lexicon.name(),
            "created adaptive chunker"
        );
        Self {
            config,
            lexicon,
            selector: StrategySelector::new(),
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset.configuration())
    }

    pub fn for_academic_papers() -> Self {
        Self::from_preset(Preset::Academic)
    }

    pub fn for_conversational_data() -> Self {
        Self::from_preset(Preset::Conversational)
    }

    pub fn for_technical_documents() -> Self {
        Self::from_preset(Preset::Technical)
    }

    pub fn for_maximum_coverage() -> Self {
        Self::from_preset(Preset::MaximumCoverage)
    }

    /// The sanitized configuration in effect
    pub fn config(&self) -> &ChunkingConfiguration {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalize `text` and detect its structure
    pub fn analyze(&self, text: &str) -> DocumentStructure {
        self.config.analyzer().analyze(&normalize(text))
    }

    /// Split a document into enriched chunks
    ///
    /// Chunk text is normalized, but `start_char`/`end_char` are character
    /// offsets into `text` as passed in. Empty or whitespace-only input
    /// yields no chunks.
    pub fn chunk_document(&self, text: &str) -> Vec<Chunk> {
        let normalized = normalize_with_offsets(text);
        let text = normalized.as_str();
        if text.is_empty() {
            return Vec::new();
        }

        let structure = self.config.analyzer().analyze(&text);
        debug!(
            chars = text.len(),
            headers = structure.headers.len(),
            paragraphs = structure.paragraphs.len(),
            sentences = structure.sentences.len(),
            "analyzed document structure"
        );

        let ctx = StrategyContext {
            text,
            structure: &structure,
            config: &self.config,
            lexicon: &self.lexicon,
        };
        let segments = self.selector.route(&ctx);

        let mut chunks =
            PostProcessor::new(text, &structure, &self.config, &self.lexicon).finalize(segments);
        restore_offsets(&normalized, &mut chunks);
        debug!(
            strategy = %self.config.strategy,
            chunks = chunks.len(),
            "chunked document"
        );
        chunks
    }
}

/// Rewrite chunk spans from normalized to original character offsets
pub(crate) fn restore_offsets(normalized: &NormalizedText, chunks: &mut [Chunk]) {
    for chunk in chunks {
        let span = normalized.original_span(chunk.span());
        chunk.metadata.start_char = span.start;
        chunk.metadata.end_char = span.end;
    }
}

impl Default for AdaptiveChunker {
    fn default() -> Self {
        Self::new(ChunkingConfiguration::default())
    }
}
