//! Header sections with semantic re-splitting of oversized sections

use super::semantic::SemanticStrategy;
use super::structural::StructuralStrategy;
use super::traits::{ChunkingStrategy, Segment, StrategyContext};
use tracing::trace;

/// Documents with more headers than this are chunked by section
const MIN_SECTIONED_HEADERS: usize = 2;

#[derive(Debug, Default, Clone, Copy)]
pub struct HybridStrategy {
    structural: StructuralStrategy,
    semantic: SemanticStrategy,
}

impl HybridStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the semantic strategy on one section with its own structure pass
    fn resplit(&self, ctx: &StrategyContext<'_>, section: Segment) -> Vec<Segment> {
        let text = section.text(ctx.text);
        let structure = ctx.config.analyzer().analyze(text);
        let sub_ctx = StrategyContext {
            text,
            structure: &structure,
            ..*ctx
        };

        let pieces = self.semantic.segment(&sub_ctx);
        trace!(
            section_start = section.start,
            pieces = pieces.len(),
            "re-split oversized section"
        );
        pieces
            .into_iter()
            .map(|piece| piece.shifted(section.start))
            .collect()
    }
}

impl ChunkingStrategy for HybridStrategy {
    fn segment(&self, ctx: &StrategyContext<'_>) -> Vec<Segment> {
        if !ctx.config.preserve_sections || ctx.structure.headers.len() <= MIN_SECTIONED_HEADERS {
            return self.semantic.segment(ctx);
        }

        let ceiling = ctx.ceiling();
        self.structural
            .sections(ctx)
            .into_iter()
            .flat_map(|section| {
                if section.word_count(ctx.text) <= ceiling {
                    vec![section]
                } else {
                    self.resplit(ctx, section)
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "hybrid"
    }
}
