//! Header sections, or paragraph accumulation for documents without headers

use super::packing::{pack_range, trimmed, Buffer};
use super::traits::{ChunkingStrategy, Segment, StrategyContext};
use crate::domain::text::count_words;

#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralStrategy;

impl StructuralStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Header-delimited sections
    ///
    /// Text before the first header becomes its own section when it is not
    /// blank. Each header's section runs to the next header or the end.
    pub fn sections(&self, ctx: &StrategyContext<'_>) -> Vec<Segment> {
        let text = ctx.text;
        let mut bounds: Vec<usize> = ctx.structure.headers.iter().map(|h| h.position).collect();
        if bounds.first() != Some(&0) {
            bounds.insert(0, 0);
        }
        bounds.push(text.len());

        bounds
            .windows(2)
            .filter_map(|pair| trimmed(text, pair[0], pair[1]))
            .collect()
    }

    fn by_sections(&self, ctx: &StrategyContext<'_>) -> Vec<Segment> {
        let ceiling = ctx.ceiling();
        self.sections(ctx)
            .into_iter()
            .flat_map(|section| {
                if section.word_count(ctx.text) <= ceiling {
                    vec![section]
                } else {
                    // the header line leads the section, so it lands in the first piece
                    pack_range(ctx, section.range())
                }
            })
            .collect()
    }

    fn by_paragraphs(&self, ctx: &StrategyContext<'_>) -> Vec<Segment> {
        let ceiling = ctx.ceiling();
        let target = ctx.config.target_chunk_size;
        let mut out = Vec::new();
        let mut buffer = Buffer::default();

        for paragraph in &ctx.structure.paragraphs {
            let words = count_words(&paragraph.text);
            let span = Segment::new(paragraph.position, paragraph.end_position);

            if words > ceiling {
                buffer.flush_into(&mut out);
                out.extend(pack_range(ctx, span.range()));
                continue;
            }

            if buffer.words() + words > ceiling {
                buffer.flush_into(&mut out);
            }
            buffer.push(span, words);

            if buffer.words() >= target {
                buffer.flush_into(&mut out);
            }
        }

        buffer.flush_into(&mut out);
        out
    }
}

impl ChunkingStrategy for StructuralStrategy {
    fn segment(&self, ctx: &StrategyContext<'_>) -> Vec<Segment> {
        if !ctx.structure.headers.is_empty() {
            self.by_sections(ctx)
        } else if ctx.config.preserve_paragraphs {
            self.by_paragraphs(ctx)
        } else {
            pack_range(ctx, 0..ctx.text.len())
        }
    }

    fn name(&self) -> &'static str {
        "structural"
    }
}
