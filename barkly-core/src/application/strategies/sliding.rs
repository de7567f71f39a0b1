//! Fixed word windows, ignoring document structure

use super::traits::{ChunkingStrategy, Segment, StrategyContext};
use crate::domain::text::word_spans;

#[derive(Debug, Default, Clone, Copy)]
pub struct SlidingWindowStrategy;

impl SlidingWindowStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Window length in words
    pub fn window(ctx: &StrategyContext<'_>) -> usize {
        ctx.config.target_chunk_size.min(ctx.ceiling()).max(1)
    }

    /// Distance between window starts in words
    pub fn step(ctx: &StrategyContext<'_>) -> usize {
        let window = Self::window(ctx);
        let keep = 100 - usize::from(ctx.config.overlap_percentage.min(100));
        // split so that huge windows cannot overflow
        (window / 100 * keep + window % 100 * keep / 100).max(1)
    }
}

impl ChunkingStrategy for SlidingWindowStrategy {
    fn segment(&self, ctx: &StrategyContext<'_>) -> Vec<Segment> {
        let spans = word_spans(ctx.text);
        let total = spans.len();
        if total == 0 {
            return Vec::new();
        }

        let window = Self::window(ctx);
        let step = Self::step(ctx);
        let min = ctx.config.min_chunk_size;
        let to_segment = |from: usize, to: usize| Segment::new(spans[from].start, spans[to - 1].end);

        let mut out = Vec::new();
        let mut covered = 0;
        let mut start = 0;

        while start < total {
            let end = start.saturating_add(window).min(total);
            if end - start >= min {
                out.push(to_segment(start, end));
                covered = end;
            }
            if end == total {
                break;
            }
            start = start.saturating_add(step);
        }

        // the trailing words are always covered by one final window
        if covered < total {
            out.push(to_segment(total.saturating_sub(window), total));
        }

        out
    }

    fn name(&self) -> &'static str {
        "sliding"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChunkingConfiguration;
    use crate::domain::{DocumentStructure, Lexicon};

    fn run(text: &str, config: &ChunkingConfiguration) -> Vec<String> {
        let structure = DocumentStructure::default();
        let ctx = StrategyContext {
            text,
            structure: &structure,
            config,
            lexicon: Lexicon::english(),
        };
        SlidingWindowStrategy::new()
            .segment(&ctx)
            .iter()
            .map(|s| s.text(text).to_string())
            .collect()
    }

    fn config(min: usize, target: usize, percent: u8) -> ChunkingConfiguration {
        ChunkingConfiguration {
            min_chunk_size: min,
            max_chunk_size: 1000,
            target_chunk_size: target,
            overlap_tokens: 0,
            overlap_percentage: percent,
            ..ChunkingConfiguration::default()
        }
    }

    #[test]
    fn test_half_overlapping_windows() {
        let text = "a b c d e f";
        assert_eq!(
            run(text, &config(1, 4, 50)),
            vec!["a b c d", "c d e f"]
        );
    }

    #[test]
    fn test_step_never_zero() {
        let text = "a b c";
        let chunks = run(text, &config(1, 1, 90));
        assert_eq!(chunks, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_short_tail_replaced_by_final_window() {
        // windows at 0 and 3; the window at 6 has a single word
        let text = "a b c d e f g";
        let chunks = run(text, &config(2, 3, 0));
        assert_eq!(chunks, vec!["a b c", "d e f", "e f g"]);
    }

    #[test]
    fn test_text_shorter_than_minimum() {
        let chunks = run("just three words", &config(10, 20, 10));
        assert_eq!(chunks, vec!["just three words"]);
    }

    #[test]
    fn test_step_of_huge_window() {
        let config = ChunkingConfiguration {
            min_chunk_size: 1,
            max_chunk_size: usize::MAX,
            target_chunk_size: usize::MAX,
            overlap_tokens: 0,
            overlap_percentage: 30,
            ..ChunkingConfiguration::default()
        };
        let structure = DocumentStructure::default();
        let ctx = StrategyContext {
            text: "",
            structure: &structure,
            config: &config,
            lexicon: Lexicon::english(),
        };
        assert_eq!(SlidingWindowStrategy::window(&ctx), usize::MAX);
        assert_eq!(
            SlidingWindowStrategy::step(&ctx),
            usize::MAX / 100 * 70 + usize::MAX % 100 * 70 / 100
        );

        assert_eq!(run("a b c", &config), vec!["a b c"]);
    }

    #[test]
    fn test_empty() {
        assert!(run("", &config(1, 3, 10)).is_empty());
    }
}
