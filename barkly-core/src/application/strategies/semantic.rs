//! Sentence accumulation with topic-shift boundaries

use super::packing::{word_windows, Buffer};
use super::traits::{ChunkingStrategy, Segment, StrategyContext};
use crate::domain::Sentence;

/// Accumulates sentences until the ceiling, preferring to break where the
/// text signals a new topic
///
/// A chunk closed because the next sentence would not fit hands its
/// trailing sentences (at most `overlap_percentage` of its words) to the
/// next chunk. A chunk closed at a topic shift hands nothing over.
#[derive(Debug, Default, Clone, Copy)]
pub struct SemanticStrategy;

impl SemanticStrategy {
    pub fn new() -> Self {
        Self
    }

    fn is_boundary(ctx: &StrategyContext<'_>, sentence: &Sentence) -> bool {
        if ctx.lexicon.starts_with_transition(&sentence.text) {
            return true;
        }

        // A header opening inside this sentence starts a new topic too
        let headers = &ctx.structure.headers;
        let next = headers.partition_point(|h| h.position < sentence.position);
        headers
            .get(next)
            .is_some_and(|header| header.position < sentence.end_position)
    }

    /// Trailing sentences of the closed buffer whose words fit the carry budget
    fn overlap_tail<'s>(
        buffered: &[&'s Sentence],
        buffer_words: usize,
        percent: u8,
    ) -> Vec<&'s Sentence> {
        let budget = buffer_words * usize::from(percent);
        let mut start = buffered.len();
        let mut carried = 0;

        for (i, sentence) in buffered.iter().enumerate().rev() {
            let words = sentence.word_count();
            if (carried + words) * 100 > budget {
                break;
            }
            carried += words;
            start = i;
        }

        buffered[start..].to_vec()
    }
}

impl ChunkingStrategy for SemanticStrategy {
    fn segment(&self, ctx: &StrategyContext<'_>) -> Vec<Segment> {
        let ceiling = ctx.ceiling();
        if !ctx.config.preserve_sentences {
            return word_windows(ctx.text, 0..ctx.text.len(), ceiling);
        }

        let min = ctx.config.min_chunk_size;
        let mut out = Vec::new();
        let mut buffer = Buffer::default();
        let mut buffered: Vec<&Sentence> = Vec::new();

        for sentence in &ctx.structure.sentences {
            let words = sentence.word_count();

            if words > ceiling {
                buffer.flush_into(&mut out);
                buffered.clear();
                out.extend(word_windows(
                    ctx.text,
                    sentence.position..sentence.end_position,
                    ceiling,
                ));
                continue;
            }

            if !buffer.is_empty() {
                if buffer.words() + words > ceiling {
                    let percent = ctx.config.overlap_percentage;
                    let tail = Self::overlap_tail(&buffered, buffer.words(), percent);
                    let tail_words: usize = tail.iter().map(|s| s.word_count()).sum();

                    buffer.flush_into(&mut out);
                    buffered.clear();

                    if tail_words + words <= ceiling {
                        for kept in tail {
                            buffer.push(
                                Segment::new(kept.position, kept.end_position),
                                kept.word_count(),
                            );
                            buffered.push(kept);
                        }
                    }
                } else if buffer.words() >= min && Self::is_boundary(ctx, sentence) {
                    buffer.flush_into(&mut out);
                    buffered.clear();
                }
            }

            buffer.push(Segment::new(sentence.position, sentence.end_position), words);
            buffered.push(sentence);
        }

        buffer.flush_into(&mut out);
        out
    }

    fn name(&self) -> &'static str {
        "semantic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChunkingConfiguration;
    use crate::domain::{Lexicon, StructureAnalyzer};

    fn run(text: &str, config: &ChunkingConfiguration) -> Vec<String> {
        let structure = StructureAnalyzer::new().analyze(text);
        let ctx = StrategyContext {
            text,
            structure: &structure,
            config,
            lexicon: Lexicon::english(),
        };
        SemanticStrategy::new()
            .segment(&ctx)
            .iter()
            .map(|s| s.text(text).to_string())
            .collect()
    }

    fn config(min: usize, max: usize, percent: u8) -> ChunkingConfiguration {
        ChunkingConfiguration {
            min_chunk_size: min,
            max_chunk_size: max,
            target_chunk_size: min,
            overlap_tokens: 0,
            overlap_percentage: percent,
            ..ChunkingConfiguration::default()
        }
    }

    #[test]
    fn test_breaks_at_transition_once_minimum_reached() {
        let text = "Alpha beta gamma. Delta epsilon zeta. However, things changed later.";
        let chunks = run(text, &config(5, 100, 10));
        assert_eq!(
            chunks,
            vec![
                "Alpha beta gamma. Delta epsilon zeta.",
                "However, things changed later."
            ]
        );
    }

    #[test]
    fn test_transition_ignored_below_minimum() {
        let text = "Alpha beta gamma. However, things changed later.";
        let chunks = run(text, &config(10, 100, 10));
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_overflow_carries_tail() {
        // four sentences of three words, ceiling of nine, 40% carry budget
        let text = "Red green blue. Cat dog bird. Oak elm ash. Sun moon star.";
        let chunks = run(text, &config(1, 9, 40));
        assert_eq!(
            chunks,
            vec![
                "Red green blue. Cat dog bird. Oak elm ash.",
                "Oak elm ash. Sun moon star."
            ]
        );
    }

    #[test]
    fn test_overflow_without_budget_carries_nothing() {
        let text = "Red green blue. Cat dog bird. Oak elm ash. Sun moon star.";
        let chunks = run(text, &config(1, 9, 10));
        assert_eq!(
            chunks,
            vec!["Red green blue. Cat dog bird. Oak elm ash.", "Sun moon star."]
        );
    }

    #[test]
    fn test_header_starts_new_chunk() {
        let text = "Some opening words here.\n\n## Methods\n\nWe gathered stories.";
        let chunks = run(text, &config(2, 100, 10));
        assert_eq!(chunks.len(), 2);
        assert!(chunks[1].starts_with("## Methods"));
    }

    #[test]
    fn test_long_sentence_cut_by_words() {
        let text = "one two three four five six seven";
        let chunks = run(text, &config(1, 3, 10));
        assert_eq!(chunks, vec!["one two three", "four five six", "seven"]);
    }

    #[test]
    fn test_word_windows_when_sentences_not_preserved() {
        let text = "Alpha beta. Gamma delta epsilon.";
        let config = ChunkingConfiguration {
            preserve_sentences: false,
            ..config(1, 2, 10)
        };
        assert_eq!(run(text, &config), vec!["Alpha beta.", "Gamma delta", "epsilon."]);
    }
}
