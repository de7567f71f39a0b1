//! Properties every chunking run must satisfy, whatever the input

mod common;

use barkly_core::domain::text::word_spans;
use barkly_core::{
    normalize, AdaptiveChunker, ChunkingConfiguration, DocumentChunker,
    Strategy as ChunkStrategy,
};
use common::VOCABULARY;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOCABULARY.to_vec())
}

fn sentence() -> impl Strategy<Value = String> {
    (prop::collection::vec(word(), 1..15), prop::sample::select(vec![".", "!", "?"])).prop_map(
        |(words, terminator)| {
            let mut sentence = words.join(" ");
            sentence[..1].make_ascii_uppercase();
            sentence.push_str(terminator);
            sentence
        },
    )
}

fn block() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::collection::vec(sentence(), 1..6).prop_map(|s| s.join(" ")),
        1 => prop::collection::vec(word(), 1..4).prop_map(|w| format!("# {}", w.join(" "))),
        1 => prop::collection::vec(word(), 1..5)
            .prop_map(|w| w.iter().map(|x| format!("- {x}")).collect::<Vec<_>>().join("\n")),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(block(), 0..20).prop_map(|blocks| blocks.join("\n\n"))
}

/// A document paired with a copy carrying CRLF endings, tabs, space runs,
/// extra blank lines and padding at both ends
fn untidy_document() -> impl Strategy<Value = (String, String)> {
    (document(), prop::collection::vec(0u8..4, 1..64), any::<bool>()).prop_map(
        |(tidy, picks, blank_lines)| {
            let text = if blank_lines {
                tidy.replace("\n\n", "\n\n\n\n")
            } else {
                tidy.clone()
            };
            let mut untidy = String::from("  ");
            for (i, ch) in text.chars().enumerate() {
                match (ch, picks[i % picks.len()]) {
                    (' ', 1) => untidy.push_str("   "),
                    (' ', 2) => untidy.push('\t'),
                    ('\n', 0 | 1) => untidy.push_str("\r\n"),
                    _ => untidy.push(ch),
                }
            }
            untidy.push_str(" \r\n");
            (tidy, untidy)
        },
    )
}

fn chunk_strategy() -> impl Strategy<Value = ChunkStrategy> {
    prop::sample::select(ChunkStrategy::ALL.to_vec())
}

fn config() -> impl Strategy<Value = ChunkingConfiguration> {
    (
        chunk_strategy(),
        1usize..40,
        0usize..120,
        0usize..20,
        0u8..80,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(strategy, min, extra, overlap, percent, sentences, paragraphs)| {
                ChunkingConfiguration {
                    min_chunk_size: min,
                    max_chunk_size: min + extra,
                    target_chunk_size: min + extra / 2,
                    overlap_tokens: overlap,
                    overlap_percentage: percent,
                    preserve_sentences: sentences,
                    preserve_paragraphs: paragraphs,
                    strategy,
                    ..ChunkingConfiguration::default()
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_chunking_is_deterministic(text in document(), config in config()) {
        let chunker = AdaptiveChunker::new(config);
        prop_assert_eq!(chunker.chunk_document(&text), chunker.chunk_document(&text));
    }

    #[test]
    fn prop_chunks_are_numbered_and_ordered(text in document(), config in config()) {
        let chunks = AdaptiveChunker::new(config).chunk_document(&text);
        let total_chars = text.chars().count();

        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.metadata.chunk_number, i + 1);
            prop_assert_eq!(chunk.metadata.total_chunks, chunks.len());
            prop_assert!(chunk.metadata.start_char < chunk.metadata.end_char);
            prop_assert!(chunk.metadata.end_char <= total_chars);
            prop_assert!(!chunk.text.trim().is_empty());
        }
        for pair in chunks.windows(2) {
            prop_assert!(pair[0].metadata.start_char < pair[1].metadata.start_char);
        }
    }

    #[test]
    fn prop_chunks_respect_max_size(text in document(), config in config()) {
        let chunker = AdaptiveChunker::new(config);
        let max = chunker.config().max_chunk_size;
        for chunk in chunker.chunk_document(&text) {
            prop_assert!(chunk.metadata.word_count <= max);
        }
    }

    #[test]
    fn prop_every_word_is_covered(text in document(), config in config()) {
        let normalized = normalize(&text);
        let chunks = AdaptiveChunker::new(config).chunk_document(&text);

        // generated text is ASCII, so character offsets are byte offsets
        for span in word_spans(&normalized) {
            prop_assert!(
                chunks.iter().any(|c| c.metadata.start_char <= span.start && span.end <= c.metadata.end_char),
                "word at {} is not covered",
                span.start
            );
        }
    }

    #[test]
    fn prop_offsets_index_the_untidy_original((tidy, text) in untidy_document(), config in config()) {
        let chunker = AdaptiveChunker::new(config);
        let chunks = chunker.chunk_document(&text);
        let original: Vec<char> = text.chars().collect();

        for chunk in &chunks {
            prop_assert!(chunk.metadata.end_char <= original.len());
            let own: String = original[chunk.span()].iter().collect();
            let own = normalize(&own);
            prop_assert!(chunk.text.contains(&own), "{:?} not in {:?}", own, chunk.text);
        }
        for pair in chunks.windows(2) {
            prop_assert!(pair[0].metadata.start_char < pair[1].metadata.start_char);
        }

        // still ASCII, so character offsets are byte offsets
        for span in word_spans(&text) {
            prop_assert!(
                chunks.iter().any(|c| c.metadata.start_char <= span.start && span.end <= c.metadata.end_char),
                "word at {} is not covered",
                span.start
            );
        }

        let expected: Vec<String> = chunker
            .chunk_document(&tidy)
            .into_iter()
            .map(|c| c.text)
            .collect();
        let untidy: Vec<String> = chunks.into_iter().map(|c| c.text).collect();
        prop_assert_eq!(untidy, expected);
    }

    #[test]
    fn prop_chunks_respect_min_size(text in document(), config in config()) {
        // without overlap a chunk's word count is its own content
        let chunker = AdaptiveChunker::new(ChunkingConfiguration {
            overlap_tokens: 0,
            ..config
        });
        let min = chunker.config().min_chunk_size;
        let ceiling = chunker.config().ceiling();
        let chunks = chunker.chunk_document(&text);

        // the last chunk may stay short, and so may one whose merge would pass the ceiling
        for pair in chunks.windows(2) {
            let (own, next) = (pair[0].metadata.word_count, pair[1].metadata.word_count);
            prop_assert!(
                own >= min || own + next > ceiling,
                "chunk of {} words below minimum {} could absorb {} more (ceiling {})",
                own,
                min,
                next,
                ceiling
            );
        }
    }

    #[test]
    fn prop_relatedness_is_symmetric(text in document(), config in config()) {
        let chunks = AdaptiveChunker::new(config).chunk_document(&text);
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert!(!chunk.is_related_to(i));
            for &j in &chunk.related_chunks {
                prop_assert!(j < chunks.len());
                prop_assert!(chunks[j].is_related_to(i));
            }
        }
    }

    #[test]
    fn prop_scores_stay_in_unit_range(text in document(), config in config()) {
        for chunk in AdaptiveChunker::new(config).chunk_document(&text) {
            prop_assert!((0.0..=1.0).contains(&chunk.metadata.semantic_density));
            prop_assert!((0.0..=1.0).contains(&chunk.metadata.contextual_importance));
        }
    }

    #[test]
    fn prop_structure_analysis_is_stable(text in document()) {
        let chunker = AdaptiveChunker::default();
        let normalized = normalize(&text);
        prop_assert_eq!(chunker.analyze(&text), chunker.analyze(&normalized));
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in "\\PC{0,400}", config in config()) {
        let chunks = AdaptiveChunker::new(config).chunk_document(&text);
        if text.trim().is_empty() {
            prop_assert!(chunks.is_empty());
        }
    }

    #[test]
    fn prop_document_chunker_bounds(text in document(), max in 1usize..60, overlap in 0usize..20) {
        let chunker = DocumentChunker::new(max, overlap);
        let chunks = chunker.chunk(&text);
        for chunk in &chunks {
            prop_assert!(chunk.metadata.word_count <= chunker.max_words());
        }
        for pair in chunks.windows(2) {
            prop_assert!(pair[0].metadata.start_char < pair[1].metadata.start_char);
        }
    }
}
