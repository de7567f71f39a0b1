//! Per-chunk metadata
//!
//! Counts describe the final padded text. Everything else describes the
//! chunk's own content, so padding borrowed from a neighbour never changes
//! how a chunk is classified or scored.

use crate::api::{ChunkMetadata, ContentType, Heuristics};
use crate::application::strategies::Segment;
use crate::domain::{detect_sentences, text::count_words, DocumentStructure, Header, Lexicon};
use std::collections::HashSet;

/// Computes [`ChunkMetadata`] against one document's structure
pub struct MetadataEnricher<'a> {
    text: &'a str,
    structure: &'a DocumentStructure,
    lexicon: &'a Lexicon,
    heuristics: &'a Heuristics,
}

impl<'a> MetadataEnricher<'a> {
    pub fn new(
        text: &'a str,
        structure: &'a DocumentStructure,
        lexicon: &'a Lexicon,
        heuristics: &'a Heuristics,
    ) -> Self {
        Self {
            text,
            structure,
            lexicon,
            heuristics,
        }
    }

    /// Metadata for one chunk; numbering is filled in by the caller
    pub fn describe(
        &self,
        segment: Segment,
        final_text: &str,
        chars: (usize, usize),
    ) -> ChunkMetadata {
        let core = segment.text(self.text);
        let header = self.header_in(core);
        let has_header = header.is_some();

        ChunkMetadata {
            chunk_number: 0,
            total_chunks: 0,
            start_char: chars.0,
            end_char: chars.1,
            word_count: count_words(final_text),
            sentence_count: detect_sentences(final_text).len(),
            has_header,
            header_text: header.map(|h| h.text.clone()),
            content_type: self.content_type(segment),
            semantic_density: semantic_density(core),
            contextual_importance: self.contextual_importance(core, has_header),
            page_number: None,
        }
    }

    /// First known header whose text appears near the start of `core`
    pub fn header_in(&self, core: &str) -> Option<&'a Header> {
        let window: String = core.chars().take(self.heuristics.header_window_chars).collect();
        self.structure
            .headers
            .iter()
            .find(|header| !header.text.is_empty() && window.contains(header.text.as_str()))
    }

    pub fn content_type(&self, segment: Segment) -> ContentType {
        let core = segment.text(self.text);
        let lines = core.lines().filter(|line| !line.trim().is_empty()).count();
        let list_items = self.structure.list_items_in(segment.start, segment.end);
        let quotes = self.structure.quotes_in(segment.start, segment.end);

        if lines > 0 && list_items * 2 > lines {
            ContentType::List
        } else if quotes > 2 {
            ContentType::Quote
        } else if core.contains("```")
            || core.contains("~~~")
            || self.structure.has_code_in(segment.start, segment.end)
            || core.lines().any(is_indented_code)
        {
            ContentType::Code
        } else if list_items > 0 || quotes > 0 {
            ContentType::Mixed
        } else {
            ContentType::Text
        }
    }

    pub fn contextual_importance(&self, core: &str, has_header: bool) -> f64 {
        let h = self.heuristics;
        let mut score = h.base_importance;

        if has_header {
            score += h.header_bonus;
        }

        let matches = self.lexicon.importance_matches(core) as f64;
        score += (h.keyword_bonus * matches).min(h.keyword_bonus_cap);

        if core.contains('?') {
            score += h.question_bonus;
        }

        score.clamp(0.0, 1.0)
    }
}

/// Unique lowercased words over total words, 0 for empty text
pub fn semantic_density(text: &str) -> f64 {
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    unique.len() as f64 / words.len() as f64
}

fn is_indented_code(line: &str) -> bool {
    line.starts_with("    ") && !line.trim().is_empty()
}
