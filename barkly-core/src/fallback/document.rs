//! Fixed-size chunkers that need no structure analysis

use crate::api::{Chunk, ChunkMetadata, ContentType, Heuristics};
use crate::application::postprocess::semantic_density;
use crate::application::strategies::packing::{pack_sentences, word_windows, Buffer};
use crate::application::Segment;
use crate::domain::text::{char_offsets, count_words, word_spans};
use crate::domain::{detect_paragraphs, detect_sentences};

/// Sentence-packing chunker with word overlap and page annotation
///
/// Works directly on the text it is given, without normalization, so its
/// offsets refer to that text. Each chunk after the first starts with the
/// last `overlap_words` words of its predecessor; the overlap counts
/// toward `max_words`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentChunker {
    max_words: usize,
    overlap_words: usize,
}

impl DocumentChunker {
    /// `overlap_words` is limited to half of `max_words`
    pub fn new(max_words: usize, overlap_words: usize) -> Self {
        let max_words = max_words.max(1);
        Self {
            max_words,
            overlap_words: overlap_words.min(max_words / 2),
        }
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn overlap_words(&self) -> usize {
        self.overlap_words
    }

    /// Chunk `text` without page information
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let segments = self.segments(text);
        build_chunks(text, &segments, None)
    }

    /// Chunk `text` and record the page each chunk starts on
    ///
    /// `page_breaks` holds ascending character offsets where a new page
    /// begins. A chunk starting at or after `k` breaks is on page `k + 1`.
    pub fn chunk_with_pages(&self, text: &str, page_breaks: &[usize]) -> Vec<Chunk> {
        let segments = self.segments(text);
        build_chunks(text, &segments, Some(page_breaks))
    }

    fn segments(&self, text: &str) -> Vec<Segment> {
        let budget = self.max_words - self.overlap_words;
        let cores = pack_sentences(text, &detect_sentences(text), budget);

        cores
            .iter()
            .enumerate()
            .map(|(i, core)| {
                let Some(previous) = i.checked_sub(1).map(|p| cores[p]) else {
                    return *core;
                };
                let spans = word_spans(previous.text(text));
                // keep at least one word of the previous chunk its own
                let carry = self.overlap_words.min(spans.len().saturating_sub(1));
                if carry == 0 {
                    return *core;
                }
                let carry_start = previous.start + spans[spans.len() - carry].start;
                Segment::new(carry_start, core.end)
            })
            .collect()
    }
}

/// Paragraph-then-word chunking without overlap
///
/// Paragraphs are packed up to `max_words`; a longer paragraph is cut into
/// word windows.
pub fn basic_chunking(text: &str, max_words: usize) -> Vec<Chunk> {
    let max_words = max_words.max(1);
    let mut segments = Vec::new();
    let mut buffer = Buffer::default();

    for paragraph in detect_paragraphs(text) {
        let words = count_words(&paragraph.text);
        let span = Segment::new(paragraph.position, paragraph.end_position);

        if words > max_words {
            buffer.flush_into(&mut segments);
            segments.extend(word_windows(text, span.range(), max_words));
            continue;
        }

        if buffer.words() + words > max_words {
            buffer.flush_into(&mut segments);
        }
        buffer.push(span, words);
    }
    buffer.flush_into(&mut segments);

    build_chunks(text, &segments, None)
}

fn build_chunks(text: &str, segments: &[Segment], page_breaks: Option<&[usize]>) -> Vec<Chunk> {
    let bounds: Vec<usize> = segments.iter().flat_map(|s| [s.start, s.end]).collect();
    let chars = char_offsets(text, &bounds);
    let total = segments.len();
    let base_importance = Heuristics::default().base_importance;

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let own = segment.text(text);
            let start_char = chars[2 * i];
            Chunk {
                text: own.to_string(),
                metadata: ChunkMetadata {
                    chunk_number: i + 1,
                    total_chunks: total,
                    start_char,
                    end_char: chars[2 * i + 1],
                    word_count: count_words(own),
                    sentence_count: detect_sentences(own).len(),
                    has_header: false,
                    header_text: None,
                    content_type: ContentType::Text,
                    semantic_density: semantic_density(own),
                    contextual_importance: base_importance,
                    page_number: page_breaks
                        .map(|breaks| 1 + breaks.partition_point(|&b| b <= start_char)),
                },
                related_chunks: Vec::new(),
            }
        })
        .collect()
}
