//! Strategy trait and the values passed between strategies and the post-processor

use crate::api::ChunkingConfiguration;
use crate::domain::{text::count_words, DocumentStructure, Lexicon};
use std::ops::Range;

/// A raw chunk: a byte range of the normalized text
///
/// Strategies never copy text; the post-processor slices it out of the
/// normalized document, which keeps every offset exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "segment start {start} after end {end}");
        Self { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The slice of `text` this segment covers
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }

    pub fn word_count(&self, text: &str) -> usize {
        count_words(self.text(text))
    }

    /// The smallest segment covering both
    pub fn union(&self, other: &Segment) -> Segment {
        Segment::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Move a segment found in a substring back into document coordinates
    pub fn shifted(&self, offset: usize) -> Segment {
        Segment::new(self.start + offset, self.end + offset)
    }
}

impl From<Range<usize>> for Segment {
    fn from(range: Range<usize>) -> Self {
        Segment::new(range.start, range.end)
    }
}

/// Everything a strategy may read
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    /// Normalized text the segments index into
    pub text: &'a str,
    pub structure: &'a DocumentStructure,
    /// Sanitized configuration
    pub config: &'a ChunkingConfiguration,
    pub lexicon: &'a Lexicon,
}

impl StrategyContext<'_> {
    /// Content word budget per segment
    pub fn ceiling(&self) -> usize {
        self.config.ceiling()
    }
}

/// A way of cutting a document into ordered raw segments
///
/// Implementations must return non-empty, trimmed segments in document
/// order with strictly increasing starts. Segments may overlap. Each
/// segment holds at most [`StrategyContext::ceiling`] words.
pub trait ChunkingStrategy: Send + Sync {
    fn segment(&self, ctx: &StrategyContext<'_>) -> Vec<Segment>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_text_and_words() {
        let text = "alpha beta gamma";
        let segment = Segment::new(6, 16);
        assert_eq!(segment.text(text), "beta gamma");
        assert_eq!(segment.word_count(text), 2);
        assert!(!segment.is_empty());
    }

    #[test]
    fn test_union_and_shift() {
        let a = Segment::new(10, 20);
        let b = Segment::new(15, 30);
        assert_eq!(a.union(&b), Segment::new(10, 30));
        assert_eq!(a.shifted(5), Segment::new(15, 25));
        assert_eq!(Segment::from(3..7), Segment::new(3, 7));
    }
}
