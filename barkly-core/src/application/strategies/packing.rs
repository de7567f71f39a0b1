//! Greedy packing shared by the strategies
//!
//! When no natural boundary exists before the ceiling, text is cut by
//! words. A sentence longer than the ceiling therefore becomes several
//! word windows.

use super::traits::{Segment, StrategyContext};
use crate::domain::{detect_sentences, text, Sentence};
use std::ops::Range;

/// Trimmed segment for `start..end`, or `None` when it holds only whitespace
pub(crate) fn trimmed(text: &str, start: usize, end: usize) -> Option<Segment> {
    let range = text::trim_range(text, start..end);
    (!range.is_empty()).then(|| Segment::from(range))
}

/// Cut `range` into consecutive windows of at most `size` words
pub(crate) fn word_windows(text: &str, range: Range<usize>, size: usize) -> Vec<Segment> {
    let base = range.start;
    let spans = text::word_spans(&text[range]);

    spans
        .chunks(size.max(1))
        .filter_map(|window| {
            let first = window.first()?;
            let last = window.last()?;
            Some(Segment::new(base + first.start, base + last.end))
        })
        .collect()
}

/// Sentences of `text[range]` in document coordinates
pub(crate) fn sentences_in(text: &str, range: Range<usize>) -> Vec<Sentence> {
    let base = range.start;
    detect_sentences(&text[range])
        .into_iter()
        .map(|sentence| Sentence {
            position: sentence.position + base,
            end_position: sentence.end_position + base,
            ..sentence
        })
        .collect()
}

/// Running buffer of whole units (sentences or paragraphs)
#[derive(Debug, Default)]
pub(crate) struct Buffer {
    span: Option<Segment>,
    words: usize,
}

impl Buffer {
    pub(crate) fn words(&self) -> usize {
        self.words
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    pub(crate) fn push(&mut self, segment: Segment, words: usize) {
        self.span = Some(match self.span {
            Some(span) => span.union(&segment),
            None => segment,
        });
        self.words += words;
    }

    /// Close the buffer into `out` and leave it empty
    pub(crate) fn flush_into(&mut self, out: &mut Vec<Segment>) {
        if let Some(span) = self.span.take() {
            out.push(span);
        }
        self.words = 0;
    }
}

/// Greedily pack sentences up to `ceiling` words
pub(crate) fn pack_sentences(text: &str, sentences: &[Sentence], ceiling: usize) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut buffer = Buffer::default();

    for sentence in sentences {
        let words = sentence.word_count();
        let span = Segment::new(sentence.position, sentence.end_position);

        if words > ceiling {
            buffer.flush_into(&mut out);
            out.extend(word_windows(text, span.range(), ceiling));
            continue;
        }

        if buffer.words() + words > ceiling {
            buffer.flush_into(&mut out);
        }
        buffer.push(span, words);
    }

    buffer.flush_into(&mut out);
    out
}

/// Pack `range` by sentences, or by raw word windows when sentences need
/// not be preserved
pub(crate) fn pack_range(ctx: &StrategyContext<'_>, range: Range<usize>) -> Vec<Segment> {
    if ctx.config.preserve_sentences {
        let sentences = sentences_in(ctx.text, range);
        pack_sentences(ctx.text, &sentences, ctx.ceiling())
    } else {
        word_windows(ctx.text, range, ctx.ceiling())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(text: &'a str, segments: &[Segment]) -> Vec<&'a str> {
        segments.iter().map(|s| s.text(text)).collect()
    }

    #[test]
    fn test_trimmed() {
        let text = "  abc  ";
        assert_eq!(trimmed(text, 0, text.len()), Some(Segment::new(2, 5)));
        assert_eq!(trimmed(text, 0, 2), None);
    }

    #[test]
    fn test_word_windows() {
        let text = "one two three four five";
        let windows = word_windows(text, 0..text.len(), 2);
        assert_eq!(texts(text, &windows), vec!["one two", "three four", "five"]);

        let windows = word_windows(text, 4..13, 5);
        assert_eq!(texts(text, &windows), vec!["two three"]);
    }

    #[test]
    fn test_sentences_in_shifts_positions() {
        let text = "Intro here. Alpha beta. Gamma delta.";
        let sentences = sentences_in(text, 12..text.len());
        assert_eq!(sentences.len(), 2);
        assert_eq!(&text[sentences[0].position..sentences[0].end_position], "Alpha beta.");
    }

    #[test]
    fn test_pack_sentences_respects_ceiling() {
        let text = "One two three. Four five. Six seven eight nine. Ten.";
        let sentences = detect_sentences(text);
        let packed = pack_sentences(text, &sentences, 5);
        assert_eq!(
            texts(text, &packed),
            vec!["One two three. Four five.", "Six seven eight nine. Ten."]
        );
    }

    #[test]
    fn test_pack_sentences_splits_long_sentence() {
        let text = "Short one. This sentence is far longer than the ceiling allows here.";
        let sentences = detect_sentences(text);
        let packed = pack_sentences(text, &sentences, 4);
        assert_eq!(
            texts(text, &packed),
            vec![
                "Short one.",
                "This sentence is far",
                "longer than the ceiling",
                "allows here."
            ]
        );
    }
}
