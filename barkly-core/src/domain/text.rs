//! Word-level text helpers shared by the analyzer, strategies and post-processor
//!
//! Every size in the chunker is measured in whitespace-delimited words, and
//! every range handed between stages is a byte range into the normalized
//! text. The helpers here keep those two views consistent.

use std::ops::Range;

/// Number of whitespace-delimited words in `text`
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Byte ranges of every whitespace-delimited word in `text`
pub fn word_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, ch) in text.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }

    if let Some(s) = start {
        spans.push(s..text.len());
    }

    spans
}

/// The first `n` words of `text`, single-space joined
pub fn first_words(text: &str, n: usize) -> String {
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

/// The last `n` words of `text`, single-space joined
pub fn last_words(text: &str, n: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let skip = words.len().saturating_sub(n);
    words[skip..].join(" ")
}

/// Lowercased word with surrounding punctuation stripped
pub fn normalize_token(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Shrink `range` so that it excludes leading and trailing whitespace of `text[range]`
pub fn trim_range(text: &str, range: Range<usize>) -> Range<usize> {
    let slice = &text[range.clone()];
    let leading = slice.len() - slice.trim_start().len();
    let trailing = slice.len() - slice.trim_end().len();
    let start = range.start + leading;
    let end = (range.end - trailing).max(start);
    start..end
}

/// Convert byte offsets into character offsets in a single pass over `text`
///
/// Offsets may be given in any order; the result lines up with the input.
/// Offsets past the end map to the total character count.
pub fn char_offsets(text: &str, byte_offsets: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..byte_offsets.len()).collect();
    order.sort_by_key(|&i| byte_offsets[i]);

    let mut result = vec![0; byte_offsets.len()];
    let mut chars = text.char_indices().enumerate().peekable();
    let total = text.chars().count();

    for i in order {
        let target = byte_offsets[i];
        while let Some(&(_, (byte, _))) = chars.peek() {
            if byte >= target {
                break;
            }
            chars.next();
        }
        result[i] = chars.peek().map_or(total, |&(char_index, _)| char_index);
    }

    result
}
