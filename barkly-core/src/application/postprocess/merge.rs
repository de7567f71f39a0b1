//! Merging of undersized adjacent segments

use crate::application::strategies::Segment;

/// Merge every undersized segment into its successor while the union fits
///
/// Scans in order. A segment below `min_words` that is not last absorbs
/// the next one if the combined span holds at most `ceiling` words, and
/// the result is examined again. Otherwise it is kept as it is.
pub fn merge_undersized(
    text: &str,
    segments: Vec<Segment>,
    min_words: usize,
    ceiling: usize,
) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    let mut iter = segments.into_iter().peekable();

    while let Some(mut current) = iter.next() {
        while current.word_count(text) < min_words {
            let Some(next) = iter.peek() else {
                break;
            };
            let merged = current.union(next);
            if merged.word_count(text) > ceiling {
                break;
            }
            current = merged;
            iter.next();
        }
        out.push(current);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(text: &str, parts: &[&str]) -> Vec<Segment> {
        parts
            .iter()
            .map(|part| {
                let start = text.find(part).unwrap();
                Segment::new(start, start + part.len())
            })
            .collect()
    }

    fn texts(text: &str, segments: &[Segment]) -> Vec<String> {
        segments.iter().map(|s| s.text(text).to_string()).collect()
    }

    #[test]
    fn test_small_segment_absorbs_successor() {
        let text = "a b\n\nc d e f\n\ng h i j";
        let input = segments(text, &["a b", "c d e f", "g h i j"]);
        let merged = merge_undersized(text, input, 3, 10);
        assert_eq!(texts(text, &merged), vec!["a b\n\nc d e f", "g h i j"]);
    }

    #[test]
    fn test_merge_repeats_until_large_enough() {
        let text = "a. b. c. d e f g";
        let input = segments(text, &["a.", "b.", "c.", "d e f g"]);
        let merged = merge_undersized(text, input, 3, 10);
        assert_eq!(texts(text, &merged), vec!["a. b. c.", "d e f g"]);
    }

    #[test]
    fn test_merge_blocked_by_ceiling() {
        let text = "a b c d e f g";
        let input = segments(text, &["a", "b c d e f g"]);
        let merged = merge_undersized(text, input, 3, 5);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_last_segment_kept_short() {
        let text = "a b c d e";
        let input = segments(text, &["a b c d", "e"]);
        let merged = merge_undersized(text, input, 3, 10);
        assert_eq!(texts(text, &merged), vec!["a b c d", "e"]);
    }

    #[test]
    fn test_overlapping_segments_merge_to_union() {
        let text = "a b c d e";
        let input = vec![Segment::new(0, 3), Segment::new(2, 9)];
        let merged = merge_undersized(text, input, 3, 10);
        assert_eq!(merged, vec![Segment::new(0, 9)]);
    }
}
