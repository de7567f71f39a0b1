//! Keyword-overlap relatedness between chunks
//!
//! Every pair of chunks is compared, so the cost grows with the square of
//! the chunk count. Documents produce tens of chunks, not thousands.

use crate::domain::{text::normalize_token, Lexicon};
use std::collections::BTreeSet;

/// Content words of `text`: long enough and not a stop word
pub fn keyword_set(text: &str, lexicon: &Lexicon, min_chars: usize) -> BTreeSet<String> {
    text.split_whitespace()
        .map(normalize_token)
        .filter(|word| word.chars().count() >= min_chars && !lexicon.is_stop_word(word))
        .collect()
}

/// Intersection over union, 0 when both sets are empty
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// For each keyword set, the indices of the others whose overlap exceeds `threshold`
///
/// The relation is symmetric and every list is sorted ascending.
pub fn related_indices(sets: &[BTreeSet<String>], threshold: f64) -> Vec<Vec<usize>> {
    let mut related = vec![Vec::new(); sets.len()];

    for i in 0..sets.len() {
        for j in (i + 1)..sets.len() {
            if jaccard(&sets[i], &sets[j]) > threshold {
                related[i].push(j);
                related[j].push(i);
            }
        }
    }

    for list in &mut related {
        list.sort_unstable();
    }
    related
}
