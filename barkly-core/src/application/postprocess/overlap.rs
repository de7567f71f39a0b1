//! Context padding between adjacent chunks

use crate::domain::text::{first_words, last_words};

/// Pad each chunk with the last `tokens` words of its predecessor and the
/// first `tokens` words of its successor
///
/// Padding is taken from the neighbours' own text, never from their
/// padded text. Edge chunks get padding on their inner side only.
pub fn apply_overlap(cores: &[&str], tokens: usize) -> Vec<String> {
    cores
        .iter()
        .enumerate()
        .map(|(i, core)| {
            if tokens == 0 {
                return core.to_string();
            }

            let prefix = i
                .checked_sub(1)
                .map(|prev| last_words(cores[prev], tokens))
                .unwrap_or_default();
            let suffix = cores
                .get(i + 1)
                .map(|next| first_words(next, tokens))
                .unwrap_or_default();

            [prefix.as_str(), core, suffix.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
