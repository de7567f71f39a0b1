//! Deterministic text builders shared by the integration tests
//!
//! Only letters are used: the normalizer splits letter-digit runs, which
//! would change word counts.

#![allow(dead_code)]

pub const VOCABULARY: [&str; 32] = [
    "river", "stone", "garden", "lantern", "meadow", "harbor", "willow", "canyon", "ember",
    "falcon", "glacier", "harvest", "island", "juniper", "kettle", "lagoon", "marble", "nectar",
    "orchard", "pepper", "quarry", "ribbon", "saddle", "timber", "valley", "wander", "yonder",
    "zephyr", "basket", "cobalt", "dune", "fern",
];

/// A capitalized sentence of `words` vocabulary words
pub fn sentence(seed: usize, words: usize) -> String {
    let body: Vec<&str> = (0..words)
        .map(|k| VOCABULARY[(seed * 7 + k * 3) % VOCABULARY.len()])
        .collect();
    let mut sentence = body.join(" ");
    sentence[..1].make_ascii_uppercase();
    sentence.push('.');
    sentence
}

/// `sentences` sentences of `words` words on one line
pub fn paragraph(seed: usize, sentences: usize, words: usize) -> String {
    (0..sentences)
        .map(|i| sentence(seed + i, words))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exactly `count` space-separated words
pub fn words(count: usize) -> String {
    (0..count)
        .map(|i| VOCABULARY[i % VOCABULARY.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// A Markdown section: header line, then paragraphs of ten-word sentences
pub fn section(title: &str, paragraphs: usize, sentences_per_paragraph: usize) -> String {
    let body: Vec<String> = (0..paragraphs)
        .map(|p| paragraph(p * sentences_per_paragraph, sentences_per_paragraph, 10))
        .collect();
    format!("# {title}\n\n{}", body.join("\n\n"))
}
