//! Word lists used by the boundary and scoring heuristics
//!
//! The built-in English lexicon is embedded from
//! `configs/lexicon/english.toml` and parsed once on first access. Custom
//! lexicons are loaded from TOML with the same keys; any list a custom file
//! leaves out is taken from the English lexicon.

use super::text::normalize_token;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

static ENGLISH: LazyLock<Lexicon> = LazyLock::new(|| {
    let file: LexiconFile = toml::from_str(include_str!("../../configs/lexicon/english.toml"))
        .expect("embedded English lexicon is valid TOML");
    Lexicon::new(
        file.name.as_deref().unwrap_or("english"),
        file.stop_words.unwrap_or_default(),
        file.transition_phrases.unwrap_or_default(),
        file.importance_keywords.unwrap_or_default(),
    )
});

/// On-disk lexicon shape
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    name: Option<String>,
    stop_words: Option<Vec<String>>,
    transition_phrases: Option<Vec<String>>,
    importance_keywords: Option<Vec<String>>,
}

/// Immutable word lists for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    name: String,
    stop_words: HashSet<String>,
    transition_phrases: Vec<String>,
    importance_keywords: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from raw lists
    ///
    /// Entries are lowercased, inner whitespace is collapsed and blank
    /// entries are dropped.
    pub fn new<S, T, K>(
        name: &str,
        stop_words: impl IntoIterator<Item = S>,
        transition_phrases: impl IntoIterator<Item = T>,
        importance_keywords: impl IntoIterator<Item = K>,
    ) -> Self
    where
        S: AsRef<str>,
        T: AsRef<str>,
        K: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            stop_words: clean(stop_words).into_iter().collect(),
            transition_phrases: clean(transition_phrases),
            importance_keywords: clean(importance_keywords),
        }
    }

    /// The built-in English lexicon
    pub fn english() -> &'static Lexicon {
        &ENGLISH
    }

    /// Parse a lexicon from TOML
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(input)?;
        let english = Self::english();

        let lexicon = Self {
            name: file.name.unwrap_or_else(|| "custom".to_string()),
            stop_words: match file.stop_words {
                Some(words) => clean(words).into_iter().collect(),
                None => english.stop_words.clone(),
            },
            transition_phrases: file
                .transition_phrases
                .map(clean)
                .unwrap_or_else(|| english.transition_phrases.clone()),
            importance_keywords: file
                .importance_keywords
                .map(clean)
                .unwrap_or_else(|| english.importance_keywords.clone()),
        };

        if lexicon.importance_keywords.is_empty() && lexicon.transition_phrases.is_empty() {
            return Err(Error::Configuration(format!(
                "lexicon '{}' defines neither transition phrases nor importance keywords",
                lexicon.name
            )));
        }

        Ok(lexicon)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if `word` (already lowercased) is a stop word
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn transition_phrases(&self) -> &[String] {
        &self.transition_phrases
    }

    pub fn importance_keywords(&self) -> &[String] {
        &self.importance_keywords
    }

    /// Returns true if `sentence` opens with a transition phrase
    ///
    /// Matching is case-insensitive and whole-word: "However, ..." matches
    /// "however" but "Howeverish" does not.
    pub fn starts_with_transition(&self, sentence: &str) -> bool {
        let opening = sentence
            .split_whitespace()
            .take(MAX_PHRASE_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let opening = opening.trim_start_matches(|c: char| !c.is_alphanumeric());

        self.transition_phrases.iter().any(|phrase| {
            opening
                .strip_prefix(phrase.as_str())
                .is_some_and(|rest| rest.chars().next().is_none_or(|c| !c.is_alphanumeric()))
        })
    }

    /// Number of distinct importance keywords present in `text`
    ///
    /// A keyword matches a whole token, either exactly or with a plural `s`.
    pub fn importance_matches(&self, text: &str) -> usize {
        let tokens: Vec<String> = text.split_whitespace().map(normalize_token).collect();
        let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let joined = tokens.join(" ");

        self.importance_keywords
            .iter()
            .filter(|keyword| {
                if keyword.contains(' ') {
                    joined.contains(keyword.as_str())
                } else {
                    token_set.contains(keyword.as_str())
                        || token_set.contains(format!("{keyword}s").as_str())
                }
            })
            .count()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english().clone()
    }
}

/// Longest transition phrase considered, in words
const MAX_PHRASE_WORDS: usize = 6;

fn clean<S: AsRef<str>>(entries: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .map(|entry| {
            entry
                .as_ref()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .filter(|entry| !entry.is_empty() && seen.insert(entry.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_loads() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.name(), "english");
        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("which"));
        assert!(!lexicon.is_stop_word("community"));
        assert_eq!(lexicon.importance_keywords().len(), 10);
    }

    #[test]
    fn test_transition_detection() {
        let lexicon = Lexicon::english();
        assert!(lexicon.starts_with_transition("However, the elders disagreed."));
        assert!(lexicon.starts_with_transition("IN CONCLUSION we found little."));
        assert!(lexicon.starts_with_transition("\"Therefore\" was the answer."));
        assert!(lexicon.starts_with_transition("On the\nother hand, nothing changed."));
        assert!(!lexicon.starts_with_transition("Howeverish is not a word."));
        assert!(!lexicon.starts_with_transition("The result, however, held."));
        assert!(!lexicon.starts_with_transition(""));
    }

    #[test]
    fn test_importance_matches() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.importance_matches("Key findings are important."), 3);
        assert_eq!(lexicon.importance_matches("Keys, keys and more KEYS"), 1);
        assert_eq!(lexicon.importance_matches("Keyboard summaries"), 0);
        assert_eq!(lexicon.importance_matches(""), 0);
    }

    #[test]
    fn test_custom_lexicon_inherits_missing_lists() {
        let lexicon = Lexicon::from_toml_str(
            r#"
            name = "field-notes"
            importance_keywords = ["Elder", "  protocol  "]
            "#,
        )
        .unwrap();

        assert_eq!(lexicon.name(), "field-notes");
        assert_eq!(lexicon.importance_keywords(), ["elder", "protocol"]);
        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.starts_with_transition("However, yes."));
        assert_eq!(lexicon.importance_matches("The elders spoke."), 1);
    }

    #[test]
    fn test_custom_lexicon_rejects_unknown_keys() {
        let result = Lexicon::from_toml_str("stopwords = [\"a\"]");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_custom_lexicon_requires_some_heuristic_words() {
        let result = Lexicon::from_toml_str(
            "transition_phrases = []\nimportance_keywords = [\"  \"]",
        );
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Lexicon::from_file("/nonexistent/lexicon.toml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_new_deduplicates() {
        let lexicon = Lexicon::new("tiny", ["A", "a"], ["So"], ["Key", "KEY"]);
        assert_eq!(lexicon.importance_keywords(), ["key"]);
        assert!(lexicon.is_stop_word("a"));
    }
}
