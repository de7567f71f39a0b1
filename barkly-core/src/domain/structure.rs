//! Document structure index
//!
//! The analyzer produces one [`DocumentStructure`] per document. All
//! positions are byte offsets into the normalized text and always fall on
//! UTF-8 character boundaries.

use serde::Serialize;

/// A detected section header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Header text without Markdown markers or a trailing colon
    pub text: String,
    /// Start of the header line
    pub position: usize,
    /// Nesting level, 1 is the outermost
    pub level: u8,
}

/// A block of text separated from its neighbours by a blank line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub position: usize,
    pub end_position: usize,
}

/// A run of text ending in sentence punctuation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub position: usize,
    pub end_position: usize,
}

impl Sentence {
    /// Number of words in the sentence
    pub fn word_count(&self) -> usize {
        super::text::count_words(&self.text)
    }
}

/// Marker style of a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// `-`, `*` or `•`
    Bullet,
    /// `1.`
    Numbered,
    /// `a)`
    Lettered,
}

/// A single list line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Item text without its marker
    pub text: String,
    /// Start of the line
    pub position: usize,
    pub kind: ListKind,
}

/// A quoted span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Text between the quotation marks
    pub text: String,
    /// Position of the opening mark
    pub position: usize,
    /// The span including its quotation marks
    pub full_match: String,
}

/// A fenced code region (```` ``` ```` or `~~~`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub text: String,
    pub position: usize,
    pub end_position: usize,
}

/// Everything the analyzer found in one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStructure {
    /// Headers sorted by position
    pub headers: Vec<Header>,
    pub paragraphs: Vec<Paragraph>,
    pub sentences: Vec<Sentence>,
    pub list_items: Vec<ListItem>,
    pub quotes: Vec<Quote>,
    pub code_blocks: Vec<CodeBlock>,
}

impl DocumentStructure {
    /// Returns true if nothing at all was detected
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
            && self.paragraphs.is_empty()
            && self.sentences.is_empty()
            && self.list_items.is_empty()
            && self.quotes.is_empty()
            && self.code_blocks.is_empty()
    }

    /// List items starting inside `start..end`
    pub fn list_items_in(&self, start: usize, end: usize) -> usize {
        self.list_items
            .iter()
            .filter(|item| (start..end).contains(&item.position))
            .count()
    }

    /// Quotes starting inside `start..end`
    pub fn quotes_in(&self, start: usize, end: usize) -> usize {
        self.quotes
            .iter()
            .filter(|quote| (start..end).contains(&quote.position))
            .count()
    }

    /// Returns true if a code block overlaps `start..end`
    pub fn has_code_in(&self, start: usize, end: usize) -> bool {
        self.code_blocks
            .iter()
            .any(|block| block.position < end && block.end_position > start)
    }
}
