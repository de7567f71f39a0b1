//! Structure analysis over normalized text
//!
//! The analyzer is a set of independent regex detectors. Each detector
//! tolerates total absence of its pattern, so an empty vector is always a
//! valid result and analysis never fails.

use super::structure::{
    CodeBlock, DocumentStructure, Header, ListItem, ListKind, Paragraph, Quote, Sentence,
};
use super::text::trim_range;
use regex::Regex;
use std::sync::LazyLock;

/// Longest line (in characters) accepted as a non-Markdown header
const MAX_HEADER_LINE_CHARS: usize = 100;

static MARKDOWN_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(#{1,6}) +(\S[^\n]*)$").expect("markdown header pattern is valid")
});

static NUMBERED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\d+(?:\.\d+)*)\.? +\p{Lu}[^\n]*$").expect("numbered header pattern is valid")
});

static ALL_CAPS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\p{Lu}[\p{Lu}\d ,&'\-:]{2,}$").expect("all-caps header pattern is valid")
});

static COLON_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\p{Lu}[^\n:]*): *$").expect("colon header pattern is valid")
});

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("paragraph break pattern is valid"));

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]*[^.!?]+[.!?]*").expect("sentence pattern is valid"));

static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^ *[-*•] +(\S[^\n]*)$").expect("bullet pattern is valid")
});

static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^ *\d+\. +(\S[^\n]*)$").expect("numbered item pattern is valid")
});

static LETTERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^ *[a-zA-Z]\) +(\S[^\n]*)$").expect("lettered item pattern is valid")
});

static QUOTES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r#""([^"\n]+)""#).expect("double quote pattern is valid"),
        Regex::new(r"“([^”\n]+)”").expect("curly quote pattern is valid"),
        Regex::new(r"'([^'\n]+)'").expect("single quote pattern is valid"),
    ]
});

static FENCES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?ms)^```[^\n]*\n(.*?)^``` *$").expect("backtick fence pattern is valid"),
        Regex::new(r"(?ms)^~~~[^\n]*\n(.*?)^~~~ *$").expect("tilde fence pattern is valid"),
    ]
});

/// Builds a [`DocumentStructure`] from normalized text
#[derive(Debug, Clone)]
pub struct StructureAnalyzer {
    detect_headers: bool,
    detect_lists: bool,
    detect_quotes: bool,
    detect_code_blocks: bool,
    min_quote_chars: usize,
}

impl StructureAnalyzer {
    /// Create an analyzer with every detector enabled
    pub fn new() -> Self {
        Self {
            detect_headers: true,
            detect_lists: true,
            detect_quotes: true,
            detect_code_blocks: true,
            min_quote_chars: 21,
        }
    }

    /// Enable or disable header detection
    pub fn with_headers(mut self, enabled: bool) -> Self {
        self.detect_headers = enabled;
        self
    }

    /// Enable or disable list detection
    pub fn with_lists(mut self, enabled: bool) -> Self {
        self.detect_lists = enabled;
        self
    }

    /// Enable or disable quote detection
    pub fn with_quotes(mut self, enabled: bool) -> Self {
        self.detect_quotes = enabled;
        self
    }

    /// Enable or disable fenced code block detection
    pub fn with_code_blocks(mut self, enabled: bool) -> Self {
        self.detect_code_blocks = enabled;
        self
    }

    /// Minimum inner length, in characters, of a quote
    pub fn with_min_quote_chars(mut self, chars: usize) -> Self {
        self.min_quote_chars = chars;
        self
    }

    /// Analyze `text` in a single pass per detector
    pub fn analyze(&self, text: &str) -> DocumentStructure {
        let code_blocks = if self.detect_code_blocks {
            detect_code_blocks(text)
        } else {
            Vec::new()
        };

        let headers = if self.detect_headers {
            detect_headers(text, &code_blocks)
        } else {
            Vec::new()
        };

        let list_items = if self.detect_lists {
            detect_list_items(text)
        } else {
            Vec::new()
        };

        let quotes = if self.detect_quotes {
            detect_quotes(text, self.min_quote_chars)
        } else {
            Vec::new()
        };

        DocumentStructure {
            headers,
            paragraphs: detect_paragraphs(text),
            sentences: detect_sentences(text),
            list_items,
            quotes,
            code_blocks,
        }
    }
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect headers from every pattern, merged and sorted by position
///
/// When two patterns match the same line, the earlier pattern in
/// Markdown, numbered, all-caps, colon order wins. Header lines inside a
/// fenced code block are ignored.
pub fn detect_headers(text: &str, code_blocks: &[CodeBlock]) -> Vec<Header> {
    let mut found: Vec<(usize, u8, Header)> = Vec::new();

    for caps in MARKDOWN_HEADER.captures_iter(text) {
        let (Some(line), Some(hashes), Some(title)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let level = match hashes.as_str().len() {
            1 => 1,
            2 => 2,
            _ => 3,
        };
        let title = title.as_str().trim_end_matches('#').trim();
        if !title.is_empty() {
            found.push((line.start(), 0, header(title, line.start(), level)));
        }
    }

    for caps in NUMBERED_HEADER.captures_iter(text) {
        let (Some(line), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let title = line.as_str().trim();
        if is_short_line(title) && !title.ends_with(['.', '!', '?']) {
            let level = if number.as_str().contains('.') { 2 } else { 1 };
            found.push((line.start(), 1, header(title, line.start(), level)));
        }
    }

    for line in ALL_CAPS_HEADER.find_iter(text) {
        let title = line.as_str().trim().trim_end_matches(':').trim_end();
        if is_short_line(title) && title.chars().filter(|c| c.is_uppercase()).count() >= 2 {
            found.push((line.start(), 2, header(title, line.start(), 1)));
        }
    }

    for caps in COLON_HEADER.captures_iter(text) {
        let (Some(line), Some(title)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let title = title.as_str().trim();
        if is_short_line(line.as_str()) {
            found.push((line.start(), 3, header(title, line.start(), 2)));
        }
    }

    found.retain(|(position, _, _)| {
        !code_blocks
            .iter()
            .any(|block| (block.position..block.end_position).contains(position))
    });
    found.sort_by_key(|(position, priority, _)| (*position, *priority));
    found.dedup_by_key(|(position, _, _)| *position);
    found.into_iter().map(|(_, _, header)| header).collect()
}

fn header(text: &str, position: usize, level: u8) -> Header {
    Header {
        text: text.to_string(),
        position,
        level,
    }
}

fn is_short_line(line: &str) -> bool {
    line.chars().count() <= MAX_HEADER_LINE_CHARS
}

/// Split on runs of two or more newlines, tracking exact offsets
pub fn detect_paragraphs(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut last = 0;

    let mut push = |start: usize, end: usize| {
        let range = trim_range(text, start..end);
        if !range.is_empty() {
            paragraphs.push(Paragraph {
                text: text[range.clone()].to_string(),
                position: range.start,
                end_position: range.end,
            });
        }
    };

    for separator in PARAGRAPH_BREAK.find_iter(text) {
        push(last, separator.start());
        last = separator.end();
    }
    push(last, text.len());

    paragraphs
}

/// Scan sentences as runs of text ending in `.`, `!` or `?`
///
/// Leading terminators attach to the first sentence and an unterminated
/// tail becomes a final sentence, so the sentences cover every word of
/// `text`.
pub fn detect_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences: Vec<Sentence> = SENTENCE
        .find_iter(text)
        .filter_map(|m| {
            let range = trim_range(text, m.range());
            (!range.is_empty()).then(|| Sentence {
                text: text[range.clone()].to_string(),
                position: range.start,
                end_position: range.end,
            })
        })
        .collect();

    if sentences.is_empty() {
        let range = trim_range(text, 0..text.len());
        if !range.is_empty() {
            sentences.push(Sentence {
                text: text[range.clone()].to_string(),
                position: range.start,
                end_position: range.end,
            });
        }
    }

    sentences
}

/// Detect bullet, numbered and lettered list lines
pub fn detect_list_items(text: &str) -> Vec<ListItem> {
    let patterns: [(&Regex, ListKind); 3] = [
        (&*BULLET_ITEM, ListKind::Bullet),
        (&*NUMBERED_ITEM, ListKind::Numbered),
        (&*LETTERED_ITEM, ListKind::Lettered),
    ];

    let mut items: Vec<ListItem> = patterns
        .iter()
        .flat_map(|(pattern, kind)| {
            pattern.captures_iter(text).filter_map(move |caps| {
                let (line, item) = (caps.get(0)?, caps.get(1)?);
                Some(ListItem {
                    text: item.as_str().trim().to_string(),
                    position: line.start(),
                    kind: *kind,
                })
            })
        })
        .collect();

    items.sort_by_key(|item| item.position);
    items
}

/// Detect quoted spans whose inner text has at least `min_chars` characters
pub fn detect_quotes(text: &str, min_chars: usize) -> Vec<Quote> {
    let mut quotes: Vec<Quote> = QUOTES
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| {
            let (full, inner) = (caps.get(0)?, caps.get(1)?);
            (inner.as_str().chars().count() >= min_chars).then(|| Quote {
                text: inner.as_str().to_string(),
                position: full.start(),
                full_match: full.as_str().to_string(),
            })
        })
        .collect();

    quotes.sort_by_key(|quote| quote.position);
    quotes
}

/// Detect fenced code regions
pub fn detect_code_blocks(text: &str) -> Vec<CodeBlock> {
    let mut blocks: Vec<CodeBlock> = FENCES
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| {
            let (full, body) = (caps.get(0)?, caps.get(1)?);
            Some(CodeBlock {
                text: body.as_str().trim_end().to_string(),
                position: full.start(),
                end_position: full.end(),
            })
        })
        .collect();

    blocks.sort_by_key(|block| block.position);
    blocks
}
