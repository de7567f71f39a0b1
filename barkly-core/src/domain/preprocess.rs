//! Text normalization applied before structure analysis
//!
//! Extracted PDF text frequently loses the spaces between text runs, so
//! words arrive glued together ("communityResearch", "Table3"). The
//! normalizer repairs the most common artifacts and canonicalizes
//! whitespace so that paragraph breaks are always exactly `\n\n`.
//!
//! Every normalized character remembers the range of original characters
//! it came from, so positions found in the normalized text can be reported
//! against the text the caller passed in.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static LINE_ENDINGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n").expect("line ending pattern is valid"));

static TABS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t").expect("tab pattern is valid"));

static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").expect("lower-upper pattern is valid"));

static LETTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{L})(\p{Nd})").expect("letter-digit pattern is valid"));

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern is valid"));

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("space pattern is valid"));

/// A normalized character and the original character range behind it
type Unit = (char, Range<usize>);

/// Normalized text with a map back to the original characters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    text: String,
    /// Original character range of each normalized character; inserted
    /// characters get an empty range
    origins: Vec<Range<usize>>,
    original_chars: usize,
}

impl NormalizedText {
    fn from_original(text: &str) -> Self {
        let origins: Vec<Range<usize>> = (0..text.chars().count()).map(|i| i..i + 1).collect();
        Self {
            text: text.to_string(),
            original_chars: origins.len(),
            origins,
        }
    }

    fn from_units(units: Vec<Unit>, original_chars: usize) -> Self {
        let text = units.iter().map(|(c, _)| *c).collect();
        let origins = units.into_iter().map(|(_, origin)| origin).collect();
        Self {
            text,
            origins,
            original_chars,
        }
    }

    /// Replace every match of `pattern`, carrying origins through `replace`
    fn rewrite(self, pattern: &Regex, replace: impl Fn(&[Unit]) -> Vec<Unit>) -> Self {
        let Self {
            text,
            origins,
            original_chars,
        } = self;
        let units: Vec<(usize, Unit)> = text
            .char_indices()
            .zip(origins)
            .map(|((byte, c), origin)| (byte, (c, origin)))
            .collect();
        let index_of = |byte: usize| units.partition_point(|(b, _)| *b < byte);
        let owned = |range: Range<usize>| units[range].iter().map(|(_, unit)| unit.clone());

        let mut out: Vec<Unit> = Vec::with_capacity(units.len());
        let mut copied = 0;
        for m in pattern.find_iter(&text) {
            let (start, end) = (index_of(m.start()), index_of(m.end()));
            out.extend(owned(copied..start));
            let matched: Vec<Unit> = owned(start..end).collect();
            out.extend(replace(&matched));
            copied = end;
        }
        out.extend(owned(copied..units.len()));

        Self::from_units(out, original_chars)
    }

    fn trim(self) -> Self {
        let leading = self.text.chars().take_while(|c| c.is_whitespace()).count();
        let trimmed = self.text.trim();
        let kept = trimmed.chars().count();
        Self {
            text: trimmed.to_string(),
            origins: self.origins.into_iter().skip(leading).take(kept).collect(),
            original_chars: self.original_chars,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of characters in the original text
    pub fn original_chars(&self) -> usize {
        self.original_chars
    }

    /// Original character range behind the normalized character range `span`
    ///
    /// The result starts at the first original character of the span's first
    /// character and ends after the last original character of its last one.
    pub fn original_span(&self, span: Range<usize>) -> Range<usize> {
        let start = self
            .origins
            .get(span.start)
            .map_or(self.original_chars, |origin| origin.start);
        if span.is_empty() {
            return start..start;
        }
        let end = self
            .origins
            .get(span.end - 1)
            .map_or(self.original_chars, |origin| origin.end);
        start..end.max(start)
    }
}

fn covering(units: &[Unit]) -> Range<usize> {
    match (units.first(), units.last()) {
        (Some((_, first)), Some((_, last))) => first.start..last.end,
        _ => 0..0,
    }
}

fn split_glued(units: &[Unit]) -> Vec<Unit> {
    match units {
        [left, right] => {
            let at = right.1.start;
            vec![left.clone(), (' ', at..at), right.clone()]
        }
        _ => units.to_vec(),
    }
}

fn collapse_newlines(units: &[Unit]) -> Vec<Unit> {
    match units {
        [(_, first), rest @ ..] if !rest.is_empty() => {
            vec![('\n', first.clone()), ('\n', covering(rest))]
        }
        _ => units.to_vec(),
    }
}

/// Normalize raw extracted text, keeping the map to original characters
///
/// Steps, in order:
/// 1. CRLF becomes LF, tabs become two spaces
/// 2. a space is inserted between a lowercase letter and a following uppercase letter
/// 3. a space is inserted between a letter and a following digit
/// 4. runs of three or more newlines collapse to exactly two
/// 5. runs of spaces collapse to one
/// 6. leading and trailing whitespace is trimmed
///
/// # Example
///
/// ```
/// use barkly_core::domain::normalize_with_offsets;
///
/// let normalized = normalize_with_offsets("a   b\r\nc");
/// assert_eq!(normalized.as_str(), "a b\nc");
/// // "c" sits at normalized char 4 but original char 7
/// assert_eq!(normalized.original_span(4..5), 7..8);
/// ```
pub fn normalize_with_offsets(text: &str) -> NormalizedText {
    NormalizedText::from_original(text)
        .rewrite(&LINE_ENDINGS, |m| vec![('\n', covering(m))])
        .rewrite(&TABS, |m| vec![(' ', covering(m)), (' ', covering(m))])
        .rewrite(&LOWER_UPPER, split_glued)
        .rewrite(&LETTER_DIGIT, split_glued)
        .rewrite(&EXCESS_NEWLINES, collapse_newlines)
        .rewrite(&SPACE_RUNS, |m| vec![(' ', covering(m))])
        .trim()
}

/// Normalize raw extracted text
///
/// ```
/// use barkly_core::domain::normalize;
///
/// assert_eq!(normalize("communityResearch\r\nTable3"), "community Research\nTable 3");
/// ```
pub fn normalize(text: &str) -> String {
    normalize_with_offsets(text).into_string()
}
