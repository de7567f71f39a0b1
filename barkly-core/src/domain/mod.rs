//! Document model and text analysis
//!
//! Everything in this layer is pure: normalization, structure detection,
//! word helpers and the lexicon carry no configuration beyond their inputs.

mod analyzer;
mod lexicon;
mod preprocess;
mod structure;
pub mod text;

pub use analyzer::{
    detect_code_blocks, detect_headers, detect_list_items, detect_paragraphs, detect_quotes,
    detect_sentences, StructureAnalyzer,
};
pub use lexicon::Lexicon;
pub use preprocess::{normalize, normalize_with_offsets, NormalizedText};
pub use structure::{
    CodeBlock, DocumentStructure, Header, ListItem, ListKind, Paragraph, Quote, Sentence,
};
