//! Configuration API for document chunking

use crate::domain::StructureAnalyzer;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default configuration constants, all sizes in words
pub mod defaults {
    pub const MIN_CHUNK_SIZE: usize = 100;
    pub const MAX_CHUNK_SIZE: usize = 1500;
    pub const TARGET_CHUNK_SIZE: usize = 750;
    pub const OVERLAP_TOKENS: usize = 50;
    /// Percent
    pub const OVERLAP_PERCENTAGE: u8 = 10;

    /// Highest overlap percentage the sanitizer keeps
    pub const MAX_OVERLAP_PERCENTAGE: u8 = 90;
}

/// Chunking strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sentence accumulation with topic-shift boundaries
    Semantic,
    /// Header sections, or paragraph accumulation without headers
    Structural,
    /// Header sections with semantic splitting of large sections
    #[default]
    Hybrid,
    /// Fixed word windows with overlap
    Sliding,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Semantic,
        Strategy::Structural,
        Strategy::Hybrid,
        Strategy::Sliding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Semantic => "semantic",
            Strategy::Structural => "structural",
            Strategy::Hybrid => "hybrid",
            Strategy::Sliding => "sliding",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Semantic => "Accumulates sentences and breaks at topic transitions",
            Strategy::Structural => "Splits at headers, or accumulates paragraphs",
            Strategy::Hybrid => "Header sections with semantic splitting of large sections",
            Strategy::Sliding => "Fixed-size word windows with overlap",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "semantic" => Ok(Strategy::Semantic),
            "structural" => Ok(Strategy::Structural),
            "hybrid" => Ok(Strategy::Hybrid),
            "sliding" | "sliding-window" | "sliding_window" => Ok(Strategy::Sliding),
            other => Err(Error::Configuration(format!("Unknown strategy: {other}"))),
        }
    }
}

/// Named configuration bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Academic,
    Conversational,
    Technical,
    MaximumCoverage,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Academic,
        Preset::Conversational,
        Preset::Technical,
        Preset::MaximumCoverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Academic => "academic",
            Preset::Conversational => "conversational",
            Preset::Technical => "technical",
            Preset::MaximumCoverage => "maximum-coverage",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Academic => "Long hybrid chunks for papers and reports",
            Preset::Conversational => "Short semantic chunks for interviews and transcripts",
            Preset::Technical => "Structural chunks for manuals and specifications",
            Preset::MaximumCoverage => "Heavily overlapping sliding windows",
        }
    }

    pub fn configuration(&self) -> ChunkingConfiguration {
        let base = ChunkingConfiguration::default();
        match self {
            Preset::Academic => ChunkingConfiguration {
                min_chunk_size: 200,
                max_chunk_size: 2000,
                target_chunk_size: 1000,
                overlap_tokens: 100,
                overlap_percentage: 15,
                strategy: Strategy::Hybrid,
                ..base
            },
            Preset::Conversational => ChunkingConfiguration {
                min_chunk_size: 50,
                max_chunk_size: 800,
                target_chunk_size: 400,
                overlap_tokens: 30,
                overlap_percentage: 10,
                strategy: Strategy::Semantic,
                ..base
            },
            Preset::Technical => ChunkingConfiguration {
                min_chunk_size: 150,
                max_chunk_size: 1500,
                target_chunk_size: 800,
                overlap_tokens: 50,
                overlap_percentage: 10,
                strategy: Strategy::Structural,
                ..base
            },
            Preset::MaximumCoverage => ChunkingConfiguration {
                min_chunk_size: 50,
                max_chunk_size: 1000,
                target_chunk_size: 500,
                overlap_tokens: 100,
                overlap_percentage: 25,
                strategy: Strategy::Sliding,
                ..base
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "academic" | "academic-papers" => Ok(Preset::Academic),
            "conversational" | "conversational-data" => Ok(Preset::Conversational),
            "technical" | "technical-documents" => Ok(Preset::Technical),
            "maximum-coverage" | "coverage" => Ok(Preset::MaximumCoverage),
            other => Err(Error::Configuration(format!("Unknown preset: {other}"))),
        }
    }
}

/// Tunable constants of the scoring heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Heuristics {
    /// Jaccard overlap above which two chunks are related
    pub relatedness_threshold: f64,
    pub base_importance: f64,
    pub header_bonus: f64,
    /// Added per matched importance keyword
    pub keyword_bonus: f64,
    pub keyword_bonus_cap: f64,
    pub question_bonus: f64,
    /// Characters at the start of a chunk searched for header text
    pub header_window_chars: usize,
    /// Shortest word, in characters, that counts as a relatedness keyword
    pub min_keyword_chars: usize,
    /// Shortest quoted span, in characters, that counts as a quote
    pub min_quote_chars: usize,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            relatedness_threshold: 0.3,
            base_importance: 0.5,
            header_bonus: 0.2,
            keyword_bonus: 0.1,
            keyword_bonus_cap: 0.3,
            question_bonus: 0.1,
            header_window_chars: 100,
            min_keyword_chars: 5,
            min_quote_chars: 21,
        }
    }
}

impl Heuristics {
    fn unit_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("relatedness_threshold", self.relatedness_threshold),
            ("base_importance", self.base_importance),
            ("header_bonus", self.header_bonus),
            ("keyword_bonus", self.keyword_bonus),
            ("keyword_bonus_cap", self.keyword_bonus_cap),
            ("question_bonus", self.question_bonus),
        ]
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in self.unit_fields() {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Configuration(format!(
                    "heuristics.{name} must be between 0 and 1, got {value}"
                )));
            }
        }

        if self.min_keyword_chars == 0 {
            return Err(Error::Configuration(
                "heuristics.min_keyword_chars must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn sanitized(self) -> Self {
        let unit = |value: f64| if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        Self {
            relatedness_threshold: unit(self.relatedness_threshold),
            base_importance: unit(self.base_importance),
            header_bonus: unit(self.header_bonus),
            keyword_bonus: unit(self.keyword_bonus),
            keyword_bonus_cap: unit(self.keyword_bonus_cap),
            question_bonus: unit(self.question_bonus),
            min_keyword_chars: self.min_keyword_chars.max(1),
            ..self
        }
    }
}

/// Chunking configuration
///
/// All sizes are in whitespace-delimited words. Unknown keys are rejected
/// when loading from TOML; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChunkingConfiguration {
    pub min_chunk_size: usize,
    pub max_chunk_size: usize,
    pub target_chunk_size: usize,
    pub overlap_tokens: usize,
    pub overlap_percentage: u8,
    pub preserve_sentences: bool,
    pub preserve_paragraphs: bool,
    pub preserve_sections: bool,
    pub detect_headers: bool,
    pub detect_lists: bool,
    pub detect_code_blocks: bool,
    pub detect_quotes: bool,
    pub strategy: Strategy,
    pub heuristics: Heuristics,
}

impl Default for ChunkingConfiguration {
    fn default() -> Self {
        Self {
            min_chunk_size: defaults::MIN_CHUNK_SIZE,
            max_chunk_size: defaults::MAX_CHUNK_SIZE,
            target_chunk_size: defaults::TARGET_CHUNK_SIZE,
            overlap_tokens: defaults::OVERLAP_TOKENS,
            overlap_percentage: defaults::OVERLAP_PERCENTAGE,
            preserve_sentences: true,
            preserve_paragraphs: true,
            preserve_sections: true,
            detect_headers: true,
            detect_lists: true,
            detect_code_blocks: true,
            detect_quotes: true,
            strategy: Strategy::default(),
            heuristics: Heuristics::default(),
        }
    }
}

impl ChunkingConfiguration {
    /// Create a configuration builder starting from the defaults
    pub fn builder() -> ChunkingConfigurationBuilder {
        ChunkingConfigurationBuilder::default()
    }

    /// Continue building from this configuration
    pub fn to_builder(&self) -> ChunkingConfigurationBuilder {
        ChunkingConfigurationBuilder {
            config: self.clone(),
        }
    }

    pub fn for_academic_papers() -> Self {
        Preset::Academic.configuration()
    }

    pub fn for_conversational_data() -> Self {
        Preset::Conversational.configuration()
    }

    pub fn for_technical_documents() -> Self {
        Preset::Technical.configuration()
    }

    pub fn for_maximum_coverage() -> Self {
        Preset::MaximumCoverage.configuration()
    }

    /// Parse a configuration from TOML and validate it
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file and validate it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(Error::Configuration(
                "max_chunk_size must be greater than 0".into(),
            ));
        }

        if self.min_chunk_size > self.max_chunk_size {
            return Err(Error::Configuration(format!(
                "min_chunk_size ({}) exceeds max_chunk_size ({})",
                self.min_chunk_size, self.max_chunk_size
            )));
        }

        if !(self.min_chunk_size..=self.max_chunk_size).contains(&self.target_chunk_size) {
            return Err(Error::Configuration(format!(
                "target_chunk_size ({}) must lie between min_chunk_size ({}) and max_chunk_size ({})",
                self.target_chunk_size, self.min_chunk_size, self.max_chunk_size
            )));
        }

        if self.overlap_percentage >= 100 {
            return Err(Error::Configuration(format!(
                "overlap_percentage must be below 100, got {}",
                self.overlap_percentage
            )));
        }

        if self.overlap_tokens > self.max_overlap_tokens() {
            return Err(Error::Configuration(format!(
                "overlap_tokens ({}) leaves no room for content: at most {} with chunk sizes {}..{}",
                self.overlap_tokens,
                self.max_overlap_tokens(),
                self.min_chunk_size,
                self.max_chunk_size
            )));
        }

        self.heuristics.validate()
    }

    /// Force the configuration into a consistent shape
    ///
    /// Reversed bounds are swapped, the target is clamped into the bounds
    /// and overlap is reduced until a chunk's own content plus padding on
    /// both sides fits in `max_chunk_size`.
    pub fn sanitized(self) -> Self {
        let (min, max) = if self.min_chunk_size > self.max_chunk_size {
            (self.max_chunk_size, self.min_chunk_size)
        } else {
            (self.min_chunk_size, self.max_chunk_size)
        };
        let max = max.max(1);

        let mut config = Self {
            min_chunk_size: min,
            max_chunk_size: max,
            target_chunk_size: self.target_chunk_size.clamp(min, max),
            overlap_percentage: self
                .overlap_percentage
                .min(defaults::MAX_OVERLAP_PERCENTAGE),
            heuristics: self.heuristics.sanitized(),
            ..self
        };
        config.overlap_tokens = config.overlap_tokens.min(config.max_overlap_tokens());
        config
    }

    /// Word budget for a chunk's own content, before overlap padding
    pub fn ceiling(&self) -> usize {
        self.max_chunk_size
            .saturating_sub(self.overlap_tokens.saturating_mul(2))
            .max(1)
    }

    /// Structure analyzer honouring the detector toggles
    pub fn analyzer(&self) -> StructureAnalyzer {
        StructureAnalyzer::new()
            .with_headers(self.detect_headers)
            .with_lists(self.detect_lists)
            .with_quotes(self.detect_quotes)
            .with_code_blocks(self.detect_code_blocks)
            .with_min_quote_chars(self.heuristics.min_quote_chars)
    }

    /// Largest overlap that keeps the ceiling at or above `min_chunk_size`
    fn max_overlap_tokens(&self) -> usize {
        self.max_chunk_size
            .saturating_sub(self.min_chunk_size.max(1))
            / 2
    }
}

/// Fluent builder for [`ChunkingConfiguration`]
#[derive(Debug, Default)]
pub struct ChunkingConfigurationBuilder {
    config: ChunkingConfiguration,
}

impl ChunkingConfigurationBuilder {
    /// Create a builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a preset
    pub fn preset(mut self, preset: Preset) -> Self {
        let heuristics = std::mem::take(&mut self.config.heuristics);
        self.config = ChunkingConfiguration {
            heuristics,
            ..preset.configuration()
        };
        self
    }

    pub fn min_chunk_size(mut self, words: usize) -> Self {
        self.config.min_chunk_size = words;
        self
    }

    pub fn max_chunk_size(mut self, words: usize) -> Self {
        self.config.max_chunk_size = words;
        self
    }

    pub fn target_chunk_size(mut self, words: usize) -> Self {
        self.config.target_chunk_size = words;
        self
    }

    pub fn overlap_tokens(mut self, words: usize) -> Self {
        self.config.overlap_tokens = words;
        self
    }

    pub fn overlap_percentage(mut self, percent: u8) -> Self {
        self.config.overlap_percentage = percent;
        self
    }

    pub fn preserve_sentences(mut self, enabled: bool) -> Self {
        self.config.preserve_sentences = enabled;
        self
    }

    pub fn preserve_paragraphs(mut self, enabled: bool) -> Self {
        self.config.preserve_paragraphs = enabled;
        self
    }

    pub fn preserve_sections(mut self, enabled: bool) -> Self {
        self.config.preserve_sections = enabled;
        self
    }

    pub fn detect_headers(mut self, enabled: bool) -> Self {
        self.config.detect_headers = enabled;
        self
    }

    pub fn detect_lists(mut self, enabled: bool) -> Self {
        self.config.detect_lists = enabled;
        self
    }

    pub fn detect_code_blocks(mut self, enabled: bool) -> Self {
        self.config.detect_code_blocks = enabled;
        self
    }

    pub fn detect_quotes(mut self, enabled: bool) -> Self {
        self.config.detect_quotes = enabled;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn heuristics(mut self, heuristics: Heuristics) -> Self {
        self.config.heuristics = heuristics;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ChunkingConfiguration> {
        self.config.validate()?;
        Ok(self.config)
    }
}
