//! Chunk command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{ChunkedDocument, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use barkly_core::{
    AdaptiveChunker, Chunk, ChunkingConfiguration, ChunkingMethod, Lexicon, Preset,
    ResilientChunker, Strategy,
};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's choice]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Chunking strategy: semantic, structural, hybrid or sliding
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Start from a preset: academic, conversational, technical, maximum-coverage
    #[arg(short, long, value_name = "PRESET")]
    pub preset: Option<Preset>,

    /// Configuration file with [chunking] and [output] tables
    #[arg(short, long, value_name = "FILE", env = "BARKLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Custom word lists for transitions, keywords and stop words
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Maximum chunk size in words
    #[arg(long, value_name = "WORDS")]
    pub max: Option<usize>,

    /// Minimum chunk size in words
    #[arg(long, value_name = "WORDS")]
    pub min: Option<usize>,

    /// Target chunk size in words
    #[arg(long, value_name = "WORDS")]
    pub target: Option<usize>,

    /// Overlap between neighbouring chunks in words
    #[arg(long, value_name = "WORDS")]
    pub overlap: Option<usize>,

    /// Fall back to fixed-size chunking for text without structure
    #[arg(long)]
    pub fallback: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The chunker a run uses for every file
enum Engine {
    Adaptive(AdaptiveChunker),
    Resilient(ResilientChunker),
}

impl Engine {
    fn run(&self, text: &str) -> (Option<ChunkingMethod>, Vec<Chunk>) {
        match self {
            Engine::Adaptive(chunker) => (None, chunker.chunk_document(text)),
            Engine::Resilient(chunker) => {
                let outcome = chunker.chunk(text);
                (Some(outcome.method), outcome.chunks)
            }
        }
    }
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting document chunking");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let chunking = self.chunking_configuration(file_config.chunking)?;
        log::info!(
            "Strategy {} with chunks of {}..{} words (target {}, overlap {})",
            chunking.strategy,
            chunking.min_chunk_size,
            chunking.max_chunk_size,
            chunking.target_chunk_size,
            chunking.overlap_tokens
        );

        let engine = self.engine(chunking)?;
        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Found {} file(s), {} bytes",
            files.len(),
            FileReader::total_size(files.as_slice())?
        );

        let documents = self.chunk_files(&engine, &files)?;

        let output = &file_config.output;
        let format = self.format.unwrap_or(output.format);
        let writer = self.writer()?;
        let mut formatter = format.formatter(writer, output.include_metadata, output.pretty_json);
        for document in &documents {
            formatter.format_document(document)?;
        }
        formatter.finish()?;

        let total: usize = documents.iter().map(|d| d.chunks.len()).sum();
        log::info!("Wrote {total} chunks from {} file(s)", documents.len());
        Ok(())
    }

    /// Merge command-line overrides into the base configuration and validate
    ///
    /// A preset replaces the sizes and strategy of the base; explicit flags
    /// win over both.
    pub fn chunking_configuration(
        &self,
        base: ChunkingConfiguration,
    ) -> Result<ChunkingConfiguration, CliError> {
        let mut builder = base.to_builder();
        if let Some(preset) = self.preset {
            builder = builder.preset(preset);
        }
        if let Some(strategy) = self.strategy {
            builder = builder.strategy(strategy);
        }
        if let Some(max) = self.max {
            builder = builder.max_chunk_size(max);
        }
        if let Some(min) = self.min {
            builder = builder.min_chunk_size(min);
        }
        if let Some(target) = self.target {
            builder = builder.target_chunk_size(target);
        }
        if let Some(overlap) = self.overlap {
            builder = builder.overlap_tokens(overlap);
        }
        Ok(builder.build()?)
    }

    fn engine(&self, config: ChunkingConfiguration) -> Result<Engine> {
        let lexicon = match &self.lexicon {
            Some(path) => {
                let lexicon = Lexicon::from_file(path).map_err(CliError::from)?;
                log::info!("Using lexicon '{}' from {}", lexicon.name(), path.display());
                lexicon
            }
            None => Lexicon::default(),
        };

        let adaptive = AdaptiveChunker::with_lexicon(config, lexicon);
        Ok(if self.fallback {
            Engine::Resilient(ResilientChunker::from_adaptive(adaptive))
        } else {
            Engine::Adaptive(adaptive)
        })
    }

    fn chunk_files(&self, engine: &Engine, files: &[PathBuf]) -> Result<Vec<ChunkedDocument>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let work = || {
            files
                .par_iter()
                .map(|path| -> Result<ChunkedDocument> {
                    let document = chunk_file(engine, path)?;
                    progress.file_completed(&document.source, document.chunks.len());
                    Ok(document)
                })
                .collect::<Result<Vec<_>>>()
        };

        let documents = match self.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to start worker threads")?
                .install(work),
            None => work(),
        };

        progress.finish();
        documents
    }

    fn writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when running under a test harness
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn chunk_file(engine: &Engine, path: &Path) -> Result<ChunkedDocument> {
    let text = FileReader::read_text(path).map_err(|e| CliError::ProcessingError {
        path: path.to_path_buf(),
        message: format!("{e:#}"),
    })?;
    let (method, chunks) = engine.run(&text);

    let source = path.display().to_string();
    match method {
        Some(method) => log::debug!("{source}: {} chunks ({method})", chunks.len()),
        None => log::debug!("{source}: {} chunks", chunks.len()),
    }

    Ok(ChunkedDocument {
        source,
        method,
        chunks,
    })
}
