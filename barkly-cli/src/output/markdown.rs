//! Markdown output formatter

use super::{ChunkedDocument, OutputFormatter};
use anyhow::Result;
use barkly_core::Chunk;
use std::io::Write;

/// Markdown formatter - a heading per chunk and a summary footer
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
    chunk_count: usize,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
            chunk_count: 0,
            document_count: 0,
        }
    }

    fn write_metadata(&mut self, chunk: &Chunk) -> Result<()> {
        let meta = &chunk.metadata;
        writeln!(self.writer, "- Words: {}", meta.word_count)?;
        writeln!(self.writer, "- Sentences: {}", meta.sentence_count)?;
        writeln!(self.writer, "- Content: {}", meta.content_type)?;
        if let Some(header) = &meta.header_text {
            writeln!(self.writer, "- Header: {header}")?;
        }
        writeln!(self.writer, "- Importance: {:.2}", meta.contextual_importance)?;
        if !chunk.related_chunks.is_empty() {
            let related: Vec<String> = chunk
                .related_chunks
                .iter()
                .map(|i| (i + 1).to_string())
                .collect();
            writeln!(self.writer, "- Related: {}", related.join(", "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, document: &ChunkedDocument) -> Result<()> {
        self.document_count += 1;

        for chunk in &document.chunks {
            self.chunk_count += 1;
            writeln!(
                self.writer,
                "## {}: chunk {} of {}",
                document.source, chunk.metadata.chunk_number, chunk.metadata.total_chunks
            )?;
            writeln!(self.writer)?;
            if self.include_metadata {
                self.write_metadata(chunk)?;
            }
            writeln!(self.writer, "{}", chunk.text)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total chunks: {} from {} documents*",
            self.chunk_count, self.document_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
