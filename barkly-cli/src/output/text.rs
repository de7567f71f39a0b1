//! Plain text output formatter

use super::{ChunkedDocument, OutputFormatter};
use anyhow::Result;
use barkly_core::Chunk;
use std::io::Write;

/// Plain text formatter - each chunk follows a separator line
pub struct TextFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
        }
    }

    fn separator(&self, source: &str, chunk: &Chunk) -> String {
        let meta = &chunk.metadata;
        let mut line = format!(
            "--- {source} | chunk {}/{}",
            meta.chunk_number, meta.total_chunks
        );
        if self.include_metadata {
            line.push_str(&format!(
                " | {} words | {}",
                meta.word_count, meta.content_type
            ));
            if let Some(header) = &meta.header_text {
                line.push_str(&format!(" | {header}"));
            }
        }
        line.push_str(" ---");
        line
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &ChunkedDocument) -> Result<()> {
        for chunk in &document.chunks {
            let separator = self.separator(&document.source, chunk);
            writeln!(self.writer, "{separator}")?;
            writeln!(self.writer, "{}", chunk.text)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_document;

    fn render(include_metadata: bool) -> String {
        let mut formatter = TextFormatter::new(Vec::new(), include_metadata);
        formatter.format_document(&sample_document()).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_separator_with_metadata() {
        let output = render(true);
        assert!(output.starts_with("--- notes.md | chunk 1/2 | 7 words | text | Harbor ---\n"));
        assert!(output.contains("# Harbor\n\nThe elders met at dawn.\n"));
        assert!(output.contains("--- notes.md | chunk 2/2 |"));
    }

    #[test]
    fn test_separator_without_metadata() {
        let output = render(false);
        assert!(output.starts_with("--- notes.md | chunk 1/2 ---\n"));
        assert!(!output.contains("words"));
    }
}
