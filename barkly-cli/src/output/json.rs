//! JSON output formatter

use super::{ChunkedDocument, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs one array holding every document
///
/// Documents are buffered until [`OutputFormatter::finish`] so that the
/// output is a single valid JSON value.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<ChunkedDocument>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &ChunkedDocument) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
