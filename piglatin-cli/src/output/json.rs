//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use piglatin_core::segments;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs translations as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<TranslationData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationData {
    /// 1-based line number in the input
    pub line: usize,
    /// The source text
    pub source: String,
    /// The Pig Latin text
    pub translation: String,
    /// Number of word runs translated
    pub words: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, source: &str, translation: &str, line: usize) -> Result<()> {
        self.records.push(TranslationData {
            line,
            source: source.to_string(),
            translation: translation.to_string(),
            words: segments(source).filter(|s| s.is_word()).count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
