//! JSON output formatter

use super::{OutputFormatter, SegmentedLine};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs segmented lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<PhraseRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct PhraseRecord {
    /// Source file
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// The line text
    pub text: String,
    /// Break offsets in bytes from the start of the line
    pub breaks: Vec<usize>,
    /// The line split at its breaks
    pub phrases: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &SegmentedLine<'_>) -> Result<()> {
        self.records.push(PhraseRecord {
            file: line.file.to_string(),
            line: line.line,
            text: line.text.to_string(),
            breaks: line.breaks.to_vec(),
            phrases: line.phrases().into_iter().map(str::to_string).collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
