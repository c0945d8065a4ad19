//! Plain text output formatter

use super::{OutputFormatter, SegmentedLine};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one line per input line, phrases joined by a separator
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: &str) -> Self {
        Self {
            writer,
            separator: separator.to_string(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &SegmentedLine<'_>) -> Result<()> {
        writeln!(self.writer, "{}", line.phrases().join(&self.separator))?;
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

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, " / ");
            formatter
                .format_line(&SegmentedLine {
                    file: "a.txt",
                    line: 1,
                    text: "私は東京に行きます。",
                    breaks: &[6, 15],
                })
                .unwrap();
            formatter
                .format_line(&SegmentedLine {
                    file: "a.txt",
                    line: 2,
                    text: "",
                    breaks: &[],
                })
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "私は / 東京に / 行きます。\n\n"
        );
    }
}
