//! Output formatting module

use anyhow::Result;
use bunsetsu_core::split_at_breaks;

/// One segmented input line
#[derive(Debug, Clone, Copy)]
pub struct SegmentedLine<'a> {
    /// Display name of the source file
    pub file: &'a str,
    /// 1-based line number
    pub line: usize,
    /// Line text without its terminator
    pub text: &'a str,
    /// Break offsets in bytes from the start of the line
    pub breaks: &'a [usize],
}

impl<'a> SegmentedLine<'a> {
    /// The line split at its breaks
    pub fn phrases(&self) -> Vec<&'a str> {
        split_at_breaks(self.text, self.breaks)
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single segmented line
    fn format_line(&mut self, line: &SegmentedLine<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
