//! Code point set membership
//!
//! The engine only ever asks "is this character in the set". `CharSet` is
//! the built-in implementation: an ASCII table for the hot path plus
//! sorted, merged ranges for everything else.

use crate::error::{EngineError, Result};
use core::ops::RangeInclusive;

/// Membership test over code points
pub trait CodePointSet: Send + Sync {
    /// Whether the character belongs to the set
    fn contains(&self, ch: char) -> bool;
}

/// Set of characters built from single characters and inclusive ranges
#[derive(Debug, Clone)]
pub struct CharSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII ranges, sorted and merged
    ranges: Vec<(char, char)>,
}

impl CharSet {
    /// The empty set
    pub fn empty() -> Self {
        Self {
            ascii_table: [false; 128],
            ranges: Vec::new(),
        }
    }

    /// Build from inclusive ranges
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = RangeInclusive<char>>,
    {
        let mut ascii_table = [false; 128];
        let mut wide = Vec::new();

        for range in ranges {
            let (lo, hi) = (*range.start(), *range.end());
            if lo > hi {
                continue;
            }
            for cp in (lo as u32)..=(hi as u32).min(0x7F) {
                ascii_table[cp as usize] = true;
            }
            if hi as u32 > 0x7F {
                let lo = if (lo as u32) < 0x80 { '\u{80}' } else { lo };
                wide.push((lo, hi));
            }
        }

        wide.sort_unstable();
        let mut ranges: Vec<(char, char)> = Vec::with_capacity(wide.len());
        for (lo, hi) in wide {
            match ranges.last_mut() {
                Some(last) if (lo as u32) <= (last.1 as u32).saturating_add(1) => {
                    if hi > last.1 {
                        last.1 = hi;
                    }
                }
                _ => ranges.push((lo, hi)),
            }
        }

        Self {
            ascii_table,
            ranges,
        }
    }

    /// Build from individual characters
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self::from_ranges(chars.into_iter().map(|ch| ch..=ch))
    }

    /// Build from configuration entries
    ///
    /// Each entry is either one character (`"「"`) or a range written as
    /// three characters with a hyphen in the middle (`"０-９"`).
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let ranges = entries
            .iter()
            .map(|entry| parse_entry(entry.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_ranges(ranges))
    }

    /// Whether nothing is in the set
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty() && !self.ascii_table.iter().any(|&b| b)
    }
}

fn parse_entry(entry: &str) -> Result<RangeInclusive<char>> {
    let chars: Vec<char> = entry.chars().collect();
    match chars.as_slice() {
        [ch] => Ok(*ch..=*ch),
        [lo, '-', hi] if lo <= hi => Ok(*lo..=*hi),
        [lo, '-', hi] => Err(EngineError::Config(format!(
            "set range '{entry}' is reversed ({lo} > {hi})"
        ))),
        _ => Err(EngineError::Config(format!(
            "set entry '{entry}' must be a single character or a range like 'a-z'"
        ))),
    }
}

impl CodePointSet for CharSet {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            // Fast path: direct array lookup
            self.ascii_table[ch as usize]
        } else {
            let idx = self.ranges.partition_point(|&(lo, _)| lo <= ch);
            idx > 0 && ch <= self.ranges[idx - 1].1
        }
    }
}

impl Default for CharSet {
    fn default() -> Self {
        Self::empty()
    }
}
