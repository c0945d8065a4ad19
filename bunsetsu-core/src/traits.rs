//! Collaborator interfaces of the break engine
//!
//! The surrounding break-analysis framework supplies the text (addressed
//! by native offset) and the map from working-string indices back to
//! native offsets; it drives any `BreakEngine` through the same call.

use crate::error::{Result, ScanError};

/// A strategy that finds break positions inside a sub-range of text
pub trait BreakEngine: Send + Sync {
    /// Append break offsets strictly inside `range_start..range_end`
    ///
    /// `working` is the normalized text of the range and `offsets` maps
    /// its code point indices to native offsets in `text`. Returns the
    /// number of offsets appended. On error nothing is appended.
    fn divide_up_range(
        &self,
        text: &dyn TextSource,
        range_start: usize,
        range_end: usize,
        found_breaks: &mut Vec<usize>,
        working: &str,
        offsets: &dyn OffsetMap,
    ) -> Result<usize>;
}

/// Random-access text addressed by native offset
pub trait TextSource {
    /// Character starting at `offset`; `None` at the end of the text
    fn char_at(&self, offset: usize) -> std::result::Result<Option<char>, ScanError>;
}

/// UTF-8 text; native offsets are byte offsets
#[derive(Debug, Clone, Copy)]
pub struct Utf8Text<'a>(pub &'a str);

impl TextSource for Utf8Text<'_> {
    fn char_at(&self, offset: usize) -> std::result::Result<Option<char>, ScanError> {
        if offset > self.0.len() {
            return Err(ScanError::TextUnavailable { offset });
        }
        self.0
            .get(offset..)
            .map(|rest| rest.chars().next())
            .ok_or(ScanError::InvalidTextOffset { offset })
    }
}

/// UTF-16 text; native offsets are code units
#[derive(Debug, Clone, Copy)]
pub struct Utf16Text<'a>(pub &'a [u16]);

impl TextSource for Utf16Text<'_> {
    fn char_at(&self, offset: usize) -> std::result::Result<Option<char>, ScanError> {
        if offset > self.0.len() {
            return Err(ScanError::TextUnavailable { offset });
        }
        match char::decode_utf16(self.0[offset..].iter().copied()).next() {
            None => Ok(None),
            Some(Ok(ch)) => Ok(Some(ch)),
            // Trailing surrogate or unpaired surrogate
            Some(Err(_)) => Err(ScanError::InvalidTextOffset { offset }),
        }
    }
}

/// Translation from working-string code point index to native offset
pub trait OffsetMap {
    /// Native offset of the code point at `index`
    fn native_offset(&self, index: usize) -> std::result::Result<usize, ScanError>;
}

impl OffsetMap for [usize] {
    fn native_offset(&self, index: usize) -> std::result::Result<usize, ScanError> {
        self.get(index)
            .copied()
            .ok_or(ScanError::OffsetUnavailable { index })
    }
}

impl OffsetMap for Vec<usize> {
    fn native_offset(&self, index: usize) -> std::result::Result<usize, ScanError> {
        self.as_slice().native_offset(index)
    }
}

/// One native unit per code point, starting at the range start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityOffsets {
    /// Native offset of the first code point
    pub range_start: usize,
}

impl OffsetMap for IdentityOffsets {
    fn native_offset(&self, index: usize) -> std::result::Result<usize, ScanError> {
        self.range_start
            .checked_add(index)
            .ok_or(ScanError::OffsetUnavailable { index })
    }
}

/// Precomputed offset table for un-normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable {
    offsets: Vec<usize>,
}

impl OffsetTable {
    /// Byte offsets of each character of `working`, shifted by `range_start`
    ///
    /// Includes the offset one past the last character.
    pub fn utf8(range_start: usize, working: &str) -> Self {
        let offsets = working
            .char_indices()
            .map(|(i, _)| range_start + i)
            .chain(std::iter::once(range_start + working.len()))
            .collect();
        Self { offsets }
    }

    /// UTF-16 code unit offsets of each character of `working`
    pub fn utf16(range_start: usize, working: &str) -> Self {
        let mut offsets = Vec::with_capacity(working.len() + 1);
        let mut pos = range_start;
        for ch in working.chars() {
            offsets.push(pos);
            pos += ch.len_utf16();
        }
        offsets.push(pos);
        Self { offsets }
    }

    /// The underlying offsets
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }
}

impl OffsetMap for OffsetTable {
    fn native_offset(&self, index: usize) -> std::result::Result<usize, ScanError> {
        self.offsets.native_offset(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_source() {
        let text = Utf8Text("aあ");
        assert_eq!(text.char_at(0), Ok(Some('a')));
        assert_eq!(text.char_at(1), Ok(Some('あ')));
        assert_eq!(text.char_at(4), Ok(None));
        assert_eq!(text.char_at(2), Err(ScanError::InvalidTextOffset { offset: 2 }));
        assert_eq!(text.char_at(9), Err(ScanError::TextUnavailable { offset: 9 }));
    }

    #[test]
    fn test_utf16_source() {
        let units: Vec<u16> = "𠮷野".encode_utf16().collect();
        let text = Utf16Text(&units);
        assert_eq!(text.char_at(0), Ok(Some('𠮷')));
        assert_eq!(text.char_at(2), Ok(Some('野')));
        assert_eq!(text.char_at(3), Ok(None));
        assert!(text.char_at(1).is_err());
    }

    #[test]
    fn test_offset_tables() {
        let utf8 = OffsetTable::utf8(10, "aあ𠮷");
        assert_eq!(utf8.as_slice(), &[10, 11, 14, 18]);

        let utf16 = OffsetTable::utf16(10, "aあ𠮷");
        assert_eq!(utf16.as_slice(), &[10, 11, 12, 14]);

        assert_eq!(
            utf8.native_offset(4),
            Err(ScanError::OffsetUnavailable { index: 4 })
        );
    }

    #[test]
    fn test_identity_offsets() {
        let map = IdentityOffsets { range_start: 7 };
        assert_eq!(map.native_offset(3), Ok(10));
    }

    #[test]
    fn test_slice_offsets() {
        let map = vec![0usize, 3, 6];
        assert_eq!(map.native_offset(1), Ok(3));
        assert!(map.as_slice().native_offset(3).is_err());
    }
}
