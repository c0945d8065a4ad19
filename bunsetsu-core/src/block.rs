//! Unicode block classification
//!
//! Maps characters to the fixed-width block codes used in feature keys.
//! Block ids follow ICU's `UBlockCode` numbering so that weight tables
//! trained against ICU block ids can be used as-is.

use crate::types::{BlockCode, Element};
use std::sync::Arc;

/// Unicode block-property lookup
pub trait BlockLookup: Send + Sync {
    /// Block id of a character, `0` when it belongs to no known block
    fn block_id(&self, ch: char) -> u16;
}

/// Built-in block table
///
/// Covers ids 1 through 145. Characters in blocks added to Unicode after
/// that numbering map to `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeBlocks;

/// `(first, last, id)` sorted by `first`, non-overlapping
const BLOCKS: &[(u32, u32, u16)] = &[
    (0x0000, 0x007F, 1),   // Basic Latin
    (0x0080, 0x00FF, 2),   // Latin-1 Supplement
    (0x0100, 0x017F, 3),   // Latin Extended-A
    (0x0180, 0x024F, 4),   // Latin Extended-B
    (0x0250, 0x02AF, 5),   // IPA Extensions
    (0x02B0, 0x02FF, 6),   // Spacing Modifier Letters
    (0x0300, 0x036F, 7),   // Combining Diacritical Marks
    (0x0370, 0x03FF, 8),   // Greek and Coptic
    (0x0400, 0x04FF, 9),   // Cyrillic
    (0x0500, 0x052F, 97),  // Cyrillic Supplement
    (0x0530, 0x058F, 10),  // Armenian
    (0x0590, 0x05FF, 11),  // Hebrew
    (0x0600, 0x06FF, 12),  // Arabic
    (0x0700, 0x074F, 13),  // Syriac
    (0x0750, 0x077F, 128), // Arabic Supplement
    (0x0780, 0x07BF, 14),  // Thaana
    (0x0900, 0x097F, 15),  // Devanagari
    (0x0980, 0x09FF, 16),  // Bengali
    (0x0A00, 0x0A7F, 17),  // Gurmukhi
    (0x0A80, 0x0AFF, 18),  // Gujarati
    (0x0B00, 0x0B7F, 19),  // Oriya
    (0x0B80, 0x0BFF, 20),  // Tamil
    (0x0C00, 0x0C7F, 21),  // Telugu
    (0x0C80, 0x0CFF, 22),  // Kannada
    (0x0D00, 0x0D7F, 23),  // Malayalam
    (0x0D80, 0x0DFF, 24),  // Sinhala
    (0x0E00, 0x0E7F, 25),  // Thai
    (0x0E80, 0x0EFF, 26),  // Lao
    (0x0F00, 0x0FFF, 27),  // Tibetan
    (0x1000, 0x109F, 28),  // Myanmar
    (0x10A0, 0x10FF, 29),  // Georgian
    (0x1100, 0x11FF, 30),  // Hangul Jamo
    (0x1200, 0x137F, 31),  // Ethiopic
    (0x1380, 0x139F, 134), // Ethiopic Supplement
    (0x13A0, 0x13FF, 32),  // Cherokee
    (0x1400, 0x167F, 33),  // Unified Canadian Aboriginal Syllabics
    (0x1680, 0x169F, 34),  // Ogham
    (0x16A0, 0x16FF, 35),  // Runic
    (0x1700, 0x171F, 98),  // Tagalog
    (0x1720, 0x173F, 99),  // Hanunoo
    (0x1740, 0x175F, 100), // Buhid
    (0x1760, 0x177F, 101), // Tagbanwa
    (0x1780, 0x17FF, 36),  // Khmer
    (0x1800, 0x18AF, 37),  // Mongolian
    (0x1900, 0x194F, 111), // Limbu
    (0x1950, 0x197F, 112), // Tai Le
    (0x1980, 0x19DF, 139), // New Tai Lue
    (0x19E0, 0x19FF, 113), // Khmer Symbols
    (0x1A00, 0x1A1F, 129), // Buginese
    (0x1D00, 0x1D7F, 114), // Phonetic Extensions
    (0x1D80, 0x1DBF, 141), // Phonetic Extensions Supplement
    (0x1DC0, 0x1DFF, 131), // Combining Diacritical Marks Supplement
    (0x1E00, 0x1EFF, 38),  // Latin Extended Additional
    (0x1F00, 0x1FFF, 39),  // Greek Extended
    (0x2000, 0x206F, 40),  // General Punctuation
    (0x2070, 0x209F, 41),  // Superscripts and Subscripts
    (0x20A0, 0x20CF, 42),  // Currency Symbols
    (0x20D0, 0x20FF, 43),  // Combining Marks for Symbols
    (0x2100, 0x214F, 44),  // Letterlike Symbols
    (0x2150, 0x218F, 45),  // Number Forms
    (0x2190, 0x21FF, 46),  // Arrows
    (0x2200, 0x22FF, 47),  // Mathematical Operators
    (0x2300, 0x23FF, 48),  // Miscellaneous Technical
    (0x2400, 0x243F, 49),  // Control Pictures
    (0x2440, 0x245F, 50),  // Optical Character Recognition
    (0x2460, 0x24FF, 51),  // Enclosed Alphanumerics
    (0x2500, 0x257F, 52),  // Box Drawing
    (0x2580, 0x259F, 53),  // Block Elements
    (0x25A0, 0x25FF, 54),  // Geometric Shapes
    (0x2600, 0x26FF, 55),  // Miscellaneous Symbols
    (0x2700, 0x27BF, 56),  // Dingbats
    (0x27C0, 0x27EF, 102), // Miscellaneous Mathematical Symbols-A
    (0x27F0, 0x27FF, 103), // Supplemental Arrows-A
    (0x2800, 0x28FF, 57),  // Braille Patterns
    (0x2900, 0x297F, 104), // Supplemental Arrows-B
    (0x2980, 0x29FF, 105), // Miscellaneous Mathematical Symbols-B
    (0x2A00, 0x2AFF, 106), // Supplemental Mathematical Operators
    (0x2B00, 0x2BFF, 115), // Miscellaneous Symbols and Arrows
    (0x2C00, 0x2C5F, 136), // Glagolitic
    (0x2C80, 0x2CFF, 132), // Coptic
    (0x2D00, 0x2D2F, 135), // Georgian Supplement
    (0x2D30, 0x2D7F, 144), // Tifinagh
    (0x2D80, 0x2DDF, 133), // Ethiopic Extended
    (0x2E00, 0x2E7F, 142), // Supplemental Punctuation
    (0x2E80, 0x2EFF, 58),  // CJK Radicals Supplement
    (0x2F00, 0x2FDF, 59),  // Kangxi Radicals
    (0x2FF0, 0x2FFF, 60),  // Ideographic Description Characters
    (0x3000, 0x303F, 61),  // CJK Symbols and Punctuation
    (0x3040, 0x309F, 62),  // Hiragana
    (0x30A0, 0x30FF, 63),  // Katakana
    (0x3100, 0x312F, 64),  // Bopomofo
    (0x3130, 0x318F, 65),  // Hangul Compatibility Jamo
    (0x3190, 0x319F, 66),  // Kanbun
    (0x31A0, 0x31BF, 67),  // Bopomofo Extended
    (0x31C0, 0x31EF, 130), // CJK Strokes
    (0x31F0, 0x31FF, 107), // Katakana Phonetic Extensions
    (0x3200, 0x32FF, 68),  // Enclosed CJK Letters and Months
    (0x3300, 0x33FF, 69),  // CJK Compatibility
    (0x3400, 0x4DBF, 70),  // CJK Unified Ideographs Extension A
    (0x4DC0, 0x4DFF, 116), // Yijing Hexagram Symbols
    (0x4E00, 0x9FFF, 71),  // CJK Unified Ideographs
    (0xA000, 0xA48F, 72),  // Yi Syllables
    (0xA490, 0xA4CF, 73),  // Yi Radicals
    (0xA700, 0xA71F, 138), // Modifier Tone Letters
    (0xA800, 0xA82F, 143), // Syloti Nagri
    (0xAC00, 0xD7AF, 74),  // Hangul Syllables
    (0xE000, 0xF8FF, 78),  // Private Use Area
    (0xF900, 0xFAFF, 79),  // CJK Compatibility Ideographs
    (0xFB00, 0xFB4F, 80),  // Alphabetic Presentation Forms
    (0xFB50, 0xFDFF, 81),  // Arabic Presentation Forms-A
    (0xFE00, 0xFE0F, 108), // Variation Selectors
    (0xFE10, 0xFE1F, 145), // Vertical Forms
    (0xFE20, 0xFE2F, 82),  // Combining Half Marks
    (0xFE30, 0xFE4F, 83),  // CJK Compatibility Forms
    (0xFE50, 0xFE6F, 84),  // Small Form Variants
    (0xFE70, 0xFEFF, 85),  // Arabic Presentation Forms-B
    (0xFF00, 0xFFEF, 87),  // Halfwidth and Fullwidth Forms
    (0xFFF0, 0xFFFF, 86),  // Specials
    (0x10000, 0x1007F, 117), // Linear B Syllabary
    (0x10080, 0x100FF, 118), // Linear B Ideograms
    (0x10100, 0x1013F, 119), // Aegean Numbers
    (0x10140, 0x1018F, 127), // Ancient Greek Numbers
    (0x10300, 0x1032F, 88),  // Old Italic
    (0x10330, 0x1034F, 89),  // Gothic
    (0x10380, 0x1039F, 120), // Ugaritic
    (0x103A0, 0x103DF, 140), // Old Persian
    (0x10400, 0x1044F, 90),  // Deseret
    (0x10450, 0x1047F, 121), // Shavian
    (0x10480, 0x104AF, 122), // Osmanya
    (0x10800, 0x1083F, 123), // Cypriot Syllabary
    (0x10A00, 0x10A5F, 137), // Kharoshthi
    (0x1D000, 0x1D0FF, 91),  // Byzantine Musical Symbols
    (0x1D100, 0x1D1FF, 92),  // Musical Symbols
    (0x1D200, 0x1D24F, 126), // Ancient Greek Musical Notation
    (0x1D300, 0x1D35F, 124), // Tai Xuan Jing Symbols
    (0x1D400, 0x1D7FF, 93),  // Mathematical Alphanumeric Symbols
    (0x20000, 0x2A6DF, 94),  // CJK Unified Ideographs Extension B
    (0x2F800, 0x2FA1F, 95),  // CJK Compatibility Ideographs Supplement
    (0xE0000, 0xE007F, 96),  // Tags
    (0xE0100, 0xE01EF, 125), // Variation Selectors Supplement
    (0xF0000, 0xFFFFF, 109), // Supplementary Private Use Area-A
    (0x100000, 0x10FFFF, 110), // Supplementary Private Use Area-B
];

impl BlockLookup for UnicodeBlocks {
    #[inline]
    fn block_id(&self, ch: char) -> u16 {
        let cp = ch as u32;
        // Index of the first block starting after `cp`; the candidate is the one before it
        let idx = BLOCKS.partition_point(|&(first, _, _)| first <= cp);
        match idx.checked_sub(1).map(|i| BLOCKS[i]) {
            Some((_, last, id)) if cp <= last => id,
            _ => 0,
        }
    }
}

/// Maps characters to block codes
#[derive(Clone)]
pub struct BlockClassifier {
    lookup: Arc<dyn BlockLookup>,
}

impl BlockClassifier {
    /// Classifier backed by the built-in block table
    pub fn new() -> Self {
        Self::with_lookup(Arc::new(UnicodeBlocks))
    }

    /// Classifier backed by an external block-property facility
    pub fn with_lookup(lookup: Arc<dyn BlockLookup>) -> Self {
        Self { lookup }
    }

    /// Block code of a character; `None` yields the sentinel code
    #[inline]
    pub fn classify(&self, ch: Option<char>) -> BlockCode {
        match ch {
            Some(ch) => BlockCode::from_id(self.lookup.block_id(ch)),
            None => BlockCode::SENTINEL,
        }
    }

    /// Build a window element; `None` yields a sentinel
    #[inline]
    pub fn element(&self, ch: Option<char>) -> Element {
        match ch {
            Some(ch) => Element::new(ch, self.classify(Some(ch))),
            None => Element::SENTINEL,
        }
    }
}

impl Default for BlockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BlockClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockClassifier").finish_non_exhaustive()
    }
}
