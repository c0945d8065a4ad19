//! Core types shared by the classifier, window and evaluator

use core::fmt;

/// Fixed-width canonical encoding of a Unicode block id
///
/// Always rendered as three zero-padded decimal digits. `999` is reserved
/// for sentinel elements and never produced for a real character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockCode(u16);

impl BlockCode {
    /// Code of characters outside every known block
    pub const NO_BLOCK: BlockCode = BlockCode(0);

    /// Code carried by sentinel (padding) elements
    pub const SENTINEL: BlockCode = BlockCode(999);

    /// Width of the rendered code in ASCII digits
    pub const WIDTH: usize = 3;

    /// Encode a block id; ids that would reach the sentinel collapse to `NO_BLOCK`
    pub fn from_id(id: u16) -> Self {
        if id >= Self::SENTINEL.0 {
            Self::NO_BLOCK
        } else {
            BlockCode(id)
        }
    }

    /// Numeric block id
    pub fn id(self) -> u16 {
        self.0
    }

    /// Whether this is the sentinel code
    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    /// ASCII digits of the code, most significant first
    #[inline]
    pub fn digits(self) -> [u8; 3] {
        let id = self.0;
        [
            b'0' + (id / 100) as u8,
            b'0' + (id / 10 % 10) as u8,
            b'0' + (id % 10) as u8,
        ]
    }
}

impl fmt::Display for BlockCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// A classified character inside the context window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    character: Option<char>,
    block: BlockCode,
    code_units: u8,
}

impl Element {
    /// Padding element used beyond either end of the working string
    pub const SENTINEL: Element = Element {
        character: None,
        block: BlockCode::SENTINEL,
        code_units: 0,
    };

    /// Element for a real character
    pub fn new(ch: char, block: BlockCode) -> Self {
        Self {
            character: Some(ch),
            block,
            code_units: ch.len_utf16() as u8,
        }
    }

    /// The character, `None` for sentinels
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Block code of the character
    pub fn block(&self) -> BlockCode {
        self.block
    }

    /// UTF-16 code units occupied by the character (0 for sentinels)
    pub fn code_units(&self) -> usize {
        self.code_units as usize
    }

    /// Whether this is a padding element
    pub fn is_sentinel(&self) -> bool {
        self.character.is_none()
    }
}

/// Outcome of evaluating one candidate position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// A phrase boundary is placed at the position
    Break,
    /// No boundary at the position
    NoBreak,
}

impl Decision {
    /// Whether this is a break
    pub fn is_break(self) -> bool {
        self == Decision::Break
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Break => write!(f, "break"),
            Decision::NoBreak => write!(f, "no-break"),
        }
    }
}
