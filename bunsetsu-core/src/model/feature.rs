//! Feature patterns and canonical feature keys
//!
//! A key is a pattern name followed by the block codes the pattern sees,
//! e.g. `UB4062` or `TB2071062071`.

use crate::character_window::{ContextWindow, WINDOW_SIZE};
use crate::types::BlockCode;
use core::fmt;
use smallvec::SmallVec;

/// Number of patterns evaluated per window
pub const FEATURE_COUNT: usize = 13;

/// Length of a pattern name
const NAME_LEN: usize = 3;

/// One n-gram pattern over a contiguous slice of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturePattern {
    /// Three-letter name used as the key prefix
    pub name: &'static str,
    /// First window slot covered
    pub start: usize,
    /// Number of slots covered (1, 2 or 3)
    pub arity: usize,
}

impl FeaturePattern {
    const fn new(name: &'static str, start: usize, arity: usize) -> Self {
        Self { name, start, arity }
    }

    /// Key length for this pattern
    pub const fn key_len(&self) -> usize {
        NAME_LEN + self.arity * BlockCode::WIDTH
    }
}

/// The fixed pattern set: unigrams, then bigrams, then trigrams
pub const PATTERNS: [FeaturePattern; FEATURE_COUNT] = [
    FeaturePattern::new("UB1", 0, 1),
    FeaturePattern::new("UB2", 1, 1),
    FeaturePattern::new("UB3", 2, 1),
    FeaturePattern::new("UB4", 3, 1),
    FeaturePattern::new("UB5", 4, 1),
    FeaturePattern::new("UB6", 5, 1),
    FeaturePattern::new("BB1", 1, 2),
    FeaturePattern::new("BB2", 2, 2),
    FeaturePattern::new("BB3", 3, 2),
    FeaturePattern::new("TB1", 0, 3),
    FeaturePattern::new("TB2", 1, 3),
    FeaturePattern::new("TB3", 2, 3),
    FeaturePattern::new("TB4", 3, 3),
];

// Every pattern must stay inside the window
const _: () = {
    let mut i = 0;
    while i < FEATURE_COUNT {
        let p = PATTERNS[i];
        assert!(p.arity >= 1 && p.arity <= 3);
        assert!(p.start + p.arity <= WINDOW_SIZE);
        assert!(p.name.len() == NAME_LEN);
        i += 1;
    }
};

/// Canonical feature key, stored inline
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FeatureKey {
    bytes: SmallVec<[u8; 16]>,
}

impl FeatureKey {
    /// Key observed by `pattern` in `window`
    pub fn observe(pattern: &FeaturePattern, window: &ContextWindow) -> Self {
        let mut bytes = SmallVec::new();
        bytes.extend_from_slice(pattern.name.as_bytes());
        for element in &window.elements()[pattern.start..pattern.start + pattern.arity] {
            bytes.extend_from_slice(&element.block().digits());
        }
        Self { bytes }
    }

    /// Raw ASCII bytes of the key
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Validate a key from a model resource and return its pattern
    pub fn parse(key: &str) -> Result<&'static FeaturePattern, String> {
        if !key.is_ascii() {
            return Err("key must be ASCII".to_string());
        }
        let name = key
            .get(..NAME_LEN)
            .ok_or_else(|| "key is shorter than a pattern name".to_string())?;
        let pattern = PATTERNS
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| format!("unknown pattern '{name}'"))?;

        let codes = &key[NAME_LEN..];
        if codes.len() != pattern.arity * BlockCode::WIDTH {
            return Err(format!(
                "pattern {} expects {} block code(s)",
                pattern.name, pattern.arity
            ));
        }
        if !codes.bytes().all(|b| b.is_ascii_digit()) {
            return Err("block codes must be decimal digits".to_string());
        }
        Ok(pattern)
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bytes.iter() {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureKey({self})")
    }
}

/// All thirteen keys for a window, in pattern order
pub fn feature_keys(window: &ContextWindow) -> [FeatureKey; FEATURE_COUNT] {
    core::array::from_fn(|i| FeatureKey::observe(&PATTERNS[i], window))
}
