//! Six-element context window around a candidate boundary
//!
//! The window holds `[w0, w1, w2 | w3, w4, w5]`: three classified
//! characters before the candidate boundary and three after it. Positions
//! that fall outside the working string hold sentinel elements, so the
//! width never changes and feature construction needs no special cases.

use crate::block::BlockClassifier;
use crate::types::Element;

/// Number of elements in the window
pub const WINDOW_SIZE: usize = 6;

/// Slot of the last element before the candidate boundary
pub const BEFORE: usize = 2;

/// Slot of the first element after the candidate boundary
pub const AFTER: usize = 3;

/// Sliding window of classified characters
///
/// All operations are O(1); sliding shifts a fixed array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    elements: [Element; WINDOW_SIZE],
}

impl ContextWindow {
    /// Build the window for the boundary before the second character
    ///
    /// Reads up to four characters from `chars` into slots 2..=5. Slots 0
    /// and 1 and any shortfall are sentinels. Returns the window and the
    /// UTF-16 code units consumed by the real elements, which is where the
    /// scan cursor stands in the working string.
    pub fn initialize<I>(chars: &mut I, classifier: &BlockClassifier) -> (Self, usize)
    where
        I: Iterator<Item = char>,
    {
        let mut elements = [Element::SENTINEL; WINDOW_SIZE];
        let mut consumed = 0;

        for slot in elements.iter_mut().skip(BEFORE) {
            match chars.next() {
                Some(ch) => {
                    *slot = classifier.element(Some(ch));
                    consumed += slot.code_units();
                }
                None => break,
            }
        }

        (Self { elements }, consumed)
    }

    /// Drop the oldest element and admit `next` at the right edge
    #[inline]
    pub fn slide(&mut self, next: Element) {
        self.elements.rotate_left(1);
        self.elements[WINDOW_SIZE - 1] = next;
    }

    /// All six elements, oldest first
    #[inline]
    pub fn elements(&self) -> &[Element; WINDOW_SIZE] {
        &self.elements
    }

    /// Last element before the candidate boundary
    #[inline]
    pub fn before(&self) -> &Element {
        &self.elements[BEFORE]
    }

    /// First element after the candidate boundary
    #[inline]
    pub fn after(&self) -> &Element {
        &self.elements[AFTER]
    }
}
