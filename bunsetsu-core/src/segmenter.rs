//! Range scanning driver and the public `Engine`

use crate::block::{BlockClassifier, BlockLookup};
use crate::character_window::ContextWindow;
use crate::charset::{CharSet, CodePointSet};
use crate::config::EngineConfig;
use crate::error::{ModelLoadError, Result, ScanError};
use crate::evaluator::BoundaryEvaluator;
use crate::model::ScoringModel;
use crate::traits::{BreakEngine, OffsetMap, OffsetTable, TextSource, Utf8Text};
use crate::types::Element;
use std::sync::Arc;
use tracing::{debug, trace};

/// Machine-learned phrase break engine
///
/// Immutable after construction and safe to share between threads.
pub struct Engine {
    classifier: BlockClassifier,
    model: ScoringModel,
    digit_open_punct_alpha: Box<dyn CodePointSet>,
    close_punctuation: Box<dyn CodePointSet>,
    early_exit: bool,
}

impl Engine {
    /// Create an engine with the embedded model
    pub fn new(
        digit_open_punct_alpha: impl CodePointSet + 'static,
        close_punctuation: impl CodePointSet + 'static,
    ) -> std::result::Result<Self, ModelLoadError> {
        let model = ScoringModel::embedded()?;
        Ok(Self::builder(model)
            .digit_open_punct_alpha(digit_open_punct_alpha)
            .close_punctuation(close_punctuation)
            .build())
    }

    /// Engine configured for Japanese with the embedded model
    pub fn japanese() -> Result<Self> {
        EngineConfig::japanese()?.build_engine()
    }

    /// Builder around an already loaded model
    pub fn builder(model: ScoringModel) -> EngineBuilder {
        EngineBuilder::new(model)
    }

    /// The weight table in use
    pub fn model(&self) -> &ScoringModel {
        &self.model
    }

    /// Whether the negative-sum early exit is enabled
    pub fn early_exit(&self) -> bool {
        self.early_exit
    }

    fn evaluator(&self) -> BoundaryEvaluator<'_> {
        BoundaryEvaluator::new(
            &self.model,
            self.digit_open_punct_alpha.as_ref(),
            self.close_punctuation.as_ref(),
            self.early_exit,
        )
    }

    /// Break offsets (UTF-8 byte offsets) of a whole text treated as one range
    pub fn segment(&self, text: &str) -> Result<Vec<usize>> {
        let mut breaks = Vec::new();
        let offsets = OffsetTable::utf8(0, text);
        self.divide_up_range(&Utf8Text(text), 0, text.len(), &mut breaks, text, &offsets)?;
        Ok(breaks)
    }

    /// Split a text into phrases
    pub fn phrases<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let breaks = self.segment(text)?;
        Ok(split_at_breaks(text, &breaks))
    }

    fn scan(
        &self,
        text: &dyn TextSource,
        range_start: usize,
        range_end: usize,
        found_breaks: &mut Vec<usize>,
        working: &str,
        offsets: &dyn OffsetMap,
    ) -> Result<usize> {
        let total_units = working.encode_utf16().count();
        let evaluator = self.evaluator();
        let mut chars = working.chars();
        let (mut window, mut cursor) = ContextWindow::initialize(&mut chars, &self.classifier);
        let mut previous: Option<usize> = None;
        let mut appended = 0;
        let mut position = 1;

        // `cursor` counts the UTF-16 units admitted into the window; once it
        // reaches the end of the working string only sentinels slide in
        while !window.after().is_sentinel() {
            if evaluator.evaluate(&window, position).is_break() {
                let native = offsets.native_offset(position)?;
                if self.accept(text, native, range_start, range_end, previous)? {
                    trace!(position, native, "phrase break");
                    found_breaks.push(native);
                    appended += 1;
                }
                previous = Some(native);
            }

            let next = if cursor < total_units {
                self.classifier.element(chars.next())
            } else {
                Element::SENTINEL
            };
            cursor += next.code_units();
            window.slide(next);
            position += 1;
        }

        Ok(appended)
    }

    /// Filter a mapped native offset before it is emitted
    fn accept(
        &self,
        text: &dyn TextSource,
        native: usize,
        range_start: usize,
        range_end: usize,
        previous: Option<usize>,
    ) -> Result<bool> {
        if native >= range_end {
            return Err(ScanError::OffsetOutOfRange {
                offset: native,
                start: range_start,
                end: range_end,
            }
            .into());
        }
        if let Some(previous) = previous {
            if native < previous {
                return Err(ScanError::NonMonotonicOffset {
                    offset: native,
                    previous,
                }
                .into());
            }
            if native == previous {
                // Normalization expanded one native character into several
                debug!(native, "dropping duplicate native offset");
                return Ok(false);
            }
        }
        if native <= range_start {
            debug!(native, range_start, "dropping break at range start");
            return Ok(false);
        }

        match text.char_at(native)? {
            Some(ch) if self.close_punctuation.contains(ch) => {
                debug!(native, %ch, "suppressing break before closing punctuation");
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Err(ScanError::TextUnavailable { offset: native }.into()),
        }
    }
}

impl BreakEngine for Engine {
    fn divide_up_range(
        &self,
        text: &dyn TextSource,
        range_start: usize,
        range_end: usize,
        found_breaks: &mut Vec<usize>,
        working: &str,
        offsets: &dyn OffsetMap,
    ) -> Result<usize> {
        if range_start > range_end {
            return Err(ScanError::InvalidRange {
                start: range_start,
                end: range_end,
            }
            .into());
        }

        let mark = found_breaks.len();
        let result = self.scan(text, range_start, range_end, found_breaks, working, offsets);
        if result.is_err() {
            found_breaks.truncate(mark);
        }
        result
    }
}

/// Split `text` at ascending byte offsets
///
/// Offsets that are out of order, out of bounds or not on a character
/// boundary are skipped.
pub fn split_at_breaks<'t>(text: &'t str, breaks: &[usize]) -> Vec<&'t str> {
    let mut phrases = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;
    for &end in breaks {
        if end <= start || end >= text.len() || !text.is_char_boundary(end) {
            continue;
        }
        phrases.push(&text[start..end]);
        start = end;
    }
    if start < text.len() {
        phrases.push(&text[start..]);
    }
    phrases
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("model_entries", &self.model.len())
            .field("negative_sum", &self.model.negative_sum())
            .field("early_exit", &self.early_exit)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for `Engine`
pub struct EngineBuilder {
    model: ScoringModel,
    classifier: BlockClassifier,
    digit_open_punct_alpha: Box<dyn CodePointSet>,
    close_punctuation: Box<dyn CodePointSet>,
    early_exit: bool,
}

impl EngineBuilder {
    /// Start from a model; both character sets default to empty
    pub fn new(model: ScoringModel) -> Self {
        Self {
            model,
            classifier: BlockClassifier::new(),
            digit_open_punct_alpha: Box::new(CharSet::empty()),
            close_punctuation: Box::new(CharSet::empty()),
            early_exit: true,
        }
    }

    /// Digits, opening punctuation and alphabetic characters
    pub fn digit_open_punct_alpha(mut self, set: impl CodePointSet + 'static) -> Self {
        self.digit_open_punct_alpha = Box::new(set);
        self
    }

    /// Closing punctuation
    pub fn close_punctuation(mut self, set: impl CodePointSet + 'static) -> Self {
        self.close_punctuation = Box::new(set);
        self
    }

    /// Replace the built-in Unicode block table
    pub fn block_lookup(mut self, lookup: Arc<dyn BlockLookup>) -> Self {
        self.classifier = BlockClassifier::with_lookup(lookup);
        self
    }

    /// Enable or disable the negative-sum early exit
    pub fn early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Build the engine
    pub fn build(self) -> Engine {
        Engine {
            classifier: self.classifier,
            model: self.model,
            digit_open_punct_alpha: self.digit_open_punct_alpha,
            close_punctuation: self.close_punctuation,
            early_exit: self.early_exit,
        }
    }
}
