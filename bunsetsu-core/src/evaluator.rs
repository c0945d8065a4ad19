//! Break/no-break decision for one candidate position

use crate::character_window::ContextWindow;
use crate::charset::CodePointSet;
use crate::model::{feature_keys, ScoringModel};
use crate::types::Decision;
use tracing::trace;

/// Combines the character-class heuristics with the weight table
pub struct BoundaryEvaluator<'a> {
    model: &'a ScoringModel,
    digit_open_punct_alpha: &'a dyn CodePointSet,
    close_punctuation: &'a dyn CodePointSet,
    early_exit: bool,
}

impl<'a> BoundaryEvaluator<'a> {
    /// Create an evaluator borrowing the engine's immutable state
    pub fn new(
        model: &'a ScoringModel,
        digit_open_punct_alpha: &'a dyn CodePointSet,
        close_punctuation: &'a dyn CodePointSet,
        early_exit: bool,
    ) -> Self {
        Self {
            model,
            digit_open_punct_alpha,
            close_punctuation,
            early_exit,
        }
    }

    /// Decide whether the boundary between `w2` and `w3` is a phrase break
    ///
    /// `position` is the code point index of `w3` in the working string
    /// and is only used for tracing.
    pub fn evaluate(&self, window: &ContextWindow, position: usize) -> Decision {
        if let Some(decision) = self.fast_path(window) {
            trace!(position, %decision, "fast path");
            return decision;
        }

        let keys = feature_keys(window);
        let decision = if self.model.predicts_break(&keys, self.early_exit) {
            Decision::Break
        } else {
            Decision::NoBreak
        };
        trace!(position, %decision, "model");
        decision
    }

    /// Character-class rules that override the model
    fn fast_path(&self, window: &ContextWindow) -> Option<Decision> {
        let after = window.after().character()?;

        // Closing punctuation stays attached to what precedes it
        if self.close_punctuation.contains(after) {
            return Some(Decision::NoBreak);
        }

        if self.digit_open_punct_alpha.contains(after) {
            let before = window.before().character()?;
            return Some(if self.digit_open_punct_alpha.contains(before) {
                Decision::NoBreak
            } else {
                Decision::Break
            });
        }

        None
    }
}
