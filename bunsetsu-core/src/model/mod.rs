//! Feature weight table
//!
//! An immutable map from feature key to integer weight, loaded once and
//! shared read-only by every scan.

pub mod feature;
mod loader;

pub use feature::{feature_keys, FeatureKey, FeaturePattern, FEATURE_COUNT, PATTERNS};

use crate::error::ModelLoadError;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Embedded Japanese phrase model
///
/// A small hand-set table covering common particle and script transitions,
/// not a trained model. Load trained weights with `from_path` or a config.
const EMBEDDED_JA: &str = include_str!("../../data/ja_phrase_model.json");

/// Loaded weight table plus the sum of its negative weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringModel {
    weights: HashMap<Box<[u8]>, i32>,
    negative_sum: i64,
}

impl ScoringModel {
    /// Build from `(key, weight)` records, validating every key
    ///
    /// A key that appears more than once keeps its last weight.
    pub fn from_records<I, K>(records: I) -> Result<Self, ModelLoadError>
    where
        I: IntoIterator<Item = (K, i32)>,
        K: AsRef<str>,
    {
        let mut weights = HashMap::new();
        for (key, weight) in records {
            let key = key.as_ref();
            FeatureKey::parse(key).map_err(|reason| ModelLoadError::InvalidKey {
                key: key.to_string(),
                reason,
            })?;
            weights.insert(Box::from(key.as_bytes()), weight);
        }

        if weights.is_empty() {
            return Err(ModelLoadError::Empty);
        }

        let negative_sum = weights
            .values()
            .filter(|&&w| w < 0)
            .map(|&w| i64::from(w))
            .sum();

        debug!(
            entries = weights.len(),
            negative_sum, "loaded phrase model"
        );

        Ok(Self {
            weights,
            negative_sum,
        })
    }

    /// Parse a JSON object of `"KEY": weight` pairs
    pub fn from_json_str(json: &str) -> Result<Self, ModelLoadError> {
        loader::parse_json(json)
    }

    /// Parse `KEY<TAB>WEIGHT` lines
    pub fn from_tsv_str(text: &str) -> Result<Self, ModelLoadError> {
        loader::parse_tsv(text)
    }

    /// Load from a file; `.json` files are JSON, anything else is TSV
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        loader::load_path(path.as_ref())
    }

    /// The built-in Japanese model
    pub fn embedded() -> Result<Self, ModelLoadError> {
        Self::from_json_str(EMBEDDED_JA)
    }

    /// Weight of a key, 0 when absent
    #[inline]
    pub fn lookup(&self, key: &str) -> i32 {
        self.lookup_bytes(key.as_bytes())
    }

    #[inline]
    fn lookup_bytes(&self, key: &[u8]) -> i32 {
        self.weights.get(key).copied().unwrap_or(0)
    }

    /// Sum of all negative weights (0 when there are none)
    pub fn negative_sum(&self) -> i64 {
        self.negative_sum
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Total score of a key set
    pub fn score(&self, keys: &[FeatureKey]) -> i64 {
        keys.iter()
            .map(|key| i64::from(self.lookup_bytes(key.as_bytes())))
            .sum()
    }

    /// Whether the keys score strictly above zero
    ///
    /// With `early_exit`, stops as soon as the partial score plus the
    /// negative sum is positive: the keys of one window are distinct, so
    /// the rest of them can pull the score down by at most the negative
    /// sum.
    pub fn predicts_break(&self, keys: &[FeatureKey], early_exit: bool) -> bool {
        if !early_exit {
            return self.score(keys) > 0;
        }

        let mut score = 0i64;
        for key in keys {
            score += i64::from(self.lookup_bytes(key.as_bytes()));
            if score + self.negative_sum > 0 {
                return true;
            }
        }
        score > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockClassifier;
    use crate::character_window::ContextWindow;

    fn keys_for(text: &str) -> [FeatureKey; FEATURE_COUNT] {
        let classifier = BlockClassifier::new();
        let (window, _) = ContextWindow::initialize(&mut text.chars(), &classifier);
        feature_keys(&window)
    }

    #[test]
    fn test_lookup_defaults_to_zero() {
        let model = ScoringModel::from_records([("UB1001", 7), ("BB2062071", -3)]).unwrap();
        assert_eq!(model.lookup("UB1001"), 7);
        assert_eq!(model.lookup("BB2062071"), -3);
        assert_eq!(model.lookup("UB2001"), 0);
        assert_eq!(model.lookup("not a key"), 0);
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_negative_sum() {
        let model =
            ScoringModel::from_records([("UB1001", 7), ("UB2001", -3), ("UB3001", -4)]).unwrap();
        assert_eq!(model.negative_sum(), -7);

        let positive = ScoringModel::from_records([("UB1001", 7)]).unwrap();
        assert_eq!(positive.negative_sum(), 0);
    }

    #[test]
    fn test_duplicate_key_keeps_last_weight() {
        let model = ScoringModel::from_records([("UB1001", 1), ("UB1001", -2)]).unwrap();
        assert_eq!(model.lookup("UB1001"), -2);
        assert_eq!(model.negative_sum(), -2);
    }

    #[test]
    fn test_rejects_invalid_key_and_empty() {
        let err = ScoringModel::from_records([("ZZ9001", 1)]).unwrap_err();
        assert!(matches!(err, ModelLoadError::InvalidKey { .. }));

        let none: [(&str, i32); 0] = [];
        assert!(matches!(
            ScoringModel::from_records(none),
            Err(ModelLoadError::Empty)
        ));
    }

    #[test]
    fn test_predicts_break_with_and_without_early_exit() {
        // [S, S, 私 | は, 東, 京]
        let keys = keys_for("私は東京");
        let model = ScoringModel::from_records([
            ("UB3071", 10),
            ("BB2071062", 5),
            ("UB4062", -12),
            ("TB4001001001", -100),
        ])
        .unwrap();

        assert_eq!(model.score(&keys), 3);
        assert!(model.predicts_break(&keys, false));
        assert!(model.predicts_break(&keys, true));
    }

    #[test]
    fn test_tie_is_no_break() {
        let keys = keys_for("私は東京");
        let model = ScoringModel::from_records([("UB3071", 4), ("UB4062", -4)]).unwrap();
        assert_eq!(model.score(&keys), 0);
        assert!(!model.predicts_break(&keys, false));
        assert!(!model.predicts_break(&keys, true));
    }

    #[test]
    fn test_embedded_model_loads() {
        let model = ScoringModel::embedded().unwrap();
        assert!(!model.is_empty());
        assert!(model.negative_sum() < 0);
        assert!(model.lookup("BB2062071") > 0);
    }
}
