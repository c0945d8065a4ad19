//! Machine-learned phrase boundary detection for unspaced Japanese text
//!
//! The engine slides a six-character window over a range of text and
//! decides, for every boundary inside the range, whether a phrase
//! (bunsetsu) break belongs there. A few character-class rules settle the
//! obvious cases; everything else is scored against a table of integer
//! weights keyed by the Unicode blocks of the surrounding characters.
//!
//! # Architecture
//!
//! - **Classification**: characters map to fixed-width Unicode block codes
//! - **Features**: thirteen block n-gram keys per candidate boundary
//! - **Scoring**: a sparse weight table loaded once and shared read-only
//! - **Driver**: `Engine` walks a range and reports native offsets through
//!   the `BreakEngine` interface
//!
//! # Example
//!
//! ```rust
//! use bunsetsu_core::Engine;
//!
//! let engine = Engine::japanese().unwrap();
//! let phrases = engine.phrases("私は東京に行きます。").unwrap();
//! assert_eq!(phrases, vec!["私は", "東京に", "行きます。"]);
//! ```

pub mod block;
pub mod character_window;
pub mod charset;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod segmenter;
pub mod traits;
pub mod types;

pub use block::{BlockClassifier, BlockLookup, UnicodeBlocks};
pub use character_window::ContextWindow;
pub use charset::{CharSet, CodePointSet};
pub use config::EngineConfig;
pub use error::{EngineError, ModelLoadError, Result, ScanError};
pub use evaluator::BoundaryEvaluator;
pub use model::{feature_keys, FeatureKey, FeaturePattern, ScoringModel, PATTERNS};
pub use segmenter::{split_at_breaks, Engine, EngineBuilder};
pub use traits::{
    BreakEngine, IdentityOffsets, OffsetMap, OffsetTable, TextSource, Utf16Text, Utf8Text,
};
pub use types::{BlockCode, Decision, Element};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _code: BlockCode = BlockCode::SENTINEL;
        let _set: CharSet = CharSet::empty();
        let _offsets = IdentityOffsets { range_start: 0 };
        assert_eq!(PATTERNS.len(), model::feature::FEATURE_COUNT);
    }
}
