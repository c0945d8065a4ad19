//! Layered error types
//!
//! Model loading failures are fatal for the engine that tried to load the
//! model. Scan failures abort a single `divide_up_range` call.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the feature weight table
#[derive(Error, Debug)]
pub enum ModelLoadError {
    /// The resource does not exist
    #[error("model resource not found: {}", path.display())]
    Missing {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The resource exists but could not be read
    #[error("failed to read model resource {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A record could not be parsed (missing or non-integer weight)
    #[error("malformed model record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number of the record
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// A record's key is not a valid feature key
    #[error("invalid feature key '{key}': {reason}")]
    InvalidKey {
        /// The offending key
        key: String,
        /// What was wrong with it
        reason: String,
    },

    /// The JSON document is truncated or otherwise unparsable
    #[error("malformed model document: {0}")]
    Document(#[from] serde_json::Error),

    /// The resource holds no records at all
    #[error("model resource contains no records")]
    Empty,
}

/// Failure while scanning a range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// `range_start` is after `range_end`
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested start
        start: usize,
        /// Requested end
        end: usize,
    },

    /// The offset map has no entry for a working-string index
    #[error("offset map has no entry for index {index}")]
    OffsetUnavailable {
        /// Code point index into the working string
        index: usize,
    },

    /// The offset map produced a native offset at or past the range end
    #[error("native offset {offset} lies outside range {start}..{end}")]
    OffsetOutOfRange {
        /// Mapped native offset
        offset: usize,
        /// Range start
        start: usize,
        /// Range end
        end: usize,
    },

    /// The offset map went backwards
    #[error("native offset {offset} precedes previous offset {previous}")]
    NonMonotonicOffset {
        /// Mapped native offset
        offset: usize,
        /// Previously mapped native offset
        previous: usize,
    },

    /// The native offset does not fall on a character boundary
    #[error("native offset {offset} is not on a character boundary")]
    InvalidTextOffset {
        /// Native offset that was read
        offset: usize,
    },

    /// The text source has no character at the native offset
    #[error("text source has no character at native offset {offset}")]
    TextUnavailable {
        /// Native offset that was read
        offset: usize,
    },
}

/// Top-level error for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// Model could not be loaded
    #[error("model load error: {0}")]
    Model(#[from] ModelLoadError),

    /// A scan was aborted
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
