//! bunsetsu CLI library
//!
//! This library provides the command-line interface for the bunsetsu
//! phrase segmentation engine.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
