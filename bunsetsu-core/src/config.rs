//! Engine configuration
//!
//! This module defines the TOML schema used to describe an engine: the
//! two character-class sets, where the weight table comes from and
//! whether the early exit is enabled.

use crate::charset::CharSet;
use crate::error::{EngineError, Result};
use crate::model::ScoringModel;
use crate::segmenter::Engine;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Embedded Japanese configuration
const EMBEDDED_JA: &str = include_str!("../configs/japanese.toml");

static JAPANESE: OnceLock<std::result::Result<EngineConfig, String>> = OnceLock::new();

/// Root engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub model: ModelConfig,
    pub sets: SetsConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Where the weight table comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model file; the embedded model is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub early_exit: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: None,
            early_exit: true,
        }
    }
}

/// Character-class sets, each entry a character or a range like `a-z`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetsConfig {
    #[serde(default)]
    pub digit_open_punct_alpha: Vec<String>,
    #[serde(default)]
    pub close_punctuation: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl EngineConfig {
    /// The embedded Japanese configuration
    pub fn japanese() -> Result<Self> {
        JAPANESE
            .get_or_init(|| Self::from_toml_str(EMBEDDED_JA).map_err(|e| e.to_string()))
            .clone()
            .map_err(EngineError::Config)
    }

    /// The embedded Japanese configuration as TOML text
    pub fn japanese_template() -> &'static str {
        EMBEDDED_JA
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(toml_str)
            .map_err(|e| EngineError::Config(format!("failed to parse configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; a relative model path is resolved against the file's directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(model_path), Some(dir)) = (config.model.path.as_mut(), path.parent()) {
            if model_path.is_relative() {
                *model_path = dir.join(&*model_path);
            }
        }

        debug!(
            path = %path.display(),
            code = %config.metadata.code,
            "loaded engine configuration"
        );
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(EngineError::Config("metadata.code must not be empty".into()));
        }
        CharSet::from_entries(&self.sets.digit_open_punct_alpha)?;
        CharSet::from_entries(&self.sets.close_punctuation)?;
        Ok(())
    }

    /// Load the model and build an engine
    pub fn build_engine(&self) -> Result<Engine> {
        let model = match &self.model.path {
            Some(path) => ScoringModel::from_path(path)?,
            None => ScoringModel::embedded()?,
        };
        Ok(Engine::builder(model)
            .digit_open_punct_alpha(CharSet::from_entries(&self.sets.digit_open_punct_alpha)?)
            .close_punctuation(CharSet::from_entries(&self.sets.close_punctuation)?)
            .early_exit(self.model.early_exit)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CodePointSet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_japanese_config() {
        let config = EngineConfig::japanese().unwrap();
        assert_eq!(config.metadata.code, "ja");
        assert!(config.model.path.is_none());
        assert!(config.model.early_exit);

        let close = CharSet::from_entries(&config.sets.close_punctuation).unwrap();
        assert!(close.contains('」'));
        assert!(close.contains('。'));
        let digits = CharSet::from_entries(&config.sets.digit_open_punct_alpha).unwrap();
        assert!(digits.contains('９'));
        assert!(digits.contains('「'));
        assert!(!digits.contains('あ'));
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
[metadata]
code = "ja"
name = "Minimal"

[sets]
"#,
        )
        .unwrap();
        assert!(config.model.early_exit);
        assert!(config.sets.close_punctuation.is_empty());
        assert!(config.build_engine().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let empty_code = r#"
[metadata]
code = ""
name = "x"

[sets]
"#;
        assert!(EngineConfig::from_toml_str(empty_code).is_err());

        let bad_entry = r#"
[metadata]
code = "ja"
name = "x"

[sets]
close_punctuation = ["abc"]
"#;
        let err = EngineConfig::from_toml_str(bad_entry).unwrap_err();
        assert!(err.to_string().contains("abc"));

        assert!(EngineConfig::from_toml_str("not toml [").is_err());
    }

    #[test]
    fn test_relative_model_path_is_resolved() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("weights.tsv"), "BB2062071\t9\n").unwrap();
        let config_path = dir.path().join("engine.toml");
        fs::write(
            &config_path,
            r#"
[metadata]
code = "ja"
name = "Custom"

[model]
path = "weights.tsv"
early_exit = false

[sets]
close_punctuation = ["。"]
"#,
        )
        .unwrap();

        let config = EngineConfig::from_file(&config_path).unwrap();
        assert_eq!(config.model.path, Some(dir.path().join("weights.tsv")));

        let engine = config.build_engine().unwrap();
        assert!(!engine.early_exit());
        assert_eq!(engine.model().lookup("BB2062071"), 9);
    }

    #[test]
    fn test_missing_model_file_fails_build() {
        let mut config = EngineConfig::japanese().unwrap();
        config.model.path = Some(PathBuf::from("/nonexistent/model.json"));
        assert!(matches!(
            config.build_engine(),
            Err(EngineError::Model(crate::error::ModelLoadError::Missing { .. }))
        ));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = EngineConfig::japanese().unwrap();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }
}
