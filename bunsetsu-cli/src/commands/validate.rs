//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use bunsetsu_core::{EngineConfig, ScoringModel};
use clap::{ArgGroup, Args};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["model", "config"])))]
pub struct ValidateArgs {
    /// Model file to validate (.json or TSV)
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Engine configuration file to validate, including its model
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        match (&self.config, &self.model) {
            (Some(path), _) => {
                println!("Validating engine configuration: {}", path.display());
                let result = EngineConfig::from_file(path).and_then(|config| {
                    let engine = config.build_engine()?;
                    Ok((config, engine))
                });
                match result {
                    Ok((config, engine)) => {
                        println!("✓ Configuration is valid!");
                        println!("  Code: {}", config.metadata.code);
                        println!("  Name: {}", config.metadata.name);
                        Self::report_model(engine.model());
                        Ok(())
                    }
                    Err(e) => Self::fail(CliError::from(e)),
                }
            }
            (None, Some(path)) => {
                println!("Validating model: {}", path.display());
                match ScoringModel::from_path(path) {
                    Ok(model) => {
                        println!("✓ Model is valid!");
                        Self::report_model(&model);
                        Ok(())
                    }
                    Err(e) => Self::fail(CliError::ModelError(e.to_string())),
                }
            }
            (None, None) => Self::fail(CliError::ConfigError(
                "either --model or --config is required".to_string(),
            )),
        }
    }

    fn report_model(model: &ScoringModel) {
        println!("  Entries: {}", model.len());
        println!("  Negative sum: {}", model.negative_sum());
    }

    fn fail(error: CliError) -> Result<()> {
        println!("✗ Validation failed!");
        println!("  Error: {error}");
        Err(anyhow::anyhow!("Validation failed: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            model: None,
            config: Some(PathBuf::from("test.toml")),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_model() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "BB2062071\t120").unwrap();
        writeln!(temp_file, "BB2071071\t-80").unwrap();

        let args = ValidateArgs {
            model: Some(temp_file.path().to_path_buf()),
            config: None,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_truncated_model() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, r#"{ "BB2062071": 12"#).unwrap();

        let args = ValidateArgs {
            model: Some(path),
            config: None,
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[metadata]
code = "ja"
name = "Japanese"

[sets]
close_punctuation = ["。", "」"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            model: None,
            config: Some(temp_file.path().to_path_buf()),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[metadata]
code = ""
name = "Test"

[sets]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            model: None,
            config: Some(temp_file.path().to_path_buf()),
        };
        assert!(args.execute().is_err());
    }
}
