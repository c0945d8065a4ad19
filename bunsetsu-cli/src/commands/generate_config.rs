//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use bunsetsu_core::EngineConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Configuration code to put in the template (default: the embedded one)
    #[arg(short = 'l', long, value_name = "CODE")]
    pub code: Option<String>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating engine configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the character sets or point [model] path at your own weights");
        println!("2. Validate your configuration:");
        println!("   bunsetsu validate --config {}", self.output.display());
        println!("3. Use it for segmentation:");
        println!(
            "   bunsetsu segment -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let Some(code) = &self.code else {
            return Ok(EngineConfig::japanese_template().to_string());
        };

        let mut config = EngineConfig::japanese().map_err(CliError::from)?;
        config.metadata.code = code.clone();
        config.validate().map_err(CliError::from)?;

        let body = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
        Ok(format!("# Engine configuration for {code}\n\n{body}"))
    }
}
