//! Segment command implementation

use super::init_logging;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, SegmentedLine, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use bunsetsu_core::{Engine, EngineConfig};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Phrase separator for text output
    #[arg(short, long, default_value = " / ")]
    pub separator: String,

    /// Engine configuration file (default: embedded Japanese configuration)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Model file, overriding the configuration (.json or TSV)
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Score every feature instead of stopping early
    #[arg(long)]
    pub no_early_exit: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per input line, phrases joined by the separator
    Text,
    /// JSON array of lines with breaks and phrases
    Json,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting phrase segmentation");
        log::debug!("Arguments: {:?}", self);

        let engine = self.build_engine()?;
        let files = resolve_patterns(&self.input)?;
        let pool = self.thread_pool()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, &self.separator)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut total_lines = 0;
        for path in &files {
            let content = FileReader::read_text(path)?;
            let lines: Vec<&str> = content.lines().collect();

            let breaks = pool
                .install(|| {
                    lines
                        .par_iter()
                        .map(|line| engine.segment(line))
                        .collect::<Result<Vec<_>, _>>()
                })
                .map_err(CliError::from)
                .with_context(|| format!("Failed to segment {}", path.display()))?;

            let file = path.display().to_string();
            for (idx, (text, breaks)) in lines.iter().zip(&breaks).enumerate() {
                formatter.format_line(&SegmentedLine {
                    file: &file,
                    line: idx + 1,
                    text,
                    breaks,
                })?;
            }

            total_lines += lines.len();
            log::debug!("Segmented {} lines from {}", lines.len(), file);
            progress.file_completed(&file);
        }

        progress.finish();
        formatter.finish()?;

        log::info!(
            "Segmented {} lines from {} file(s)",
            total_lines,
            files.len()
        );
        Ok(())
    }

    /// Load the configuration and apply command-line overrides
    fn build_engine(&self) -> Result<Engine> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .map_err(CliError::from)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => EngineConfig::japanese().map_err(CliError::from)?,
        };

        if let Some(model) = &self.model {
            config.model.path = Some(model.clone());
        }
        if self.no_early_exit {
            config.model.early_exit = false;
        }

        let engine = config.build_engine().map_err(CliError::from)?;
        log::info!(
            "Loaded model with {} entries (negative sum {})",
            engine.model().len(),
            engine.model().negative_sum()
        );
        Ok(engine)
    }

    fn thread_pool(&self) -> Result<rayon::ThreadPool> {
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        log::debug!("Using {} worker thread(s)", threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")
    }
}
