//! bunsetsu command-line entry point

use anyhow::Result;
use bunsetsu_cli::commands::Commands;
use clap::Parser;

/// Phrase (bunsetsu) segmentation for unspaced Japanese text
#[derive(Debug, Parser)]
#[command(name = "bunsetsu", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
