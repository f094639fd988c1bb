//! CLI entry point for the ElanVir style analysis and curation tool

use clap::Parser;
use elanvir::io::cli::{Cli, FileProcessor};

fn main() -> elanvir::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
