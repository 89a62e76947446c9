//! CLI entry point for the tile map layout generator

use clap::Parser;
use tilecarve::io::cli::{Cli, MapProcessor};

fn main() -> tilecarve::Result<()> {
    let cli = Cli::parse();
    let mut processor = MapProcessor::new(cli);
    processor.process()
}
