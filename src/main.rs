//! CLI entry point for the district layout generator

use clap::Parser;
use tilecity::io::cli::{Cli, Generator};

fn main() -> tilecity::Result<()> {
    let cli = Cli::parse();
    let generator = Generator::new(cli);
    generator.run().map(|_| ())
}
