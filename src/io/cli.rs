//! Command-line interface: compose the district and emit its layout document

use crate::generation::{CompositionReport, compose_with};
use crate::io::configuration::{DEFAULT_PREVIEW_SCALE, GRID_HEIGHT, GRID_WIDTH};
use crate::io::document::{Document, SceneSettings};
use crate::io::error::Result;
use crate::io::image::export_preview_png;
use crate::io::progress::StageProgress;
use crate::recipe::Recipe;
use crate::spatial::Grid;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilecity")]
#[command(
    author,
    version,
    about = "Generate a city district tile layout as a JSON document"
)]
/// Command-line arguments for the district generator
pub struct Cli {
    /// Seed for decorative variant selection (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the document to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON document
    #[arg(short, long)]
    pub pretty: bool,

    /// Also render a PNG preview of the grid to this path
    #[arg(long, value_name = "PNG")]
    pub preview: Option<PathBuf>,

    /// Pixels per cell edge in the preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_SCALE)]
    pub scale: u32,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Random source for decoration passes
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Runs one generation according to CLI arguments
pub struct Generator {
    cli: Cli,
    recipe: Recipe,
}

impl Generator {
    /// Create a generator for the built-in district recipe
    pub const fn new(cli: Cli) -> Self {
        Self::with_recipe(cli, Recipe::district())
    }

    /// Create a generator for a custom recipe
    pub const fn with_recipe(cli: Cli, recipe: Recipe) -> Self {
        Self { cli, recipe }
    }

    /// Compose the grid and assemble the document without writing anything
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe fails validation
    pub fn build(&self) -> Result<(Document, CompositionReport)> {
        self.recipe.validate(GRID_WIDTH, GRID_HEIGHT)?;

        let mut progress = self
            .cli
            .should_show_progress()
            .then(StageProgress::new);
        let mut rng = self.cli.rng();
        let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);

        let report = compose_with(&mut grid, &self.recipe, &mut rng, |stage| {
            if let Some(ref mut bar) = progress {
                bar.begin(stage);
            }
        });

        if let Some(ref bar) = progress {
            bar.finish();
        }

        Ok((Document::assemble_now(grid, SceneSettings::default()), report))
    }

    /// Generate the district and write the document and optional preview
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe is invalid or any output cannot be written
    pub fn run(&self) -> Result<CompositionReport> {
        let (document, report) = self.build()?;

        if let Some(ref preview) = self.cli.preview {
            export_preview_png(document.grid(), preview, self.cli.scale)?;
        }

        match self.cli.output {
            Some(ref path) => document.save(path, self.cli.pretty)?,
            None => document.write_json(std::io::stdout().lock(), self.cli.pretty)?,
        }

        self.summarize(&report);
        Ok(report)
    }

    // Allow print for the closing summary line
    #[allow(clippy::print_stderr)]
    fn summarize(&self, report: &CompositionReport) {
        if self.cli.quiet {
            return;
        }
        eprintln!("Composed district: {report}");
        if !report.buildings_skipped.is_empty() {
            eprintln!("Skipped overlapping: {}", report.buildings_skipped.join(", "));
        }
    }
}
