//! Command-line interface for tiling a single board

use crate::algorithm::engine::{TilingResult, board_size, solve};
use crate::io::configuration::{DEFAULT_CELL_PIXELS, DEFAULT_SEED};
use crate::io::error::Result;
use crate::io::image::export_board_as_png;
use crate::spatial::verification::{verify_board, verify_steps};
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trominoes")]
#[command(
    author,
    version,
    about = "Tile a 2^n x 2^n board with one damaged cell using L-trominoes"
)]
/// Command-line arguments for the tiling tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Board order n (the board is 2^n x 2^n)
    #[arg(value_name = "ORDER", allow_negative_numbers = true)]
    pub order: i32,

    /// Row of the damaged cell
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub row: i64,

    /// Column of the damaged cell
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub col: i64,

    /// Pick the damaged cell at random instead of using --row/--col
    #[arg(short = 'R', long)]
    pub random: bool,

    /// Random seed for reproducible damaged cell selection
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Print every tromino placement in order
    #[arg(short, long)]
    pub log_steps: bool,

    /// Check the finished board against the tiling laws
    #[arg(short, long)]
    pub verify: bool,

    /// Export the tiled board as a PNG image
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Side length in pixels of one cell in the exported image
    #[arg(long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Suppress the summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the summary should be displayed
    pub const fn should_show_summary(&self) -> bool {
        !self.quiet
    }

    /// Damaged cell requested on the command line
    ///
    /// With `--random` the cell is drawn uniformly from the board using
    /// `--seed`; otherwise `--row`/`--col` are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `--random` is set and the order is invalid
    pub fn damaged_cell(&self) -> Result<(i64, i64)> {
        if !self.random {
            return Ok((self.row, self.col));
        }

        let size = board_size(self.order)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        Ok((row as i64, col as i64))
    }
}

/// Runs one tiling request described by the CLI arguments
pub struct TilingRunner {
    cli: Cli,
}

impl TilingRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve, optionally verify and export, then report
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, verification fails or
    /// the image cannot be written
    pub fn run(&self) -> Result<TilingResult> {
        let (row, col) = self.cli.damaged_cell()?;
        let result = solve(self.cli.order, row, col, self.cli.log_steps)?;

        if self.cli.verify {
            let summary = verify_board(&result.board)?;
            if self.cli.log_steps {
                verify_steps(&result.board, &result.steps)?;
            }
            log::info!(
                "verified {} tiles around damaged cell {}",
                summary.tiles,
                summary.damaged
            );
        }

        if let Some(ref path) = self.cli.output {
            export_board_as_png(&result.board, self.cli.cell_pixels, path)?;
            log::info!("wrote board image to {}", path.display());
        }

        if self.cli.should_show_summary() {
            self.report(&result, row, col);
        }

        Ok(result)
    }

    // Allow print for the user-facing summary
    #[allow(clippy::print_stdout)]
    fn report(&self, result: &TilingResult, row: i64, col: i64) {
        let size = result.board.size();
        println!("Board size: {size}x{size} (order {})", result.board.order());
        println!("Damaged cell: ({row},{col})");
        println!("Tiles used: {}", result.tiles_used);
        println!(
            "Time taken: {:.2} ms",
            result.elapsed.as_secs_f64() * 1_000.0
        );

        if self.cli.log_steps {
            for step in &result.steps {
                println!("{step}");
            }
        }
    }
}
