//! CLI entry point for the tromino tiling tool

use clap::Parser;
use trominoes::io::cli::{Cli, TilingRunner};

fn main() -> trominoes::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    TilingRunner::new(cli).run().map(|_| ())
}
