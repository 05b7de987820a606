//! incdeps - static discovery of user header dependencies
//!
//! incdeps provides:
//! - Include directive parsing without preprocessing
//! - Include path search in the order given
//! - Cycle-safe transitive closure of user headers
//! - Newest-modification reporting over that closure

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;
mod includes;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    core::logging::init_logging(cli.verbose);
    cli::run(cli)
}
