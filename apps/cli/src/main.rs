//! modcatalog CLI — module catalog ownership reporting tool.
//!
//! Aggregates module metadata across content repositories, joins it against
//! the product taxonomy and ownership tables, and writes multi-sheet
//! tabular reports.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
