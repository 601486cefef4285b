//! mdheads - find markdown headings by keyword or @tag and jump to them

pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli,
    config::Config,
    handlers::{handle_completions, handle_search},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(shell) = cli.completions {
        handle_completions(shell, &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    handle_search(&cli, &config)
}
