//! CLI argument definitions and handlers

pub mod config;
pub mod editor;
pub mod handlers;
pub mod output;
pub mod picker;
pub mod table;

use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// mdheads - find markdown headings by keyword or @tag and jump to them
#[derive(Parser, Debug)]
#[command(name = "mdheads", version, about, long_about = None)]
pub struct Cli {
    /// Keyword to match against heading text and tags (case-insensitive)
    pub keyword: Option<String>,

    /// List every heading found, without the interactive picker
    #[arg(long)]
    pub all: bool,

    /// Directory to search (overrides config file; defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print results without launching the interactive picker
    #[arg(long)]
    pub no_pick: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
