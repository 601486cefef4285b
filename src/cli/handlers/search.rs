//! Search command handler: scan, extract, rank, render, pick, open.

use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::cli::config::Config;
use crate::cli::editor::{EditorConfig, EditorLauncher, SystemEditor};
use crate::cli::output::{HeadingListing, Output, OutputFormat};
use crate::cli::picker::{CommandPicker, Picker, pick_heading};
use crate::cli::table::build_table;
use crate::domain::{Heading, Query, filter_and_rank};
use crate::infra::{extract_headings, scan_markdown_files};

/// Printed when neither a keyword nor `--all` was given.
pub const NO_QUERY_MESSAGE: &str = "Please provide a search keyword, or use --all";

/// Settings for one search run, resolved from the CLI and config file.
#[derive(Debug)]
pub struct SearchOptions {
    pub query: Option<Query>,
    pub root: PathBuf,
    pub format: OutputFormat,
    /// Colorize table output
    pub styled: bool,
    /// Allow the picker to run for keyword searches
    pub interactive: bool,
}

impl SearchOptions {
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        Self {
            query: Query::from_args(cli.all, cli.keyword.as_deref()),
            root: config.root_dir(cli.path.as_ref()),
            format: cli.format,
            styled: cli.format == OutputFormat::Table && io::stdout().is_terminal(),
            interactive: cli.format.is_interactive() && !cli.no_pick,
        }
    }
}

/// Internal implementation that accepts a writer, picker, and editor launcher.
pub(crate) fn handle_search_impl<W, P, E>(
    options: &SearchOptions,
    out: &mut W,
    picker: &P,
    editor: &E,
) -> Result<()>
where
    W: Write,
    P: Picker + ?Sized,
    E: EditorLauncher + ?Sized,
{
    let Some(query) = &options.query else {
        writeln!(out, "{NO_QUERY_MESSAGE}")?;
        return Ok(());
    };

    let files = scan_markdown_files(&options.root).context("scan error")?;
    let headings = collect_headings(&files);
    let results = filter_and_rank(headings, query);
    info!(
        files = files.len(),
        results = results.len(),
        root = %options.root.display(),
        "search complete"
    );

    write_results(out, &results, options.format, options.styled)?;
    out.flush()?;

    if query.is_all() || results.is_empty() || !options.interactive {
        return Ok(());
    }

    let chosen = match pick_heading(picker, &results) {
        Ok(heading) => heading,
        Err(err) => {
            info!(error = %err, "no heading selected");
            return Ok(());
        }
    };

    if let Err(err) = editor.open(chosen.file(), chosen.line()) {
        eprintln!("error: {err}");
    }
    Ok(())
}

pub fn handle_search(cli: &Cli, config: &Config) -> Result<()> {
    let picker = match &config.picker {
        Some(command) => CommandPicker::from_command_line(command)
            .context("invalid picker command in config file")?,
        None => CommandPicker::default(),
    };
    let editor = SystemEditor::new(EditorConfig::from_env(config.editor.clone()));
    let options = SearchOptions::from_cli(cli, config);

    let stdout = io::stdout();
    handle_search_impl(&options, &mut stdout.lock(), &picker, &editor)
}

/// Extracts headings from every file, skipping files that cannot be read.
pub(crate) fn collect_headings(files: &[PathBuf]) -> Vec<Heading> {
    let mut headings = Vec::new();
    for path in files {
        match extract_headings(path) {
            Ok(found) => {
                debug!(path = %path.display(), count = found.len(), "extracted headings");
                headings.extend(found);
            }
            Err(err) => debug!(error = %err, "skipping unreadable file"),
        }
    }
    headings
}

/// Writes results in the requested format.
fn write_results<W: Write>(
    out: &mut W,
    results: &[Heading],
    format: OutputFormat,
    styled: bool,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", build_table(results, styled))?;
        }
        OutputFormat::Json => {
            let listings: Vec<HeadingListing> = results.iter().map(HeadingListing::from).collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Paths => {
            for heading in results {
                writeln!(out, "{}", heading.location())?;
            }
        }
    }
    Ok(())
}
