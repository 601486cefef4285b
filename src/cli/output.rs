//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Heading;

/// Output format for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colorized table, followed by the interactive picker (default)
    #[default]
    Table,
    /// JSON output for programmatic consumption
    Json,
    /// Plain `file:line` locations, one per line
    Paths,
}

impl OutputFormat {
    /// Only the table view hands off to the interactive picker.
    pub fn is_interactive(self) -> bool {
        self == OutputFormat::Table
    }
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single heading in listing output.
#[derive(Debug, Serialize)]
pub struct HeadingListing {
    pub file: String,
    pub line: usize,
    pub level: usize,
    pub text: String,
    pub tags: Vec<String>,
}

impl From<&Heading> for HeadingListing {
    fn from(heading: &Heading) -> Self {
        Self {
            file: heading.file().to_string(),
            line: heading.line(),
            level: heading.level(),
            text: heading.text().to_string(),
            tags: heading.tags().to_vec(),
        }
    }
}
