//! Line-by-line heading extraction from markdown files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::Heading;

/// Leading whitespace, a run of `#`, at least one space, then text ending in a
/// non-space character. Whitespace means ASCII tab, newline, form feed, carriage
/// return and space.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\t\n\f\r ]*(#+)[\t\n\f\r ]+(.*[^\t\n\f\r ])[\t\n\f\r ]*$")
        .expect("valid heading regex")
});

/// Error reading a single markdown file.
#[derive(Debug, Error)]
#[error("failed to read {path}: {source}")]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Extracts headings from the file at `path`.
///
/// The heading `file` field is the path as given.
///
/// # Errors
///
/// Returns `ReadError` if the file cannot be opened or reading it fails.
/// Invalid UTF-8 is not an error: bad bytes are replaced and the rest of the
/// file is still scanned.
pub fn extract_headings(path: &Path) -> Result<Vec<Heading>, ReadError> {
    let to_err = |source: io::Error| ReadError {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_err)?;
    parse_headings(&path.to_string_lossy(), BufReader::new(file)).map_err(to_err)
}

/// Parses headings from a reader, attributing them to `file`.
///
/// Lines are numbered from 1. Both LF and CRLF endings are accepted.
pub fn parse_headings<R: BufRead>(file: &str, reader: R) -> io::Result<Vec<Heading>> {
    let mut headings = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let line = String::from_utf8_lossy(&line);
        if let Some((level, text)) = parse_heading_line(&line) {
            headings.push(Heading::new(file, index + 1, level, text));
        }
    }
    Ok(headings)
}

/// Returns the level and trimmed text if `line` is a heading.
pub fn parse_heading_line(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str();
    Some((level, text))
}
