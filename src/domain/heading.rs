//! Markdown heading records and inline `@tag` extraction.

use std::fmt;

/// A heading line found in a markdown file.
///
/// Headings are created once by the extractor and never mutated. The `text`
/// keeps any `@tag` tokens verbatim; `tags` holds the same tokens with the
/// leading `@` stripped, in the order they appear.
///
/// # Examples
///
/// ```
/// use mdheads::domain::Heading;
///
/// let heading = Heading::new("notes.md", 3, 1, "Intro @foo");
/// assert_eq!(heading.tags(), ["foo"]);
/// assert!(heading.has_tags());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Heading {
    file: String,
    line: usize,
    level: usize,
    text: String,
    tags: Vec<String>,
}

impl Heading {
    /// Creates a heading, deriving its tags from `text`.
    pub fn new(file: impl Into<String>, line: usize, level: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let tags = extract_tags(&text);
        Self {
            file: file.into(),
            line,
            level,
            text,
            tags,
        }
    }

    /// Returns the path of the file the heading was found in.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the heading depth (number of leading `#` characters).
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the heading text, including any `@tag` tokens.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the tags, without their leading `@`.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns true if the heading carries at least one tag.
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Returns the `file:line` identifier used to locate the heading.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

impl fmt::Debug for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Heading({}:{} {} {:?})",
            self.file,
            self.line,
            "#".repeat(self.level),
            self.text
        )
    }
}

/// Extracts `@tag` tokens from heading text.
///
/// Every whitespace-delimited token that starts with `@` and has at least one
/// character after it contributes a tag. Order is preserved and duplicates
/// are kept.
pub fn extract_tags(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|token| token.strip_prefix('@'))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
