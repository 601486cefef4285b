//! Query modes, keyword filtering, and result ranking.

use std::cmp::Ordering;

use super::Heading;

/// What to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every heading, unfiltered.
    All,
    /// Headings whose text or tags contain the keyword (stored lowercase).
    Keyword(String),
}

impl Query {
    /// Builds a query from command-line input.
    ///
    /// `all` takes precedence over a keyword. Returns `None` when neither
    /// `all` nor a non-empty keyword was supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdheads::domain::Query;
    ///
    /// assert_eq!(Query::from_args(false, Some("Foo")), Some(Query::Keyword("foo".into())));
    /// assert_eq!(Query::from_args(true, Some("foo")), Some(Query::All));
    /// assert_eq!(Query::from_args(false, None), None);
    /// ```
    pub fn from_args(all: bool, keyword: Option<&str>) -> Option<Self> {
        if all {
            return Some(Query::All);
        }
        keyword
            .filter(|k| !k.is_empty())
            .map(|k| Query::Keyword(k.to_lowercase()))
    }

    /// Returns true for the unfiltered `All` mode.
    pub fn is_all(&self) -> bool {
        matches!(self, Query::All)
    }

    /// Returns true if the heading belongs in the result set.
    ///
    /// Keyword matching is a case-insensitive substring test applied to the
    /// text and to each tag independently.
    pub fn matches(&self, heading: &Heading) -> bool {
        match self {
            Query::All => true,
            Query::Keyword(keyword) => {
                heading.text().to_lowercase().contains(keyword.as_str())
                    || heading
                        .tags()
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(keyword.as_str()))
            }
        }
    }
}

/// Orders two headings for display.
///
/// Tagged headings come first, then lower levels, then file name and line.
pub fn compare_headings(a: &Heading, b: &Heading) -> Ordering {
    b.has_tags()
        .cmp(&a.has_tags())
        .then(a.level().cmp(&b.level()))
        .then_with(|| a.file().cmp(b.file()))
        .then(a.line().cmp(&b.line()))
}

/// Sorts headings in display order.
pub fn rank(headings: &mut [Heading]) {
    headings.sort_by(compare_headings);
}

/// Filters headings by the query and sorts the survivors.
pub fn filter_and_rank(headings: Vec<Heading>, query: &Query) -> Vec<Heading> {
    let mut results: Vec<Heading> = headings.into_iter().filter(|h| query.matches(h)).collect();
    rank(&mut results);
    results
}
