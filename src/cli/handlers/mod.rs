//! Command handlers for the CLI.

mod completions;
mod search;


// Re-export public items
pub use completions::handle_completions;
pub use search::{NO_QUERY_MESSAGE, SearchOptions, handle_search};

// Re-export for tests
#[cfg(test)]
pub(crate) use search::{collect_headings, handle_search_impl};
