//! Core types: Heading, Query, and result ranking

mod heading;
mod query;

pub use heading::{Heading, extract_tags};
pub use query::{Query, compare_headings, filter_and_rank, rank};
