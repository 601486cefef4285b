//! File system access: directory scanning and heading extraction

mod extract;
mod fs;

pub use extract::{ReadError, extract_headings, parse_heading_line, parse_headings};
pub use fs::{ScanError, scan_markdown_files};
