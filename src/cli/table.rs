//! Table rendering for heading results.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use crossterm::style::Stylize;

use crate::domain::Heading;

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = ["File", "Line", "Level", "Title", "Tags"];

/// Builds the results table.
///
/// With `styled` unset the table is rendered as plain text regardless of
/// whether stdout is a terminal.
pub fn build_table(headings: &[Heading], styled: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    let header_cells: Vec<Cell> = HEADERS
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for heading in headings {
        table.add_row(vec![
            Cell::new(heading.file()),
            Cell::new(heading.line()),
            Cell::new("#".repeat(heading.level())).fg(Color::DarkYellow),
            Cell::new(title(heading, styled)),
            Cell::new(heading.tags().join(", ")),
        ]);
    }

    table
}

/// Heading text followed by its tags, re-prefixed with `@`.
fn title(heading: &Heading, styled: bool) -> String {
    if !heading.has_tags() {
        return heading.text().to_string();
    }
    let tags: Vec<String> = heading
        .tags()
        .iter()
        .map(|tag| {
            let tag = format!("@{tag}");
            if styled {
                tag.green().to_string()
            } else {
                tag
            }
        })
        .collect();
    format!("{}  {}", heading.text(), tags.join(" "))
}
