//! Outline tables and the side-by-side composer.

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};

fn outline_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separators(
            &[LinePosition::Top, LinePosition::Bottom],
            LineSeparator::new('-', '+', '+', '+'),
        )
        .separator(LinePosition::Title, LineSeparator::new('=', '+', '+', '+'))
        .padding(1, 1)
        .build()
}

fn to_row<S: AsRef<str>>(cells: &[S]) -> Row {
    Row::new(cells.iter().map(|c| Cell::new(c.as_ref())).collect())
}

fn render(table: &Table) -> String {
    table.to_string().trim_end_matches('\n').to_string()
}

/// Render `rows` as an outline table. An empty row list renders nothing.
#[must_use]
pub fn outline<S: AsRef<str>>(rows: &[Vec<S>]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_format(outline_format());
    for r in rows {
        table.add_row(to_row(r));
    }
    Some(render(&table))
}

/// Render `rows` under a `header` row separated by `=`.
#[must_use]
pub fn outline_with_header<S: AsRef<str>>(header: &[&str], rows: &[Vec<S>]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_format(outline_format());
    table.set_titles(to_row(header));
    for r in rows {
        table.add_row(to_row(r));
    }
    Some(render(&table))
}

/// Place rendered blocks next to each other, line by line.
///
/// Missing and empty blocks are dropped. A block shorter than the tallest one
/// contributes spaces equal to the width of its own first line. The result has
/// no trailing newline; no blocks yield an empty string.
#[must_use]
pub fn side_by_side(tables: &[Option<String>]) -> String {
    let blocks: Vec<Vec<&str>> = tables
        .iter()
        .flatten()
        .filter(|t| !t.is_empty())
        .map(|t| t.lines().collect())
        .collect();

    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|b| b.first().map_or(0, |l| l.chars().count()))
        .collect();

    let mut out = String::new();
    for line in 0..height {
        for (block, width) in blocks.iter().zip(&widths) {
            match block.get(line) {
                Some(text) => out.push_str(text),
                None => out.push_str(&" ".repeat(*width)),
            }
        }
        if line + 1 < height {
            out.push('\n');
        }
    }
    out
}
