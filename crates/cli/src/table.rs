// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Column-aligned text tables.
//!
//! Used by `roster history list`, `roster matrix check` and the solution
//! grid. Widths are measured in characters before any color is applied.

use std::io::Write;

use crate::color;

const GAP: &str = "  ";

enum Align {
    Left,
    Right,
}

/// Color treatment for a column's data cells.
enum Tint {
    None,
    Muted,
    /// Colored by the tone of the status label in the cell.
    Status,
}

/// One column of a [`Table`]. The header text sets the minimum width.
pub struct Column {
    name: String,
    align: Align,
    tint: Tint,
    max_chars: Option<usize>,
}

impl Column {
    fn new(name: impl Into<String>, align: Align, tint: Tint) -> Self {
        Self {
            name: name.into(),
            align,
            tint,
            max_chars: None,
        }
    }

    pub fn left(name: impl Into<String>) -> Self {
        Self::new(name, Align::Left, Tint::None)
    }

    pub fn right(name: impl Into<String>) -> Self {
        Self::new(name, Align::Right, Tint::None)
    }

    pub fn muted(name: impl Into<String>) -> Self {
        Self::new(name, Align::Left, Tint::Muted)
    }

    pub fn status(name: impl Into<String>) -> Self {
        Self::new(name, Align::Left, Tint::Status)
    }

    /// Cut longer values down to `max` characters.
    pub fn with_max(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    fn clip<'a>(&self, text: &'a str) -> &'a str {
        let Some(max) = self.max_chars else {
            return text;
        };
        text.char_indices()
            .nth(max)
            .map_or(text, |(end, _)| &text[..end])
    }

    fn fit(&self, text: &str, width: usize, last: bool) -> String {
        match self.align {
            // Trailing padding on the last column is just noise
            Align::Left if last => text.to_string(),
            Align::Left => format!("{text:<width$}"),
            Align::Right => format!("{text:>width$}"),
        }
    }
}

/// Rows of cells under a header line. Nothing is printed for an empty table.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    colorize: bool,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self::with_color(columns, color::should_colorize())
    }

    #[cfg(test)]
    pub fn plain(columns: Vec<Column>) -> Self {
        Self::with_color(columns, false)
    }

    #[cfg(test)]
    pub fn colored(columns: Vec<Column>) -> Self {
        Self::with_color(columns, true)
    }

    fn with_color(columns: Vec<Column>, colorize: bool) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize,
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn render(&self, out: &mut impl Write) {
        if self.rows.is_empty() {
            return;
        }
        let widths = self.widths();
        let last = self.columns.len().saturating_sub(1);

        let header = self.columns.iter().enumerate().map(|(i, col)| {
            let text = col.fit(&col.name, widths[i], i == last);
            if self.colorize {
                color::apply_header(&text)
            } else {
                text
            }
        });
        write_line(out, header);

        for row in &self.rows {
            let cells = self.columns.iter().enumerate().map(|(i, col)| {
                let raw = row.get(i).map_or("", String::as_str);
                let text = col.fit(col.clip(raw), widths[i], i == last);
                self.tint(&col.tint, text)
            });
            write_line(out, cells);
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| col.clip(cell).chars().count())
                    .fold(col.name.chars().count(), usize::max)
            })
            .collect()
    }

    fn tint(&self, tint: &Tint, text: String) -> String {
        if !self.colorize {
            return text;
        }
        match tint {
            Tint::None => text,
            Tint::Muted => color::apply_muted(&text),
            Tint::Status => color::apply_status(&text),
        }
    }
}

fn write_line(out: &mut impl Write, cells: impl Iterator<Item = String>) {
    let line = cells.collect::<Vec<_>>().join(GAP);
    let _ = writeln!(out, "{}", line.trim_end());
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
