//! Bordered text tables.
//!
//! A [`Table`] is a header plus rows of cell text, rendered through [`std::fmt::Display`] in one
//! of two [`TableStyle`]s:
//!
//! ```text
//! Psql                      Grid
//! +--------+---------+      +----------+-------------------+
//! | name   |   price |      | column   |               avg |
//! |--------+---------|      +==========+===================+
//! | Bob    |     100 |      | price    | 333.3333333333333 |
//! +--------+---------+      +----------+-------------------+
//! ```
//!
//! Each column is as wide as its widest cell, and at least two wider than its header. Columns in
//! which every cell is a number are right-aligned, all others left-aligned.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::processing::{parse_number, AggregateResult};
use crate::types::DataSet;

/// Border style of a rendered [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Outer border plus a `|---+---|` rule under the header.
    #[default]
    Psql,
    /// Outer border, a `+===+===+` rule under the header and a rule between every row.
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// A header plus rows of cell text, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub style: TableStyle,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, style: TableStyle) -> Self {
        Self {
            headers,
            rows,
            style,
        }
    }

    /// All rows of a dataset, in `Psql` style, with cells as their original text.
    pub fn from_dataset(dataset: &DataSet) -> Self {
        Self::new(
            dataset.schema.columns.clone(),
            dataset.rows.clone(),
            TableStyle::Psql,
        )
    }

    /// A single-row `Grid` table: `column` holds the column name, and a field named after the
    /// operation holds the value.
    pub fn from_aggregate(result: &AggregateResult) -> Self {
        Self::new(
            vec!["column".to_string(), result.op.label().to_string()],
            vec![vec![result.column.clone(), result.value.to_string()]],
            TableStyle::Grid,
        )
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .fold(h.width() + 2, usize::max)
            })
            .collect()
    }

    fn alignments(&self) -> Vec<Align> {
        (0..self.headers.len())
            .map(|i| {
                let numeric = !self.rows.is_empty()
                    && self
                        .rows
                        .iter()
                        .all(|row| row.get(i).and_then(|c| parse_number(c)).is_some());
                if numeric { Align::Right } else { Align::Left }
            })
            .collect()
    }
}

fn write_rule(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    edge: char,
    fill: char,
    join: char,
) -> fmt::Result {
    write!(f, "{edge}")?;
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            write!(f, "{join}")?;
        }
        f.write_str(&fill.to_string().repeat(w + 2))?;
    }
    writeln!(f, "{edge}")
}

fn write_cells<'a, I>(
    f: &mut fmt::Formatter<'_>,
    cells: I,
    widths: &[usize],
    aligns: &[Align],
) -> fmt::Result
where
    I: IntoIterator<Item = &'a str>,
{
    let mut cells = cells.into_iter();
    f.write_str("|")?;
    for (w, align) in widths.iter().zip(aligns) {
        let cell = cells.next().unwrap_or("");
        let pad = " ".repeat(w.saturating_sub(cell.width()));
        match align {
            Align::Left => write!(f, " {cell}{pad} |")?,
            Align::Right => write!(f, " {pad}{cell} |")?,
        }
    }
    writeln!(f)
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.headers.is_empty() {
            return Ok(());
        }

        let widths = self.widths();
        let aligns = self.alignments();

        write_rule(f, &widths, '+', '-', '+')?;
        write_cells(f, self.headers.iter().map(String::as_str), &widths, &aligns)?;
        match self.style {
            TableStyle::Psql => write_rule(f, &widths, '|', '-', '+')?,
            TableStyle::Grid => write_rule(f, &widths, '+', '=', '+')?,
        }

        for (i, row) in self.rows.iter().enumerate() {
            if self.style == TableStyle::Grid && i > 0 {
                write_rule(f, &widths, '+', '-', '+')?;
            }
            write_cells(f, row.iter().map(String::as_str), &widths, &aligns)?;
        }

        if self.style == TableStyle::Psql || !self.rows.is_empty() {
            write_rule(f, &widths, '+', '-', '+')?;
        }
        Ok(())
    }
}
