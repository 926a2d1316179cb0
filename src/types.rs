//! Core data model types.
//!
//! Input files are loaded into an in-memory [`DataSet`]: a [`Schema`] (the header row) plus rows
//! of raw cell text. Nothing is typed at load time; components that need numbers parse cells on
//! demand.

/// Ordered list of column names, as read from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Column names in header order.
    pub columns: Vec<String>,
}

impl Schema {
    /// Create a new schema from column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the index of a column by name, if present.
    ///
    /// When the header repeats a name, the last column with that name wins.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().rposition(|c| c == name)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// In-memory tabular dataset of text cells.
///
/// Rows are stored as `Vec<Vec<String>>` in the same order as the [`Schema`] columns, and in the
/// order they appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major cell storage.
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<String>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original schema and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[String]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Iterate the cells of one column (by index) in row order.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(idx).map(String::as_str).unwrap_or(""))
    }
}
