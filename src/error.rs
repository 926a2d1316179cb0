use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for loading and processing operations.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type returned by ingestion and processing functions.
///
/// Aggregation failures that are part of normal operation (non-numeric column, unknown
/// operation, empty input) are not errors: [`crate::processing::aggregate()`] reports them as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The input file is missing or cannot be read.
    #[error("cannot read '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed CSV (e.g. a record with the wrong number of fields).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A filter condition contains none of the recognized comparison operators.
    #[error("invalid condition: {condition}")]
    InvalidCondition { condition: String },

    /// A condition or aggregate references a column that is not in the header.
    #[error("column '{column}' not found")]
    MissingColumn { column: String },
}
