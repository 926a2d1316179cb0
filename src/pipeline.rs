//! End-to-end query: load → filter → aggregate or list → render.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::ProcessingResult;
use crate::ingestion::{ingest_from_path, IngestionOptions, LogObserver};
use crate::processing::{aggregate, filter_where};
use crate::render::Table;

/// Message printed when an aggregate request yields no result.
pub const INVALID_AGGREGATION: &str = "Invalid aggregation or non-numeric column";

/// One invocation's worth of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// CSV file to read.
    pub path: PathBuf,
    /// Optional filter condition, e.g. `price>500`.
    pub where_clause: Option<String>,
    /// Optional aggregate spec, e.g. `price=avg`.
    pub aggregate: Option<String>,
}

impl QueryRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            where_clause: None,
            aggregate: None,
        }
    }

    pub fn with_where(mut self, condition: impl Into<String>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }

    pub fn with_aggregate(mut self, spec: impl Into<String>) -> Self {
        self.aggregate = Some(spec.into());
        self
    }
}

/// What a query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutput {
    /// All (possibly filtered) rows.
    Table(Table),
    /// A single aggregate result row.
    Aggregate(Table),
    /// An aggregate was requested but produced no result.
    InvalidAggregation,
}

impl fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutput::Table(table) | QueryOutput::Aggregate(table) => write!(f, "{table}"),
            QueryOutput::InvalidAggregation => writeln!(f, "{INVALID_AGGREGATION}"),
        }
    }
}

/// Run a query with ingestion events forwarded to the `log` facade.
pub fn run(request: &QueryRequest) -> ProcessingResult<QueryOutput> {
    let options = IngestionOptions {
        observer: Some(Arc::new(LogObserver)),
        ..Default::default()
    };
    run_with_options(request, &options)
}

/// Run a query with explicit ingestion options.
///
/// Fails on unreadable input, malformed CSV, an unparseable condition or a missing column. An
/// aggregate that cannot be computed is not a failure: it yields
/// [`QueryOutput::InvalidAggregation`].
pub fn run_with_options(
    request: &QueryRequest,
    options: &IngestionOptions,
) -> ProcessingResult<QueryOutput> {
    let dataset = ingest_from_path(&request.path, options)?;
    let dataset = match request.where_clause.as_deref() {
        Some(condition) => filter_where(&dataset, Some(condition))?,
        None => dataset,
    };

    let Some(spec) = request.aggregate.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(QueryOutput::Table(Table::from_dataset(&dataset)));
    };

    Ok(match aggregate(&dataset, Some(spec))? {
        Some(result) => QueryOutput::Aggregate(Table::from_aggregate(&result)),
        None => QueryOutput::InvalidAggregation,
    })
}
