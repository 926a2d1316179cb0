//! Single-column aggregation for [`crate::types::DataSet`].

use std::fmt;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::DataSet;

use super::evaluate::parse_number;

/// Built-in aggregate operations over a single numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    /// Arithmetic mean.
    Avg,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
}

impl AggregateOp {
    /// Look up an operation by its (already lower-cased) name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "avg" => Some(Self::Avg),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            _ => None,
        }
    }

    /// Label used as the result field name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `column=operation` request, split on the first `=`.
///
/// The operation is kept as text so an unknown operation is only rejected after the column has
/// been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    /// Column name (trimmed).
    pub column: String,
    /// Operation name (trimmed, lower-cased).
    pub operation: String,
}

impl AggregateSpec {
    /// Split a raw spec on its first `=`. Returns `None` when there is no `=`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (column, operation) = raw.split_once('=')?;
        Some(Self {
            column: column.trim().to_owned(),
            operation: operation.trim().to_lowercase(),
        })
    }

    /// The recognized operation, if any.
    pub fn op(&self) -> Option<AggregateOp> {
        AggregateOp::from_name(&self.operation)
    }
}

/// Result of a successful aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    /// Aggregated column.
    pub column: String,
    /// Operation that produced `value`.
    pub op: AggregateOp,
    /// Computed statistic.
    pub value: f64,
}

/// Compute `op` over a non-empty slice of values.
///
/// Returns `None` for an empty slice. `min`/`max` start from the first value and only replace it
/// with a strictly smaller/larger one, so a leading NaN is kept and a later NaN is passed over.
pub fn reduce_values(values: &[f64], op: AggregateOp) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    let out = match op {
        AggregateOp::Avg => values.iter().sum::<f64>() / values.len() as f64,
        AggregateOp::Min => rest.iter().fold(first, |acc, &v| if v < acc { v } else { acc }),
        AggregateOp::Max => rest.iter().fold(first, |acc, &v| if v > acc { v } else { acc }),
    };
    Some(out)
}

/// Aggregate one column of `dataset` using a raw `column=operation` spec such as `price=avg`.
///
/// - `Ok(None)` if the spec is absent/empty, has no `=`, or the dataset is empty.
/// - `Err(MissingColumn)` if the column is not in the header.
/// - `Ok(None)` if any cell of the column is not a number (no rows are skipped).
/// - `Ok(None)` if the operation is not `avg`, `min` or `max`.
///
/// ```
/// use tabfilter::processing::{aggregate, AggregateOp};
/// use tabfilter::types::{DataSet, Schema};
///
/// let ds = DataSet::new(
///     Schema::new(["price"]),
///     vec![vec!["100".into()], vec!["600".into()], vec!["300".into()]],
/// );
/// let out = aggregate(&ds, Some("price=max")).unwrap().unwrap();
/// assert_eq!(out.op, AggregateOp::Max);
/// assert_eq!(out.value, 600.0);
///
/// assert!(aggregate(&ds, Some("price=sum")).unwrap().is_none());
/// ```
pub fn aggregate(
    dataset: &DataSet,
    spec: Option<&str>,
) -> ProcessingResult<Option<AggregateResult>> {
    let raw = match spec {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };
    if dataset.is_empty() {
        return Ok(None);
    }
    let Some(spec) = AggregateSpec::parse(raw) else {
        log::debug!("aggregate: spec '{raw}' has no '='");
        return Ok(None);
    };
    log::debug!(
        "aggregate: column='{}' operation='{}'",
        spec.column,
        spec.operation
    );

    let idx = dataset
        .schema
        .index_of(&spec.column)
        .ok_or_else(|| ProcessingError::MissingColumn {
            column: spec.column.clone(),
        })?;

    let Some(values) = dataset
        .column_values(idx)
        .map(parse_number)
        .collect::<Option<Vec<f64>>>()
    else {
        log::debug!("aggregate: column '{}' is not numeric", spec.column);
        return Ok(None);
    };

    let Some(op) = spec.op() else {
        log::debug!("aggregate: unknown operation '{}'", spec.operation);
        return Ok(None);
    };

    Ok(reduce_values(&values, op).map(|value| AggregateResult {
        column: spec.column,
        op,
        value,
    }))
}
