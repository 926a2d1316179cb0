//! Row filtering for [`crate::types::DataSet`].

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::DataSet;

use super::condition::Condition;

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[String]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Filter `dataset` by a raw condition string such as `price>500`.
///
/// - `None` or an empty string returns the dataset unchanged.
/// - The condition is parsed once; an unparseable condition is an error.
/// - A condition on a column that is not in the header fails as soon as there is a row to
///   evaluate.
pub fn filter_where(dataset: &DataSet, condition: Option<&str>) -> ProcessingResult<DataSet> {
    let raw = match condition {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(dataset.clone()),
    };

    let condition = Condition::parse(raw)?;
    log::debug!(
        "filter: column='{}' op='{}' literal='{}'",
        condition.column,
        condition.op,
        condition.literal
    );
    filter_by_condition(dataset, &condition)
}

/// Filter `dataset` by an already parsed [`Condition`].
pub fn filter_by_condition(dataset: &DataSet, condition: &Condition) -> ProcessingResult<DataSet> {
    if dataset.is_empty() {
        return Ok(dataset.clone());
    }

    let idx = dataset
        .schema
        .index_of(&condition.column)
        .ok_or_else(|| ProcessingError::MissingColumn {
            column: condition.column.clone(),
        })?;

    let out = filter(dataset, |row| {
        row.get(idx).is_some_and(|cell| condition.matches(cell))
    });
    log::debug!("filter: kept {} of {} rows", out.row_count(), dataset.row_count());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{filter, filter_where};
    use crate::error::ProcessingError;
    use crate::types::{DataSet, Schema};

    fn rows(values: &[&[&str]]) -> Vec<Vec<String>> {
        values
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn products() -> DataSet {
        DataSet::new(
            Schema::new(["name", "price"]),
            rows(&[&["Bob", "100"], &["Alice", "600"], &["Carol", "300"]]),
        )
    }

    #[test]
    fn absent_or_empty_condition_is_identity() {
        let ds = products();
        assert_eq!(filter_where(&ds, None).unwrap(), ds);
        assert_eq!(filter_where(&ds, Some("")).unwrap(), ds);
    }

    #[test]
    fn numeric_filter_preserves_order() {
        let ds = products();
        let out = filter_where(&ds, Some("price>200")).unwrap();
        assert_eq!(out.schema, ds.schema);
        assert_eq!(out.rows, rows(&[&["Alice", "600"], &["Carol", "300"]]));
    }

    #[test]
    fn string_equality_filter() {
        let ds = products();
        let out = filter_where(&ds, Some("name=Bob")).unwrap();
        assert_eq!(out.rows, rows(&[&["Bob", "100"]]));

        let out = filter_where(&ds, Some("name=bob")).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn ordering_operator_on_text_keeps_nothing() {
        let ds = products();
        let out = filter_where(&ds, Some("name>A")).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.schema, ds.schema);
    }

    #[test]
    fn invalid_condition_propagates() {
        let err = filter_where(&products(), Some("price500")).unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidCondition { .. }));
    }

    #[test]
    fn missing_column_aborts_the_filter() {
        let err = filter_where(&products(), Some("weight>1")).unwrap_err();
        assert!(matches!(
            err,
            ProcessingError::MissingColumn { ref column } if column == "weight"
        ));
    }

    #[test]
    fn missing_column_on_empty_dataset_is_not_evaluated() {
        let ds = DataSet::new(Schema::new(["name"]), Vec::new());
        assert_eq!(filter_where(&ds, Some("weight>1")).unwrap(), ds);
    }

    #[test]
    fn duplicate_header_filters_on_last_column() {
        let ds = DataSet::new(Schema::new(["a", "a"]), rows(&[&["1", "2"]]));
        let out = filter_where(&ds, Some("a>1")).unwrap();
        assert_eq!(out.rows, rows(&[&["1", "2"]]));
    }

    #[test]
    fn predicate_filter_can_return_empty_dataset() {
        let ds = products();
        let out = filter(&ds, |_| false);
        assert_eq!(out.schema, ds.schema);
        assert!(out.rows.is_empty());
    }

    proptest! {
        #[test]
        fn filter_output_is_an_ordered_subsequence(
            prices in proptest::collection::vec(-1000i32..1000, 0..40),
            threshold in -1000i32..1000,
        ) {
            let ds = DataSet::new(
                Schema::new(["price"]),
                prices.iter().map(|p| vec![p.to_string()]).collect(),
            );
            let cond = format!("price>={threshold}");
            let out = filter_where(&ds, Some(&cond)).unwrap();

            let expected: Vec<Vec<String>> = prices
                .iter()
                .filter(|p| **p >= threshold)
                .map(|p| vec![p.to_string()])
                .collect();
            prop_assert_eq!(out.rows, expected);
        }
    }
}
