//! CSV ingestion implementation.

use std::fs::File;
use std::path::Path;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::{DataSet, Schema};

/// Ingest a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first record is the header; its column names and order become the [`Schema`].
/// - Every following record is one row; cells are kept as their original text.
/// - A record with a different number of fields than the header is an error.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> ProcessingResult<DataSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ProcessingError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ProcessingResult<DataSet> {
    let headers = rdr.headers()?.clone();
    let schema = Schema::new(headers.iter());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(DataSet::new(schema, rows))
}

#[cfg(test)]
mod tests {
    use super::ingest_csv_from_reader;
    use crate::error::ProcessingError;

    fn reader(input: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes())
    }

    #[test]
    fn keeps_cells_as_raw_text() {
        let ds = ingest_csv_from_reader(&mut reader("name,price\n Ada ,0100\n")).unwrap();
        assert_eq!(ds.schema.columns, vec!["name", "price"]);
        assert_eq!(ds.rows, vec![vec![" Ada ".to_string(), "0100".to_string()]]);
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let ds = ingest_csv_from_reader(&mut reader("city,pop\n\"Paris, FR\",2100000\n")).unwrap();
        assert_eq!(ds.rows[0][0], "Paris, FR");
    }

    #[test]
    fn header_only_input_has_no_rows() {
        let ds = ingest_csv_from_reader(&mut reader("a,b,c\n")).unwrap();
        assert_eq!(ds.schema.len(), 3);
        assert!(ds.is_empty());
    }

    #[test]
    fn ragged_record_is_an_error() {
        let err = ingest_csv_from_reader(&mut reader("a,b\n1,2\n3\n")).unwrap_err();
        assert!(matches!(err, ProcessingError::Csv(_)));
        assert!(err.to_string().starts_with("csv error"));
    }
}
