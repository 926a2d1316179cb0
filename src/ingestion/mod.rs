//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`load`]) which:
//!
//! - reads a comma-delimited file with a header row into an in-memory [`crate::types::DataSet`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Reader-based ingestion is available under [`csv`].

pub mod csv;
pub mod load;
pub mod observability;

pub use load::{ingest_from_path, IngestionOptions};
pub use observability::{
    IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, LogObserver,
};
