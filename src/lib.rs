//! `tabfilter` loads a comma-delimited file with a header row into an in-memory
//! [`types::DataSet`], optionally keeps the rows matching one condition, optionally computes one
//! statistic over a numeric column, and renders the outcome as a bordered text table.
//!
//! The primary entrypoint is [`pipeline::run`]; the building blocks are public as well.
//!
//! ## Conditions
//!
//! A condition is `column <op> literal` with `op` one of `>=`, `<=`, `>`, `<`, `=`. When both the
//! cell and the literal parse as numbers they are compared numerically; otherwise only `=` is
//! defined, as exact string equality.
//!
//! ## Aggregates
//!
//! An aggregate spec is `column=operation` with `operation` one of `avg`, `min`, `max`
//! (case-insensitive). If any cell of the column is not a number, or the operation is unknown,
//! there is no result, which is not an error.
//!
//! ## Example
//!
//! ```rust
//! use tabfilter::processing::{aggregate, filter_where, AggregateOp};
//! use tabfilter::render::Table;
//! use tabfilter::types::{DataSet, Schema};
//!
//! let ds = DataSet::new(
//!     Schema::new(["name", "price"]),
//!     vec![
//!         vec!["Bob".into(), "100".into()],
//!         vec!["Alice".into(), "600".into()],
//!         vec!["Carol".into(), "300".into()],
//!     ],
//! );
//!
//! let filtered = filter_where(&ds, Some("price>200")).unwrap();
//! assert_eq!(filtered.row_count(), 2);
//! println!("{}", Table::from_dataset(&filtered));
//!
//! let max = aggregate(&ds, Some("price=max")).unwrap().unwrap();
//! assert_eq!((max.op, max.value), (AggregateOp::Max, 600.0));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading and ingestion observers
//! - [`types`]: schema + in-memory dataset types
//! - [`processing`]: condition parsing, filtering, aggregation
//! - [`render`]: bordered table output
//! - [`pipeline`]: the end-to-end query
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod render;
pub mod types;

pub use error::{ProcessingError, ProcessingResult};
