//! In-memory data transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion.
//!
//! - [`Condition`]: parse a `column<op>literal` filter condition
//! - [`evaluate()`]: compare one cell against a literal (numeric, or string equality fallback)
//! - [`filter_where()`]: keep rows matching a condition
//! - [`aggregate()`]: `avg`/`min`/`max` over one numeric column
//!
//! ## Example: filter → aggregate
//!
//! ```rust
//! use tabfilter::processing::{aggregate, filter_where};
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
//! let expensive = filter_where(&ds, Some("price>200")).unwrap();
//! assert_eq!(expensive.row_count(), 2);
//!
//! let avg = aggregate(&expensive, Some("price=avg")).unwrap().unwrap();
//! assert_eq!(avg.value, 450.0);
//! ```

pub mod aggregate;
pub mod condition;
pub mod evaluate;
pub mod filter;

pub use aggregate::{aggregate, reduce_values, AggregateOp, AggregateResult, AggregateSpec};
pub use condition::{CompareOp, Condition};
pub use evaluate::{evaluate, parse_number};
pub use filter::{filter, filter_by_condition, filter_where};
