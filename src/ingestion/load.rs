//! Path-based ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_path`], which loads a CSV file into an in-memory
//! [`crate::types::DataSet`] and, if an [`IngestionObserver`] is configured, reports the outcome
//! to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::ProcessingResult;
use crate::types::DataSet;

use super::csv::ingest_csv_from_path;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load a CSV file into a [`DataSet`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use tabfilter::ingestion::{ingest_from_path, IngestionOptions, LogObserver};
///
/// # fn main() -> Result<(), tabfilter::ProcessingError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let ds = ingest_from_path("products.csv", &opts)?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(
    path: impl AsRef<Path>,
    options: &IngestionOptions,
) -> ProcessingResult<DataSet> {
    let path = path.as_ref();
    let result = ingest_csv_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = IngestionContext {
            path: path.to_path_buf(),
        };
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                IngestionStats {
                    rows: ds.row_count(),
                    columns: ds.schema.len(),
                },
            ),
            Err(e) => {
                let sev = IngestionSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}
