use std::path::PathBuf;

use crate::error::ProcessingError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Error-level event (the input was read but could not be parsed).
    Error,
    /// Critical error (the input could not be read at all).
    Critical,
}

impl IngestionSeverity {
    /// Classify an ingestion error.
    pub fn for_error(e: &ProcessingError) -> Self {
        match e {
            ProcessingError::FileAccess { .. } => Self::Critical,
            ProcessingError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            ProcessingError::InvalidCondition { .. } | ProcessingError::MissingColumn { .. } => {
                Self::Error
            }
        }
    }
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The input path used for ingestion.
    pub path: PathBuf,
}

/// Minimal stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of ingested rows.
    pub rows: usize,
    /// Number of header columns.
    pub columns: usize,
}

/// Observer interface for ingestion outcomes.
pub trait IngestionObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when ingestion fails.
    fn on_failure(
        &self,
        _ctx: &IngestionContext,
        _severity: IngestionSeverity,
        _error: &ProcessingError,
    ) {
    }

    /// Called when an ingestion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Forwards ingestion events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl IngestionObserver for LogObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        log::info!(
            "[ingest][ok] path={} rows={} columns={}",
            ctx.path.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        log::warn!(
            "[ingest][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        log::error!(
            "[ALERT][ingest][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}
