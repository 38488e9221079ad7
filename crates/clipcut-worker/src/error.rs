//! Worker error types.

use thiserror::Error;

use clipcut_media::MediaError;
use clipcut_refine::RefineError;

/// Result type for worker operations.
pub type WorkerResult<T> = Result<T, WorkerError>;

/// Errors that abort a batch run.
///
/// Per-item encode failures are not represented here; they are recorded
/// on the item report and counted in the summary.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("refinement error: {0}")]
    Refine(#[from] RefineError),

    #[error("media error: {0}")]
    Media(#[from] MediaError),

    #[error("invalid segment list: {detail}")]
    InvalidSegmentList { detail: String },

    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkerError {
    pub fn invalid_segment_list(detail: impl Into<String>) -> Self {
        Self::InvalidSegmentList {
            detail: detail.into(),
        }
    }
}
