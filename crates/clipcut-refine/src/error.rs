//! Error types for the refinement core.

use thiserror::Error;

/// Result type for refinement operations.
pub type RefineResult<T> = Result<T, RefineError>;

/// Errors that can occur during refinement.
#[derive(Debug, Error)]
pub enum RefineError {
    /// The transcript document is unusable. Fatal to the whole run.
    #[error("malformed transcript: {detail}")]
    MalformedTranscript { detail: String },

    /// No words survived for a sentence range (none existed, or all were
    /// fillers). Per-item and recoverable.
    #[error("no words left for sentences {start_index}-{end_index}")]
    EmptySegment {
        start_index: usize,
        end_index: usize,
    },

    /// A compilation references a segment index outside the clip list.
    #[error("compilation {id} references unknown segment index {index}")]
    UnknownSegment { id: u32, index: usize },
}

impl RefineError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedTranscript {
            detail: detail.into(),
        }
    }

    /// Whether this error aborts the whole batch rather than one item.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RefineError::MalformedTranscript { .. })
    }
}
