//! Cut-list items and batch item lifecycle.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::range::{total_duration, KeepRange};

/// Why a batch item was rejected during refinement.
///
/// Rejections are expected outcomes, not faults; they are counted in the
/// batch summary but produce no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// No words in the sentence range, or every word was a filler.
    NoSpeech,
    /// Refined duration below the minimum clip length.
    TooShort,
    /// Refined duration above the maximum clip length.
    TooLong,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NoSpeech => write!(f, "no speech content"),
            RejectReason::TooShort => write!(f, "too short"),
            RejectReason::TooLong => write!(f, "too long"),
        }
    }
}

/// Lifecycle state of one batch item.
///
/// `Rejected`, `Encoded` and `EncodeFailed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Pending,
    Resolving,
    Rejected,
    Assembled,
    Encoded,
    EncodeFailed,
}

impl ItemState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ItemState::Rejected | ItemState::Encoded | ItemState::EncodeFailed
        )
    }
}

impl std::fmt::Display for ItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ItemState::Pending => "pending",
            ItemState::Resolving => "resolving",
            ItemState::Rejected => "rejected",
            ItemState::Assembled => "assembled",
            ItemState::Encoded => "encoded",
            ItemState::EncodeFailed => "encode_failed",
        };
        write!(f, "{}", s)
    }
}

/// One item's final set of keep-ranges plus refinement metadata.
///
/// Extracting each range and concatenating them in order yields the
/// final clip.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CutListItem {
    /// Keep-ranges, sorted ascending and non-overlapping.
    pub ranges: Vec<KeepRange>,
    /// Output file name (slugged, extension included).
    pub output_name: String,
    /// Filler words dropped while resolving boundaries.
    pub fillers_removed: usize,
    /// Silence gaps that became cut points.
    pub silences_removed: usize,
    /// Final refined duration in seconds (sum of range durations).
    pub duration_secs: f64,
    /// Advisory duration minus refined duration, in seconds.
    pub time_saved_secs: f64,
}

impl CutListItem {
    /// Recompute the duration from the ranges. Useful after editing.
    pub fn computed_duration(&self) -> f64 {
        total_duration(&self.ranges)
    }
}
