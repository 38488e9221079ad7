//! Aggregate batch statistics.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cutlist::RejectReason;

/// Unique identifier for a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BatchId(pub String);

impl BatchId {
    /// Generate a new random batch ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of one batch run, suitable for machine-readable output or
/// human-readable rendering via `Display`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchSummary {
    /// Unique identifier for this run.
    pub batch_id: BatchId,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Total items dispatched (segments plus compilations).
    pub total_items: usize,
    pub encoded: usize,
    pub rejected_no_speech: usize,
    pub rejected_too_short: usize,
    pub rejected_too_long: usize,
    pub encode_failed: usize,

    /// Filler words dropped across all items.
    pub fillers_removed: usize,
    /// Silence gaps cut across all items.
    pub silences_removed: usize,
    /// Keep-ranges extracted across all items.
    pub ranges_kept: usize,
    /// Advisory minus refined duration, summed over encoded items.
    pub time_saved_secs: f64,
}

impl BatchSummary {
    pub fn new(total_items: usize) -> Self {
        Self {
            batch_id: BatchId::new(),
            started_at: Utc::now(),
            finished_at: None,
            total_items,
            encoded: 0,
            rejected_no_speech: 0,
            rejected_too_short: 0,
            rejected_too_long: 0,
            encode_failed: 0,
            fillers_removed: 0,
            silences_removed: 0,
            ranges_kept: 0,
            time_saved_secs: 0.0,
        }
    }

    /// Count one rejection by reason.
    pub fn record_rejection(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::NoSpeech => self.rejected_no_speech += 1,
            RejectReason::TooShort => self.rejected_too_short += 1,
            RejectReason::TooLong => self.rejected_too_long += 1,
        }
    }

    /// Total number of rejected items.
    pub fn rejected(&self) -> usize {
        self.rejected_no_speech + self.rejected_too_short + self.rejected_too_long
    }

    /// Mark the run as finished.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "BATCH SUMMARY")?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Total items:            {}", self.total_items)?;
        writeln!(f, "Encoded:                {}", self.encoded)?;
        writeln!(f, "Rejected (no speech):   {}", self.rejected_no_speech)?;
        writeln!(f, "Rejected (too short):   {}", self.rejected_too_short)?;
        writeln!(f, "Rejected (too long):    {}", self.rejected_too_long)?;
        writeln!(f, "Failed:                 {}", self.encode_failed)?;
        writeln!(f, "Filler words removed:   {}", self.fillers_removed)?;
        writeln!(f, "Silences removed:       {}", self.silences_removed)?;
        writeln!(f, "Ranges kept:            {}", self.ranges_kept)?;
        writeln!(f, "Time saved:             {:.1}s", self.time_saved_secs)?;
        write!(f, "{}", "=".repeat(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_rejection_by_reason() {
        let mut summary = BatchSummary::new(3);
        summary.record_rejection(RejectReason::TooShort);
        summary.record_rejection(RejectReason::TooShort);
        summary.record_rejection(RejectReason::NoSpeech);
        assert_eq!(summary.rejected_too_short, 2);
        assert_eq!(summary.rejected_no_speech, 1);
        assert_eq!(summary.rejected(), 3);
    }

    #[test]
    fn test_display_includes_counts() {
        let mut summary = BatchSummary::new(5);
        summary.encoded = 4;
        summary.encode_failed = 1;
        let rendered = summary.to_string();
        assert!(rendered.contains("Total items:            5"));
        assert!(rendered.contains("Encoded:                4"));
        assert!(rendered.contains("Failed:                 1"));
    }

    #[test]
    fn test_finish_sets_timestamp() {
        let mut summary = BatchSummary::new(0);
        assert!(summary.finished_at.is_none());
        summary.finish();
        assert!(summary.finished_at.is_some());
    }
}
