//! Coarse segments and compilations produced by the upstream analysis step.
//!
//! These records are loaded as input and never mutated by the refinement
//! core; refined boundaries are always derived into new values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A coherent segment identified by the analysis step.
///
/// `start_index..=end_index` are zero-based sentence ordinals into the
/// transcript. The time fields are advisory pre-refinement values; the
/// refined boundaries come from word-level timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    /// First sentence ordinal (inclusive).
    pub start_index: usize,
    /// Last sentence ordinal (inclusive).
    pub end_index: usize,
    /// Title suggested by the analysis step, used for output naming.
    pub suggested_title: String,
    /// Advisory start time in seconds.
    pub start_time: f64,
    /// Advisory end time in seconds.
    pub end_time: f64,
    /// Advisory duration in seconds.
    pub duration: f64,
}

/// An output composed by concatenating several segments' refined ranges.
///
/// Compilations are exempt from single-segment duration limits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Compilation {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub topic: String,
    /// Ordered indices into the `clips` collection.
    pub segment_indices: Vec<usize>,
}

/// Top-level segment-list document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SegmentList {
    pub clips: Vec<Segment>,
    #[serde(default)]
    pub compilations: Vec<Compilation>,
}

impl SegmentList {
    /// Total number of batch items (segments plus compilations).
    pub fn item_count(&self) -> usize {
        self.clips.len() + self.compilations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilations_default_to_empty() {
        let json = r#"{"clips":[]}"#;
        let list: SegmentList = serde_json::from_str(json).unwrap();
        assert!(list.compilations.is_empty());
        assert_eq!(list.item_count(), 0);
    }

    #[test]
    fn test_segment_roundtrip() {
        let json = r#"{
            "clips": [{
                "start_index": 3,
                "end_index": 7,
                "suggested_title": "Why Rust?",
                "start_time": 41.2,
                "end_time": 95.8,
                "duration": 54.6
            }],
            "compilations": [{
                "id": 1,
                "title": "Best of stream",
                "topic": "rust",
                "segment_indices": [0]
            }]
        }"#;
        let list: SegmentList = serde_json::from_str(json).unwrap();
        assert_eq!(list.clips[0].start_index, 3);
        assert_eq!(list.compilations[0].segment_indices, vec![0]);
        assert_eq!(list.item_count(), 2);
    }
}
