//! Persisted mapping from batch items to output artifacts.
//!
//! The manifest is written by the batch runner so downstream tooling can
//! correlate a segment with its output without parsing filenames.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::range::KeepRange;

/// What a manifest entry was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManifestSource {
    /// A single segment, identified by its zero-based ordinal in the
    /// `clips` collection.
    Segment { ordinal: usize },
    /// A compilation, identified by its `id`.
    Compilation { id: u32 },
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::Segment { ordinal } => write!(f, "segment {}", ordinal),
            ManifestSource::Compilation { id } => write!(f, "compilation {}", id),
        }
    }
}

/// One produced output artifact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ManifestEntry {
    #[serde(flatten)]
    pub source: ManifestSource,
    /// Output file name relative to the output directory.
    pub output: String,
    /// Final duration in seconds.
    pub duration_secs: f64,
    /// Keep-ranges that were extracted and concatenated.
    pub ranges: Vec<KeepRange>,
}

/// The full output manifest for one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct OutputManifest {
    pub entries: Vec<ManifestEntry>,
}

impl OutputManifest {
    /// Look up the output produced for a segment ordinal.
    pub fn output_for_segment(&self, ordinal: usize) -> Option<&ManifestEntry> {
        self.entries
            .iter()
            .find(|e| e.source == ManifestSource::Segment { ordinal })
    }

    /// Look up the output produced for a compilation id.
    pub fn output_for_compilation(&self, id: u32) -> Option<&ManifestEntry> {
        self.entries
            .iter()
            .find(|e| e.source == ManifestSource::Compilation { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OutputManifest {
        OutputManifest {
            entries: vec![
                ManifestEntry {
                    source: ManifestSource::Segment { ordinal: 0 },
                    output: "001_intro.mp4".to_string(),
                    duration_secs: 42.0,
                    ranges: vec![KeepRange::new(0.4, 42.4)],
                },
                ManifestEntry {
                    source: ManifestSource::Compilation { id: 2 },
                    output: "comp_002_best_of.mp4".to_string(),
                    duration_secs: 120.0,
                    ranges: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_lookup_by_segment_ordinal() {
        let manifest = sample();
        assert_eq!(
            manifest.output_for_segment(0).unwrap().output,
            "001_intro.mp4"
        );
        assert!(manifest.output_for_segment(5).is_none());
    }

    #[test]
    fn test_lookup_by_compilation_id() {
        let manifest = sample();
        assert_eq!(
            manifest.output_for_compilation(2).unwrap().output,
            "comp_002_best_of.mp4"
        );
        assert!(manifest.output_for_compilation(9).is_none());
    }

    #[test]
    fn test_source_serde_tagging() {
        let entry = &sample().entries[0];
        let json = serde_json::to_string(entry).unwrap();
        assert!(json.contains(r#""kind":"segment""#));
        assert!(json.contains(r#""ordinal":0"#));
    }
}
