//! Word-timestamped transcript input.
//!
//! The transcript document is produced by an upstream transcription step.
//! Each sentence carries a `words` array with per-word start/end times;
//! a sentence without `words` contributes an empty list rather than
//! failing the whole load.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single transcribed word with its time span in the source media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Word {
    /// The word text, as transcribed (may carry trailing punctuation).
    #[serde(rename = "word")]
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Duration of this word in seconds.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// One transcript sentence with its word-level timing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Sentence {
    pub text: String,
    /// Sentence start time in seconds.
    pub start: f64,
    /// Sentence end time in seconds.
    pub end: f64,
    /// Word-level timestamps. Missing in some caption sources.
    #[serde(default)]
    pub words: Vec<Word>,
}

/// Top-level transcript document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TranscriptDoc {
    pub sentences: Vec<Sentence>,
}

impl TranscriptDoc {
    /// Total number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}
