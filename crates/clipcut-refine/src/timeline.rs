//! Per-sentence word timeline built from a transcript document.

use clipcut_models::{TranscriptDoc, Word};

use crate::error::{RefineError, RefineResult};

/// Read-only index from sentence ordinal to its time-ordered word list.
///
/// Built once per transcript and shared by every item in a batch run.
#[derive(Debug)]
pub struct Timeline {
    words: Vec<Vec<Word>>,
}

impl Timeline {
    /// Build the timeline from a parsed transcript document.
    ///
    /// Validates per-word timing (`start <= end`, non-negative); a
    /// sentence without words contributes an empty list.
    pub fn from_doc(doc: TranscriptDoc) -> RefineResult<Self> {
        let mut words = Vec::with_capacity(doc.sentences.len());

        for (sentence_idx, sentence) in doc.sentences.into_iter().enumerate() {
            for (word_idx, word) in sentence.words.iter().enumerate() {
                if !word.start.is_finite() || !word.end.is_finite() {
                    return Err(RefineError::malformed(format!(
                        "sentence {} word {} has non-finite timestamp",
                        sentence_idx, word_idx
                    )));
                }
                if word.start < 0.0 || word.start > word.end {
                    return Err(RefineError::malformed(format!(
                        "sentence {} word {} has invalid time span {:.3}-{:.3}",
                        sentence_idx, word_idx, word.start, word.end
                    )));
                }
            }
            words.push(sentence.words);
        }

        Ok(Self { words })
    }

    /// Parse and index a transcript from its JSON text.
    pub fn from_json_str(json: &str) -> RefineResult<Self> {
        let doc: TranscriptDoc =
            serde_json::from_str(json).map_err(|e| RefineError::malformed(e.to_string()))?;
        Self::from_doc(doc)
    }

    /// Number of indexed sentences.
    pub fn sentence_count(&self) -> usize {
        self.words.len()
    }

    /// Words for one sentence ordinal. Unknown ordinals yield an empty
    /// slice rather than an error.
    pub fn words_for(&self, ordinal: usize) -> &[Word] {
        self.words.get(ordinal).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All words across an inclusive sentence range, in order.
    pub fn words_for_range(&self, start_index: usize, end_index: usize) -> Vec<&Word> {
        let mut out = Vec::new();
        for ordinal in start_index..=end_index {
            out.extend(self.words_for(ordinal).iter());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript_json() -> &'static str {
        r#"{
            "sentences": [
                {"text": "um hello world", "start": 0.0, "end": 1.4, "words": [
                    {"word": "um", "start": 0.0, "end": 0.3},
                    {"word": "hello", "start": 0.5, "end": 0.9},
                    {"word": "world", "start": 1.0, "end": 1.4}
                ]},
                {"text": "no words here", "start": 1.5, "end": 2.0},
                {"text": "there", "start": 2.0, "end": 2.3, "words": [
                    {"word": "there", "start": 2.0, "end": 2.3}
                ]}
            ]
        }"#
    }

    #[test]
    fn test_builds_index_per_sentence() {
        let timeline = Timeline::from_json_str(transcript_json()).unwrap();
        assert_eq!(timeline.sentence_count(), 3);
        assert_eq!(timeline.words_for(0).len(), 3);
        assert!(timeline.words_for(1).is_empty());
        assert_eq!(timeline.words_for(2).len(), 1);
    }

    #[test]
    fn test_range_spans_sentences_in_order() {
        let timeline = Timeline::from_json_str(transcript_json()).unwrap();
        let words = timeline.words_for_range(0, 2);
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["um", "hello", "world", "there"]);
    }

    #[test]
    fn test_unknown_ordinal_is_empty() {
        let timeline = Timeline::from_json_str(transcript_json()).unwrap();
        assert!(timeline.words_for(99).is_empty());
        assert!(timeline.words_for_range(50, 60).is_empty());
    }

    #[test]
    fn test_missing_sentences_is_malformed() {
        let err = Timeline::from_json_str(r#"{"other": []}"#).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("sentences"));
    }

    #[test]
    fn test_inverted_word_span_is_malformed() {
        let json = r#"{"sentences":[{"text":"x","start":0.0,"end":1.0,"words":[
            {"word":"x","start":1.0,"end":0.5}
        ]}]}"#;
        let err = Timeline::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("invalid time span"));
    }
}
