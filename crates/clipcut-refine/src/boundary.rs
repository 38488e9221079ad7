//! Precise boundary resolution from word timestamps.

use clipcut_models::Word;

use crate::error::{RefineError, RefineResult};
use crate::filler::FillerLexicon;
use crate::timeline::Timeline;

/// A sentence range resolved to exact, buffered media times.
#[derive(Debug)]
pub struct ResolvedSpan<'a> {
    /// Buffered start time in seconds, clamped to zero.
    pub start: f64,
    /// Buffered end time in seconds.
    pub end: f64,
    /// Surviving words in time order, fillers removed.
    pub words: Vec<&'a Word>,
    /// How many fillers were dropped.
    pub fillers_removed: usize,
}

impl ResolvedSpan<'_> {
    /// Buffered span duration in seconds.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// Resolve an inclusive sentence range to exact boundaries.
///
/// Concatenates the range's words in order, drops fillers when a lexicon
/// is given, and pads the surviving span by `safety_buffer` on each side.
/// The buffer compensates for imprecise word-boundary timestamps; the
/// start is clamped to zero.
///
/// Fails with [`RefineError::EmptySegment`] when no words survive.
pub fn resolve_span<'a>(
    timeline: &'a Timeline,
    start_index: usize,
    end_index: usize,
    lexicon: Option<&FillerLexicon>,
    safety_buffer: f64,
) -> RefineResult<ResolvedSpan<'a>> {
    let all_words = timeline.words_for_range(start_index, end_index);

    let (words, fillers_removed) = match lexicon {
        Some(lexicon) => lexicon.filter_words(&all_words),
        None => (all_words, 0),
    };

    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return Err(RefineError::EmptySegment {
            start_index,
            end_index,
        });
    };

    Ok(ResolvedSpan {
        start: (first.start - safety_buffer).max(0.0),
        end: last.end + safety_buffer,
        words,
        fillers_removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filler::FillerPolicy;

    fn timeline() -> Timeline {
        Timeline::from_json_str(
            r#"{
                "sentences": [
                    {"text": "um hello world", "start": 0.0, "end": 1.4, "words": [
                        {"word": "um", "start": 0.0, "end": 0.3},
                        {"word": "hello", "start": 0.5, "end": 0.9},
                        {"word": "world", "start": 1.0, "end": 1.4}
                    ]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_filler_dropped_and_buffer_applied() {
        let timeline = timeline();
        let lexicon = FillerLexicon::new(FillerPolicy::BareInterjection);
        let span = resolve_span(&timeline, 0, 0, Some(&lexicon), 0.1).unwrap();

        assert!((span.start - 0.4).abs() < 1e-9);
        assert!((span.end - 1.5).abs() < 1e-9);
        assert_eq!(span.fillers_removed, 1);
        assert_eq!(span.words.len(), 2);
    }

    #[test]
    fn test_start_clamped_to_zero() {
        let timeline = timeline();
        let span = resolve_span(&timeline, 0, 0, None, 0.5).unwrap();
        assert!(span.start.abs() < 1e-9);
        assert!((span.end - 1.9).abs() < 1e-9);
        assert_eq!(span.fillers_removed, 0);
        assert!(span.start < span.end);
    }

    #[test]
    fn test_empty_range_errors() {
        let timeline = timeline();
        let err = resolve_span(&timeline, 5, 9, None, 0.1).unwrap_err();
        assert!(matches!(
            err,
            RefineError::EmptySegment {
                start_index: 5,
                end_index: 9
            }
        ));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_all_fillers_errors() {
        let timeline = Timeline::from_json_str(
            r#"{"sentences":[{"text":"um uh","start":0.0,"end":0.8,"words":[
                {"word":"um","start":0.0,"end":0.3},
                {"word":"uh","start":0.5,"end":0.8}
            ]}]}"#,
        )
        .unwrap();
        let lexicon = FillerLexicon::new(FillerPolicy::BareInterjection);
        let err = resolve_span(&timeline, 0, 0, Some(&lexicon), 0.1).unwrap_err();
        assert!(matches!(err, RefineError::EmptySegment { .. }));
    }
}
