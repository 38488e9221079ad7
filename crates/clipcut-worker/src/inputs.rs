//! Input loading and validation.
//!
//! Both inputs are validated up front so a malformed batch fails with a
//! diagnostic naming the bad record, before any FFmpeg process starts.

use std::path::Path;

use tracing::info;

use clipcut_models::SegmentList;
use clipcut_refine::Timeline;

use crate::error::{WorkerError, WorkerResult};

/// Load and index the word-timestamped transcript.
pub fn load_timeline(path: &Path) -> WorkerResult<Timeline> {
    let json = read(path)?;
    let timeline = Timeline::from_json_str(&json)?;
    info!(
        path = %path.display(),
        sentences = timeline.sentence_count(),
        "Transcript loaded"
    );
    Ok(timeline)
}

/// Load and validate the segment list.
pub fn load_segment_list(path: &Path) -> WorkerResult<SegmentList> {
    let json = read(path)?;
    let list = parse_segment_list(&json)?;
    info!(
        path = %path.display(),
        clips = list.clips.len(),
        compilations = list.compilations.len(),
        "Segment list loaded"
    );
    Ok(list)
}

fn read(path: &Path) -> WorkerResult<String> {
    std::fs::read_to_string(path).map_err(|source| WorkerError::ReadInput {
        path: path.display().to_string(),
        source,
    })
}

/// Parse a segment list and check structural invariants, including
/// compilation member indices against the clip list.
///
/// Out-of-range sentence ordinals are not checked here; they resolve to
/// empty word lists and surface as per-item no-speech rejections.
pub fn parse_segment_list(json: &str) -> WorkerResult<SegmentList> {
    let list: SegmentList =
        serde_json::from_str(json).map_err(|e| WorkerError::invalid_segment_list(e.to_string()))?;

    for (ordinal, segment) in list.clips.iter().enumerate() {
        if segment.start_index > segment.end_index {
            return Err(WorkerError::invalid_segment_list(format!(
                "clip {} has inverted sentence range {}-{}",
                ordinal, segment.start_index, segment.end_index
            )));
        }
    }
    for compilation in &list.compilations {
        if compilation.segment_indices.is_empty() {
            return Err(WorkerError::invalid_segment_list(format!(
                "compilation {} has no members",
                compilation.id
            )));
        }
        for &index in &compilation.segment_indices {
            if index >= list.clips.len() {
                return Err(WorkerError::invalid_segment_list(format!(
                    "compilation {} references unknown segment index {}",
                    compilation.id, index
                )));
            }
        }
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_list() {
        let json = r#"{
            "clips": [{
                "start_index": 0, "end_index": 2,
                "suggested_title": "Intro",
                "start_time": 0.0, "end_time": 40.0, "duration": 40.0
            }],
            "compilations": [{"id": 1, "title": "Mix", "segment_indices": [0]}]
        }"#;
        let list = parse_segment_list(json).unwrap();
        assert_eq!(list.item_count(), 2);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let json = r#"{"clips": [{
            "start_index": 5, "end_index": 2,
            "suggested_title": "Bad",
            "start_time": 0.0, "end_time": 1.0, "duration": 1.0
        }]}"#;
        let err = parse_segment_list(json).unwrap_err();
        assert!(err.to_string().contains("inverted sentence range"));
    }

    #[test]
    fn test_empty_compilation_rejected() {
        let json = r#"{"clips": [], "compilations": [{
            "id": 3, "title": "Empty", "segment_indices": []
        }]}"#;
        let err = parse_segment_list(json).unwrap_err();
        assert!(err.to_string().contains("compilation 3"));
    }

    #[test]
    fn test_out_of_range_member_rejected_at_load() {
        // Must fail here, before any item runs, not mid-batch
        let json = r#"{
            "clips": [{
                "start_index": 0, "end_index": 2,
                "suggested_title": "Intro",
                "start_time": 0.0, "end_time": 40.0, "duration": 40.0
            }],
            "compilations": [{"id": 1, "title": "Mix", "segment_indices": [0, 9]}]
        }"#;
        let err = parse_segment_list(json).unwrap_err();
        assert!(err.to_string().contains("unknown segment index 9"));
    }

    #[test]
    fn test_missing_clips_key_rejected() {
        let err = parse_segment_list(r#"{"compilations": []}"#).unwrap_err();
        assert!(matches!(err, WorkerError::InvalidSegmentList { .. }));
    }
}
