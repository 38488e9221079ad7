//! Silence detection and keep-range partitioning.
//!
//! Silence is inferred purely from gaps between consecutive word
//! timestamps, never from waveform analysis. This is deterministic given
//! already-available word timing, at the cost of missing silences that
//! fall inside a word's reported span.

use clipcut_models::{KeepRange, Word};

/// Result of partitioning a span at its silence gaps.
#[derive(Debug)]
pub struct SilenceSplit {
    /// Buffered keep-ranges, sorted ascending and non-overlapping.
    pub ranges: Vec<KeepRange>,
    /// Number of gaps that became cut points.
    pub silences_removed: usize,
    /// Sub-ranges dropped for falling below the minimum length.
    pub dropped_short: usize,
}

/// Inter-word gaps strictly greater than `threshold`, as
/// `(gap_start, gap_end)` pairs.
pub fn detect_gaps(words: &[&Word], threshold: f64) -> Vec<(f64, f64)> {
    let mut gaps = Vec::new();
    for pair in words.windows(2) {
        if pair[1].start - pair[0].end > threshold {
            gaps.push((pair[0].end, pair[1].start));
        }
    }
    gaps
}

/// Partition a filtered, time-ordered word list into keep-ranges.
///
/// Sub-ranges are built on unbuffered word times, dropped entirely when
/// shorter than `min_subclip` (not merged into a neighbor), and the
/// survivors are each padded by `safety_buffer` independently with the
/// start clamped to zero.
///
/// A gapless input degenerates to a single range covering the full span.
pub fn split_keep_ranges(
    words: &[&Word],
    threshold: f64,
    min_subclip: f64,
    safety_buffer: f64,
) -> SilenceSplit {
    let Some(first) = words.first() else {
        return SilenceSplit {
            ranges: Vec::new(),
            silences_removed: 0,
            dropped_short: 0,
        };
    };

    let mut raw = Vec::new();
    let mut current_start = first.start;
    let mut current_end = first.end;
    let mut silences_removed = 0;

    for pair in words.windows(2) {
        let next = pair[1];
        if next.start - pair[0].end > threshold {
            raw.push(KeepRange::new(current_start, current_end));
            current_start = next.start;
            silences_removed += 1;
        }
        current_end = next.end;
    }
    raw.push(KeepRange::new(current_start, current_end));

    let mut ranges = Vec::with_capacity(raw.len());
    let mut dropped_short = 0;
    for range in raw {
        if range.duration() >= min_subclip {
            ranges.push(range.buffered(safety_buffer));
        } else {
            dropped_short += 1;
        }
    }

    SilenceSplit {
        ranges,
        silences_removed,
        dropped_short,
    }
}
