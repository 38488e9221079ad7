//! Time ranges kept in the refined output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A contiguous time interval of source media retained in the output.
///
/// Invariant: `start < end`. Within one refined segment, keep-ranges are
/// sorted ascending and pairwise non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeepRange {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl KeepRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Duration of this range in seconds.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Expand this range by `buffer` seconds on each side.
    ///
    /// The start is clamped to zero (a clip must never reference negative
    /// media time); the end is always extendable.
    pub fn buffered(&self, buffer: f64) -> Self {
        Self {
            start: (self.start - buffer).max(0.0),
            end: self.end + buffer,
        }
    }
}

/// Sum of range durations in seconds.
pub fn total_duration(ranges: &[KeepRange]) -> f64 {
    ranges.iter().map(KeepRange::duration).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let range = KeepRange::new(0.4, 1.5);
        assert!((range.duration() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_buffered_clamps_start_to_zero() {
        let range = KeepRange::new(0.05, 1.0).buffered(0.1);
        assert!(range.start.abs() < 1e-9);
        assert!((range.end - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_buffered_extends_both_sides() {
        let range = KeepRange::new(2.0, 3.0).buffered(0.1);
        assert!((range.start - 1.9).abs() < 1e-9);
        assert!((range.end - 3.1).abs() < 1e-9);
    }

    #[test]
    fn test_total_duration() {
        let ranges = vec![KeepRange::new(0.0, 1.0), KeepRange::new(2.0, 4.5)];
        assert!((total_duration(&ranges) - 3.5).abs() < 1e-9);
    }
}
