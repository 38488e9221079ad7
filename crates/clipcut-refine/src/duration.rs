//! Output duration policy.

use serde::{Deserialize, Serialize};

/// Minimum and maximum refined clip length in seconds.
///
/// Applies to single segments only; compilations are exempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DurationLimits {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl Default for DurationLimits {
    fn default() -> Self {
        Self {
            min_secs: 30.0,
            max_secs: 180.0,
        }
    }
}

/// Classification of a refined duration. Bounds are inclusive: a clip of
/// exactly `min_secs` or `max_secs` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationVerdict {
    TooShort,
    Accepted,
    TooLong,
}

impl DurationLimits {
    /// Classify a refined duration. Total over all inputs: every value
    /// maps to exactly one verdict.
    pub fn classify(&self, duration_secs: f64) -> DurationVerdict {
        if duration_secs < self.min_secs {
            DurationVerdict::TooShort
        } else if duration_secs > self.max_secs {
            DurationVerdict::TooLong
        } else {
            DurationVerdict::Accepted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        let limits = DurationLimits::default();
        assert_eq!(limits.classify(30.0), DurationVerdict::Accepted);
        assert_eq!(limits.classify(180.0), DurationVerdict::Accepted);
    }

    #[test]
    fn test_below_minimum_is_too_short() {
        let limits = DurationLimits::default();
        assert_eq!(limits.classify(29.9), DurationVerdict::TooShort);
        assert_eq!(limits.classify(0.0), DurationVerdict::TooShort);
    }

    #[test]
    fn test_above_maximum_is_too_long() {
        let limits = DurationLimits::default();
        assert_eq!(limits.classify(180.1), DurationVerdict::TooLong);
    }

    #[test]
    fn test_every_duration_maps_to_one_verdict() {
        let limits = DurationLimits::default();
        for duration in [0.0, 29.999, 30.0, 100.0, 180.0, 180.001, 1e9] {
            let verdict = limits.classify(duration);
            let count = [
                DurationVerdict::TooShort,
                DurationVerdict::Accepted,
                DurationVerdict::TooLong,
            ]
            .iter()
            .filter(|v| **v == verdict)
            .count();
            assert_eq!(count, 1);
        }
    }
}
