//! Refinement configuration.
//!
//! One engine parameterized by a removal strategy replaces the
//! near-duplicate pipeline variants (full cleanup, silence-only, and
//! coherent-sentence passthrough).

use serde::{Deserialize, Serialize};

use crate::duration::DurationLimits;
use crate::filler::FillerPolicy;

/// Which removal passes run during refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementPolicy {
    /// Resolve boundaries only; keep fillers and silences.
    None,
    /// Cut silences but keep filler words.
    SilenceOnly,
    /// Cut both fillers and silences.
    FillerAndSilence,
}

/// Tunable parameters for the refinement engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementConfig {
    /// Removal strategy for this run.
    pub policy: RefinementPolicy,
    /// How filler words are matched.
    pub filler_policy: FillerPolicy,
    /// Seconds of padding around computed boundaries.
    ///
    /// Compensates for imprecise word timestamps so onset/offset
    /// phonemes are not audibly truncated.
    pub safety_buffer: f64,
    /// Gaps strictly longer than this are silences (seconds).
    pub silence_threshold: f64,
    /// Sub-ranges shorter than this are dropped, not merged (seconds).
    pub min_subclip_secs: f64,
    /// Accept/reject limits for single segments.
    pub limits: DurationLimits,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            policy: RefinementPolicy::FillerAndSilence,
            filler_policy: FillerPolicy::PhraseAware,
            safety_buffer: 0.1,
            silence_threshold: 0.4,
            min_subclip_secs: 3.0,
            limits: DurationLimits::default(),
        }
    }
}

impl RefinementConfig {
    /// Builder-style setter for the removal strategy.
    pub fn with_policy(mut self, policy: RefinementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder-style setter for the filler matching policy.
    pub fn with_filler_policy(mut self, filler_policy: FillerPolicy) -> Self {
        self.filler_policy = filler_policy;
        self
    }

    /// Builder-style setter for the silence threshold.
    pub fn with_silence_threshold(mut self, secs: f64) -> Self {
        self.silence_threshold = secs.max(0.0);
        self
    }

    /// Builder-style setter for the safety buffer.
    pub fn with_safety_buffer(mut self, secs: f64) -> Self {
        self.safety_buffer = secs.max(0.0);
        self
    }

    /// Builder-style setter for the minimum sub-clip length.
    pub fn with_min_subclip_secs(mut self, secs: f64) -> Self {
        self.min_subclip_secs = secs.max(0.0);
        self
    }

    /// Builder-style setter for the duration limits.
    pub fn with_limits(mut self, limits: DurationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Whether fillers are removed under the current policy.
    pub fn removes_fillers(&self) -> bool {
        self.policy == RefinementPolicy::FillerAndSilence
    }

    /// Whether silences are cut under the current policy.
    pub fn removes_silences(&self) -> bool {
        matches!(
            self.policy,
            RefinementPolicy::SilenceOnly | RefinementPolicy::FillerAndSilence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_constants() {
        let config = RefinementConfig::default();
        assert!((config.safety_buffer - 0.1).abs() < 1e-9);
        assert!((config.silence_threshold - 0.4).abs() < 1e-9);
        assert!((config.min_subclip_secs - 3.0).abs() < 1e-9);
        assert!((config.limits.min_secs - 30.0).abs() < 1e-9);
        assert!((config.limits.max_secs - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_builder_setters() {
        let config = RefinementConfig::default()
            .with_policy(RefinementPolicy::SilenceOnly)
            .with_silence_threshold(0.25);
        assert_eq!(config.policy, RefinementPolicy::SilenceOnly);
        assert!((config.silence_threshold - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_policy_pass_selection() {
        assert!(!RefinementConfig::default()
            .with_policy(RefinementPolicy::None)
            .removes_silences());
        assert!(RefinementConfig::default()
            .with_policy(RefinementPolicy::SilenceOnly)
            .removes_silences());
        assert!(!RefinementConfig::default()
            .with_policy(RefinementPolicy::SilenceOnly)
            .removes_fillers());
        assert!(RefinementConfig::default().removes_fillers());
    }

    #[test]
    fn test_negative_threshold_clamped() {
        let config = RefinementConfig::default().with_silence_threshold(-1.0);
        assert!(config.silence_threshold.abs() < 1e-9);
    }
}
