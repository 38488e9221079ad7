//! Worker configuration.

use std::path::PathBuf;

use clipcut_refine::{DurationLimits, FillerPolicy, RefinementConfig, RefinementPolicy};

/// Worker configuration.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Maximum concurrent encode tasks (each owns one FFmpeg process)
    pub max_concurrent_encodes: usize,
    /// Per-FFmpeg-call timeout in seconds
    pub encode_timeout_secs: u64,
    /// Base directory for per-item scratch space; system temp if unset
    pub work_dir: Option<PathBuf>,
    /// Refinement engine parameters
    pub refinement: RefinementConfig,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_encodes: 2,
            encode_timeout_secs: 600,
            work_dir: None,
            refinement: RefinementConfig::default(),
        }
    }
}

impl WorkerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let mut refinement = RefinementConfig::default();

        if let Some(policy) = env_var("CLIPCUT_POLICY").and_then(|s| parse_policy(&s)) {
            refinement = refinement.with_policy(policy);
        }
        if let Some(policy) = env_var("CLIPCUT_FILLER_POLICY").and_then(|s| parse_filler_policy(&s))
        {
            refinement = refinement.with_filler_policy(policy);
        }
        if let Some(secs) = env_parse("CLIPCUT_SAFETY_BUFFER") {
            refinement = refinement.with_safety_buffer(secs);
        }
        if let Some(secs) = env_parse("CLIPCUT_SILENCE_THRESHOLD") {
            refinement = refinement.with_silence_threshold(secs);
        }
        if let Some(secs) = env_parse("CLIPCUT_MIN_SUBCLIP_SECS") {
            refinement = refinement.with_min_subclip_secs(secs);
        }

        let limits = DurationLimits {
            min_secs: env_parse("CLIPCUT_MIN_CLIP_SECS").unwrap_or(refinement.limits.min_secs),
            max_secs: env_parse("CLIPCUT_MAX_CLIP_SECS").unwrap_or(refinement.limits.max_secs),
        };
        refinement = refinement.with_limits(limits);

        Self {
            max_concurrent_encodes: env_parse("CLIPCUT_MAX_ENCODES").unwrap_or(2),
            encode_timeout_secs: env_parse("CLIPCUT_ENCODE_TIMEOUT_SECS").unwrap_or(600),
            work_dir: env_var("CLIPCUT_WORK_DIR").map(PathBuf::from),
            refinement,
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

pub(crate) fn parse_policy(s: &str) -> Option<RefinementPolicy> {
    match s.to_ascii_lowercase().as_str() {
        "none" => Some(RefinementPolicy::None),
        "silence" | "silence_only" => Some(RefinementPolicy::SilenceOnly),
        "filler_silence" | "filler_and_silence" => Some(RefinementPolicy::FillerAndSilence),
        _ => None,
    }
}

pub(crate) fn parse_filler_policy(s: &str) -> Option<FillerPolicy> {
    match s.to_ascii_lowercase().as_str() {
        "phrase" | "phrase_aware" => Some(FillerPolicy::PhraseAware),
        "bare" | "bare_interjection" => Some(FillerPolicy::BareInterjection),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkerConfig::default();
        assert_eq!(config.max_concurrent_encodes, 2);
        assert_eq!(config.encode_timeout_secs, 600);
        assert!(config.work_dir.is_none());
        assert_eq!(
            config.refinement.policy,
            RefinementPolicy::FillerAndSilence
        );
    }

    #[test]
    fn test_parse_policy_names() {
        assert_eq!(parse_policy("none"), Some(RefinementPolicy::None));
        assert_eq!(parse_policy("SILENCE"), Some(RefinementPolicy::SilenceOnly));
        assert_eq!(
            parse_policy("filler_and_silence"),
            Some(RefinementPolicy::FillerAndSilence)
        );
        assert_eq!(parse_policy("bogus"), None);
    }

    #[test]
    fn test_parse_filler_policy_names() {
        assert_eq!(
            parse_filler_policy("phrase_aware"),
            Some(FillerPolicy::PhraseAware)
        );
        assert_eq!(
            parse_filler_policy("bare"),
            Some(FillerPolicy::BareInterjection)
        );
        assert_eq!(parse_filler_policy(""), None);
    }
}
