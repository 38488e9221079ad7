//! Filler-word classification.
//!
//! Two matching policies exist in the wild and disagree on edge cases
//! (standalone "like" versus "like,"), so both are exposed as selectable
//! configuration rather than merged. The dictionary is injected at
//! construction time; there is no global state.

use std::collections::HashSet;

use clipcut_models::Word;

/// How word text is normalized before dictionary lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillerPolicy {
    /// Lowercase and trim only; punctuation is significant. "like," is a
    /// verbal tic and matches, standalone "like" does not.
    PhraseAware,
    /// Strip all non-alphanumeric characters before matching against a
    /// small set of bare interjections.
    BareInterjection,
}

/// Default dictionary for [`FillerPolicy::PhraseAware`].
const PHRASE_AWARE_TOKENS: &[&str] = &[
    "um", "uh", "uh,", "um,", "umm", "uhh", "umm,", "uhh,", "ah", "ah,", "ahh", "ahh,", "er",
    "er,", "err", "err,", "hmm", "hmm,", "hm", "hm,", "mm", "mm,", "mmm", "mmm,", "like,",
    "you know,", "you know", "i mean,", "i mean", "sort of,", "sort of", "kind of,", "kind of",
];

/// Default dictionary for [`FillerPolicy::BareInterjection`].
const BARE_TOKENS: &[&str] = &[
    "um", "uh", "ah", "er", "hmm", "mm", "mmm", "umm", "uhh", "ahh", "err", "hm",
];

/// Case-insensitive filler classifier with an injected dictionary.
#[derive(Debug, Clone)]
pub struct FillerLexicon {
    policy: FillerPolicy,
    tokens: HashSet<String>,
}

impl FillerLexicon {
    /// Classifier with the default dictionary for the given policy.
    pub fn new(policy: FillerPolicy) -> Self {
        let defaults = match policy {
            FillerPolicy::PhraseAware => PHRASE_AWARE_TOKENS,
            FillerPolicy::BareInterjection => BARE_TOKENS,
        };
        Self::with_tokens(policy, defaults.iter().map(|s| s.to_string()))
    }

    /// Classifier with a caller-supplied dictionary, for localization or
    /// test substitution. Tokens are lowercased on the way in.
    pub fn with_tokens(policy: FillerPolicy, tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            policy,
            tokens: tokens.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn policy(&self) -> FillerPolicy {
        self.policy
    }

    /// Whether a word's text is a filler under this lexicon.
    pub fn is_filler(&self, text: &str) -> bool {
        let normalized = match self.policy {
            FillerPolicy::PhraseAware => text.trim().to_lowercase(),
            FillerPolicy::BareInterjection => text
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase(),
        };
        !normalized.is_empty() && self.tokens.contains(&normalized)
    }

    /// Drop fillers from a word list, returning survivors and the number
    /// of removals. Idempotent on an already-filtered list.
    pub fn filter_words<'a>(&self, words: &[&'a Word]) -> (Vec<&'a Word>, usize) {
        let mut kept = Vec::with_capacity(words.len());
        let mut removed = 0;
        for word in words {
            if self.is_filler(&word.text) {
                removed += 1;
            } else {
                kept.push(*word);
            }
        }
        (kept, removed)
    }
}
