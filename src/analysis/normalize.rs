//! Named normalization policies.
//!
//! The general pipeline and the summary path clean text with two different
//! character whitelists:
//!
//! | policy    | keeps                                        | collapses whitespace |
//! |-----------|----------------------------------------------|----------------------|
//! | `General` | ASCII letters, digits, `.`, whitespace       | no (separate stage)  |
//! | `Summary` | ASCII letters, digits, `.`, `,`, whitespace  | yes, then trims      |
//!
//! # Examples
//!
//! ```
//! use narrative::analysis::normalize::{clean_whitespace, strip_for_summary, strip_non_essential};
//!
//! assert_eq!(clean_whitespace("  a \n b "), "a b");
//! assert_eq!(strip_non_essential("Hi, there! v1.2"), "Hi there v1.2");
//! assert_eq!(strip_for_summary("Hi,  there!\nv1.2"), "Hi, there v1.2");
//! ```

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, PatternRemoveCharFilter, WhitespaceCharFilter};

/// Everything that is not an ASCII letter, digit, dot or whitespace.
const GENERAL_REMOVE_PATTERN: &str = r"[^a-zA-Z0-9.\s]";

/// Everything that is not an ASCII letter, digit, dot, comma, newline or whitespace.
const SUMMARY_REMOVE_PATTERN: &str = r"[^a-zA-Z0-9\s.,\n]";

static GENERAL_FILTER: LazyLock<PatternRemoveCharFilter> = LazyLock::new(|| {
    PatternRemoveCharFilter::new(GENERAL_REMOVE_PATTERN)
        .unwrap_or_else(|e| panic!("general normalization pattern is invalid: {e}"))
});

static SUMMARY_FILTER: LazyLock<PatternRemoveCharFilter> = LazyLock::new(|| {
    PatternRemoveCharFilter::new(SUMMARY_REMOVE_PATTERN)
        .unwrap_or_else(|e| panic!("summary normalization pattern is invalid: {e}"))
});

/// A named character-level cleanup policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationPolicy {
    /// Special-character removal used by the general pipeline.
    General,
    /// Cleanup used ahead of summarization.
    Summary,
}

impl NormalizationPolicy {
    /// Apply this policy to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            NormalizationPolicy::General => strip_non_essential(text),
            NormalizationPolicy::Summary => strip_for_summary(text),
        }
    }

    /// The char filter backing this policy's character removal.
    pub fn char_filter(self) -> &'static PatternRemoveCharFilter {
        match self {
            NormalizationPolicy::General => &GENERAL_FILTER,
            NormalizationPolicy::Summary => &SUMMARY_FILTER,
        }
    }
}

/// Collapse whitespace runs into single spaces and trim both ends.
pub fn clean_whitespace(text: &str) -> String {
    WhitespaceCharFilter::new().filter(text)
}

/// Remove every character that is not an ASCII letter, digit, dot or whitespace.
pub fn strip_non_essential(text: &str) -> String {
    GENERAL_FILTER.filter(text)
}

/// Remove every character outside the summary whitelist, then collapse
/// whitespace and trim.
pub fn strip_for_summary(text: &str) -> String {
    clean_whitespace(&SUMMARY_FILTER.filter(text))
}
