//! Term frequency ranking.
//!
//! Counts are exact. Ties keep the order in which terms first appear in the
//! text, so the ranking is fully determined by the input.
//!
//! # Examples
//!
//! ```
//! use narrative::analytics::keywords::KeywordRanker;
//!
//! let ranked = KeywordRanker::new().top_keywords("the cat the dog the cat", 2);
//! let pairs: Vec<(&str, usize)> = ranked.iter().map(|k| (k.token.as_str(), k.count)).collect();
//! assert_eq!(pairs, vec![("the", 3), ("cat", 2)]);
//! ```

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// A term and the number of times it occurs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub token: String,
    pub count: usize,
}

impl KeywordFrequency {
    pub fn new<S: Into<String>>(token: S, count: usize) -> Self {
        KeywordFrequency {
            token: token.into(),
            count,
        }
    }
}

/// Ranks lowercase whitespace-delimited terms by frequency.
#[derive(Clone, Debug, Default)]
pub struct KeywordRanker;

impl KeywordRanker {
    pub fn new() -> Self {
        KeywordRanker
    }

    /// Count every term, in first-seen order.
    pub fn frequencies(&self, text: &str) -> Vec<KeywordFrequency> {
        let lowered = text.to_lowercase();
        let mut index: AHashMap<&str, usize> = AHashMap::new();
        let mut counts: Vec<KeywordFrequency> = Vec::new();

        for term in lowered.split_whitespace() {
            match index.get(term) {
                Some(&slot) => counts[slot].count += 1,
                None => {
                    index.insert(term, counts.len());
                    counts.push(KeywordFrequency::new(term, 1));
                }
            }
        }

        counts
    }

    /// The `top_n` most frequent terms, by descending count.
    pub fn top_keywords(&self, text: &str, top_n: usize) -> Vec<KeywordFrequency> {
        let mut counts = self.frequencies(text);
        debug!("ranking {} distinct terms", counts.len());

        // Stable sort keeps first-seen order among equal counts.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(top_n);
        counts
    }
}
