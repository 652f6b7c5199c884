use regex::Regex;

use super::CharFilter;
use crate::error::{NarrativeError, Result};

/// A char filter that deletes every substring matching a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternRemoveCharFilter {
    pattern: Regex,
}

impl PatternRemoveCharFilter {
    /// Create a new pattern remove char filter.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| NarrativeError::Anyhow(anyhow::Error::from(e)))?,
        })
    }

    /// Get the source of the pattern this filter removes.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternRemoveCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_remove"
    }
}
