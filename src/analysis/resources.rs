//! Process-wide linguistic resources.
//!
//! [`LinguisticResources`] bundles the stop word set and the lemma dictionary
//! used by the pipeline and the summary path. Both are immutable once
//! built and shared through `Arc`, so one instance can serve any number of
//! concurrent analyses without synchronization.
//!
//! [`LinguisticResources::english`] returns the built-in English resources,
//! initialized on first use. Hosts and tests can build their own from word
//! lists or files and inject them instead.
//!
//! # Examples
//!
//! ```
//! use narrative::analysis::resources::LinguisticResources;
//!
//! let resources = LinguisticResources::builder()
//!     .stop_words(["the", "a"])
//!     .build();
//! assert!(resources.stop_filter().is_stop_word("The"));
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::debug;

use crate::analysis::token_filter::lemma::{LemmaDictionary, LemmaFilter};
use crate::analysis::token_filter::stop::{DEFAULT_ENGLISH_STOP_WORDS_SET, StopFilter};
use crate::error::Result;

static ENGLISH_RESOURCES: LazyLock<LinguisticResources> = LazyLock::new(|| {
    debug!("initializing built-in English linguistic resources");
    LinguisticResources {
        stop_words: Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET),
        lemmas: LemmaDictionary::english(),
    }
});

/// Read-only stop word set and lemma dictionary.
#[derive(Clone, Debug)]
pub struct LinguisticResources {
    stop_words: Arc<HashSet<String>>,
    lemmas: Arc<LemmaDictionary>,
}

impl LinguisticResources {
    /// The built-in English resources.
    pub fn english() -> LinguisticResources {
        ENGLISH_RESOURCES.clone()
    }

    /// Start building custom resources. Unset parts default to English.
    pub fn builder() -> LinguisticResourcesBuilder {
        LinguisticResourcesBuilder::default()
    }

    /// Load resources from optional files, falling back to English for
    /// whichever file is not given.
    ///
    /// The stop word file holds one word per line; `#` starts a comment line.
    /// The lemma file format is described on [`LemmaDictionary::from_reader`].
    pub fn from_files(stop_words: Option<&Path>, lemmas: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(path) = stop_words {
            debug!("loading stop words from {}", path.display());
            builder = builder.stop_words(read_word_list(path)?);
        }
        if let Some(path) = lemmas {
            debug!("loading lemma dictionary from {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            builder = builder.lemma_dictionary(LemmaDictionary::from_reader(reader)?);
        }
        Ok(builder.build())
    }

    /// The stop word set (lowercase).
    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        &self.stop_words
    }

    /// The lemma dictionary.
    pub fn lemma_dictionary(&self) -> &Arc<LemmaDictionary> {
        &self.lemmas
    }

    /// A stop filter sharing this stop word set.
    pub fn stop_filter(&self) -> StopFilter {
        StopFilter::with_stop_words(Arc::clone(&self.stop_words))
    }

    /// A lemma filter sharing this dictionary.
    pub fn lemma_filter(&self) -> LemmaFilter {
        LemmaFilter::with_dictionary(Arc::clone(&self.lemmas))
    }
}

impl Default for LinguisticResources {
    fn default() -> Self {
        Self::english()
    }
}

/// Builder for [`LinguisticResources`].
#[derive(Debug, Default)]
pub struct LinguisticResourcesBuilder {
    stop_words: Option<HashSet<String>>,
    lemmas: Option<LemmaDictionary>,
}

impl LinguisticResourcesBuilder {
    /// Use the given stop words (lowercased on the way in).
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = Some(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    /// Use the given lemma dictionary.
    pub fn lemma_dictionary(mut self, dictionary: LemmaDictionary) -> Self {
        self.lemmas = Some(dictionary);
        self
    }

    /// Freeze the resources.
    pub fn build(self) -> LinguisticResources {
        LinguisticResources {
            stop_words: self
                .stop_words
                .map(Arc::new)
                .unwrap_or_else(|| Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET)),
            lemmas: self
                .lemmas
                .map(Arc::new)
                .unwrap_or_else(LemmaDictionary::english),
        }
    }
}

fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() && !word.starts_with('#') {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_resources_are_shared() {
        let a = LinguisticResources::english();
        let b = LinguisticResources::english();
        assert!(Arc::ptr_eq(a.stop_words(), b.stop_words()));
        assert!(Arc::ptr_eq(a.lemma_dictionary(), b.lemma_dictionary()));
        assert_eq!(a.stop_words().len(), 179);
    }

    #[test]
    fn test_builder_overrides_only_what_is_set() {
        let resources = LinguisticResources::builder().stop_words(["Foo"]).build();
        assert_eq!(resources.stop_words().len(), 1);
        assert!(resources.stop_filter().is_stop_word("foo"));
        assert_eq!(resources.lemma_dictionary().lemmatize("cats"), "cat");
    }

    #[test]
    fn test_from_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let stop_path = dir.path().join("stop.txt");
        let lemma_path = dir.path().join("lemma.txt");
        writeln!(File::create(&stop_path).unwrap(), "# words\nalpha\n\nBeta").unwrap();
        writeln!(File::create(&lemma_path).unwrap(), "geese goose").unwrap();

        let resources = LinguisticResources::from_files(Some(&stop_path), Some(&lemma_path)).unwrap();
        assert_eq!(resources.stop_words().len(), 2);
        assert!(resources.stop_filter().is_stop_word("BETA"));
        assert_eq!(resources.lemma_dictionary().lemmatize("geese"), "goose");
        assert_eq!(resources.lemma_dictionary().lemmatize("cats"), "cats");
    }

    #[test]
    fn test_from_missing_file() {
        let result = LinguisticResources::from_files(Some(Path::new("/nonexistent/stop.txt")), None);
        assert!(result.is_err());
    }
}
