//! Analysis configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```
//! use narrative::analytics::topic::TopicModelType;
//! use narrative::config::AnalysisConfig;
//!
//! let config: AnalysisConfig =
//!     serde_json::from_str(r#"{ "topics": { "model_type": "nmf" } }"#).unwrap();
//! assert_eq!(config.topics.model_type, TopicModelType::Nmf);
//! assert_eq!(config.topics.num_topics, 5);
//! assert!(config.pipeline.stopword_flag);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::PipelineConfig;
use crate::analysis::resources::LinguisticResources;
use crate::analytics::sentiment::SentimentLexicon;
use crate::analytics::topic::TopicModelType;
use crate::error::{NarrativeError, Result};

/// Topic extraction settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    pub num_topics: usize,
    pub model_type: TopicModelType,
    /// Terms reported per topic.
    pub top_terms: usize,
    /// Model iterations; the model's own default when unset.
    pub max_iter: Option<usize>,
    pub seed: u64,
}

impl Default for TopicConfig {
    fn default() -> Self {
        TopicConfig {
            num_topics: 5,
            model_type: TopicModelType::Lda,
            top_terms: 10,
            max_iter: None,
            seed: 0,
        }
    }
}

/// Keyword ranking settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub top_n: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        KeywordConfig { top_n: 10 }
    }
}

/// Summarization settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub sentence_count: usize,
    /// Lemmatize the summary input. Follows `pipeline.lemma_flag` when unset.
    pub lemmatize: Option<bool>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            sentence_count: 3,
            lemmatize: None,
        }
    }
}

/// Optional replacements for the built-in linguistic resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub stopwords_file: Option<PathBuf>,
    pub lemma_file: Option<PathBuf>,
    /// Sentiment lexicon in the [`SentimentLexicon::from_reader`] format.
    pub sentiment_lexicon_file: Option<PathBuf>,
}

impl ResourceConfig {
    /// Load the configured resources, using English for anything unset.
    pub fn load(&self) -> Result<LinguisticResources> {
        if self.stopwords_file.is_none() && self.lemma_file.is_none() {
            return Ok(LinguisticResources::english());
        }
        LinguisticResources::from_files(self.stopwords_file.as_deref(), self.lemma_file.as_deref())
    }

    /// Load the configured sentiment lexicon, or the built-in English one.
    pub fn load_sentiment_lexicon(&self) -> Result<Arc<SentimentLexicon>> {
        match &self.sentiment_lexicon_file {
            Some(path) => Ok(Arc::new(SentimentLexicon::from_file(path)?)),
            None => Ok(SentimentLexicon::english()),
        }
    }
}

/// Configuration for a full document analysis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub pipeline: PipelineConfig,
    pub topics: TopicConfig,
    pub keywords: KeywordConfig,
    pub summary: SummaryConfig,
    pub resources: ResourceConfig,
}

impl AnalysisConfig {
    /// Read a JSON config file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.topics.num_topics == 0 {
            return Err(NarrativeError::config("topics.num_topics must be at least 1"));
        }
        if self.topics.top_terms == 0 {
            return Err(NarrativeError::config("topics.top_terms must be at least 1"));
        }
        Ok(())
    }

    /// Whether the summary input is lemmatized.
    pub fn summary_lemmatize(&self) -> bool {
        self.summary.lemmatize.unwrap_or(self.pipeline.lemma_flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.pipeline, PipelineConfig::default());
        assert_eq!(config.topics.num_topics, 5);
        assert_eq!(config.topics.top_terms, 10);
        assert_eq!(config.keywords.top_n, 10);
        assert_eq!(config.summary.sentence_count, 3);
        assert!(!config.summary_lemmatize());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_summary_lemmatize_follows_pipeline() {
        let mut config = AnalysisConfig::default();
        config.pipeline.lemma_flag = true;
        assert!(config.summary_lemmatize());
        config.summary.lemmatize = Some(false);
        assert!(!config.summary_lemmatize());
    }

    #[test]
    fn test_validate_rejects_zero_topics() {
        let mut config = AnalysisConfig::default();
        config.topics.num_topics = 0;
        assert!(matches!(config.validate(), Err(NarrativeError::Config(_))));

        let mut config = AnalysisConfig::default();
        config.topics.top_terms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "pipeline": {{ "stem_flag": true }}, "keywords": {{ "top_n": 3 }} }}"#
        )
        .unwrap();

        let config = AnalysisConfig::from_file(file.path()).unwrap();
        assert!(config.pipeline.stem_flag);
        assert!(config.pipeline.remove_space);
        assert_eq!(config.keywords.top_n, 3);
        assert_eq!(config.topics, TopicConfig::default());
    }

    #[test]
    fn test_from_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            AnalysisConfig::from_file(file.path()),
            Err(NarrativeError::Json(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "topics": {{ "num_topics": 0 }} }}"#).unwrap();
        assert!(AnalysisConfig::from_file(file.path()).is_err());

        assert!(matches!(
            AnalysisConfig::from_file("/nonexistent/config.json"),
            Err(NarrativeError::Io(_))
        ));
    }

    #[test]
    fn test_sentiment_lexicon_file() {
        let mut lexicon = tempfile::NamedTempFile::new().unwrap();
        writeln!(lexicon, "zippy 0.7 0.9").unwrap();

        let resources = ResourceConfig {
            sentiment_lexicon_file: Some(lexicon.path().to_path_buf()),
            ..ResourceConfig::default()
        };
        assert_eq!(resources.load_sentiment_lexicon().unwrap().len(), 1);
        assert!(!ResourceConfig::default().load_sentiment_lexicon().unwrap().is_empty());

        let missing = ResourceConfig {
            sentiment_lexicon_file: Some("/nonexistent/lexicon.txt".into()),
            ..ResourceConfig::default()
        };
        assert!(missing.load_sentiment_lexicon().is_err());
    }

    #[test]
    fn test_round_trip_json() {
        let mut config = AnalysisConfig::default();
        config.topics.model_type = TopicModelType::Nmf;
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
