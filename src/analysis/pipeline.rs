//! The configurable text-processing pipeline.
//!
//! [`TextPipeline`] applies the enabled stages of a [`PipelineConfig`] in a
//! fixed order:
//!
//! 1. Char filters: whitespace cleanup, then special-character removal
//! 2. Tokenizer: whitespace split (always runs)
//! 3. Token filters: stop word removal, then stemming, then lemmatization
//!
//! Stages compose sequentially. With both `stem_flag` and `lemma_flag` set,
//! the lemmatizer runs on the stemmer's output.
//!
//! # Examples
//!
//! ```
//! use narrative::analysis::pipeline::{PipelineConfig, TextPipeline};
//!
//! let pipeline = TextPipeline::new(PipelineConfig::default());
//! assert_eq!(pipeline.process("The  cats, and the dogs!"), "cats dogs");
//! ```

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, WhitespaceCharFilter};
use crate::analysis::normalize::NormalizationPolicy;
use crate::analysis::resources::LinguisticResources;
use crate::analysis::token::{Token, join_tokens};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Independent switches for the optional pipeline stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Collapse whitespace runs and trim.
    pub remove_space: bool,
    /// Remove everything but ASCII letters, digits, dots and whitespace.
    pub remove_special: bool,
    /// Drop stop words.
    pub stopword_flag: bool,
    /// Apply the Porter stemmer.
    pub stem_flag: bool,
    /// Apply the lemmatizer.
    pub lemma_flag: bool,
}

impl PipelineConfig {
    /// A configuration with every stage disabled.
    ///
    /// The pipeline then only tokenizes and re-joins its input.
    pub fn disabled() -> Self {
        PipelineConfig {
            remove_space: false,
            remove_special: false,
            stopword_flag: false,
            stem_flag: false,
            lemma_flag: false,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            remove_space: true,
            remove_special: true,
            stopword_flag: true,
            stem_flag: false,
            lemma_flag: false,
        }
    }
}

/// A pipeline built from a [`PipelineConfig`] and a set of resources.
#[derive(Clone)]
pub struct TextPipeline {
    config: PipelineConfig,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl TextPipeline {
    /// Build a pipeline over the built-in English resources.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_resources(config, &LinguisticResources::english())
    }

    /// Build a pipeline over custom resources.
    pub fn with_resources(config: PipelineConfig, resources: &LinguisticResources) -> Self {
        let mut char_filters: Vec<Arc<dyn CharFilter>> = Vec::new();
        if config.remove_space {
            char_filters.push(Arc::new(WhitespaceCharFilter::new()));
        }
        if config.remove_special {
            char_filters.push(Arc::new(
                NormalizationPolicy::General.char_filter().clone(),
            ));
        }

        let mut filters: Vec<Arc<dyn Filter>> = Vec::new();
        if config.stopword_flag {
            filters.push(Arc::new(resources.stop_filter()));
        }
        if config.stem_flag {
            filters.push(Arc::new(StemFilter::new()));
        }
        if config.lemma_flag {
            filters.push(Arc::new(resources.lemma_filter()));
        }

        TextPipeline {
            config,
            char_filters,
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            filters,
        }
    }

    /// The configuration this pipeline was built from.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Names of the enabled stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.char_filters
            .iter()
            .map(|f| f.name())
            .chain(std::iter::once(self.tokenizer.name()))
            .chain(self.filters.iter().map(|f| f.name()))
            .collect()
    }

    /// Run every enabled stage and return the final tokens.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text);
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens.collect()
    }

    /// Run the pipeline and join the resulting tokens with single spaces.
    pub fn process(&self, text: &str) -> String {
        debug!("processing {} bytes through {:?}", text.len(), self.stage_names());
        join_tokens(self.tokens(text))
    }
}

impl std::fmt::Debug for TextPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPipeline")
            .field("config", &self.config)
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Run `text` through a pipeline built from `config` over English resources.
pub fn process(text: &str, config: PipelineConfig) -> String {
    TextPipeline::new(config).process(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::lemma::LemmaDictionary;

    #[test]
    fn test_default_pipeline() {
        let pipeline = TextPipeline::new(PipelineConfig::default());
        assert_eq!(
            pipeline.process("  This is a TEST,\n of the   pipeline!  "),
            "TEST pipeline"
        );
    }

    #[test]
    fn test_stage_order() {
        let config = PipelineConfig {
            stem_flag: true,
            lemma_flag: true,
            ..PipelineConfig::default()
        };
        let pipeline = TextPipeline::new(config);
        assert_eq!(
            pipeline.stage_names(),
            vec![
                "collapse_whitespace",
                "pattern_remove",
                "whitespace",
                "stop",
                "stem",
                "lemma"
            ]
        );
    }

    #[test]
    fn test_disabled_pipeline_only_retokenizes() {
        let pipeline = TextPipeline::new(PipelineConfig::disabled());
        assert_eq!(pipeline.process("Hello, the world!"), "Hello, the world!");
        assert_eq!(pipeline.process("a \n b"), "a b");
    }

    #[test]
    fn test_special_removal_without_whitespace_cleanup() {
        let config = PipelineConfig {
            remove_space: false,
            stopword_flag: false,
            ..PipelineConfig::default()
        };
        assert_eq!(process("a - b", config), "a b");
    }

    #[test]
    fn test_stem_then_lemmatize_composes() {
        let resources = LinguisticResources::builder()
            .lemma_dictionary(LemmaDictionary::from_entries(
                Vec::<String>::new(),
                [("fli", "fly")],
            ))
            .build();
        let config = PipelineConfig {
            stopword_flag: false,
            stem_flag: true,
            lemma_flag: true,
            ..PipelineConfig::default()
        };
        let pipeline = TextPipeline::with_resources(config, &resources);
        assert_eq!(pipeline.process("flies"), "fly");
    }

    #[test]
    fn test_stemming_very_long_token() {
        let config = PipelineConfig {
            stem_flag: true,
            ..PipelineConfig::default()
        };
        let pipeline = TextPipeline::new(config);
        let text = format!("report {}ness", "y".repeat(150_000));
        let processed = pipeline.process(&text);
        assert_eq!(processed.len(), "report ".len() + 150_000);
        assert!(processed.starts_with("report y"));
    }

    #[test]
    fn test_everything_filtered_out() {
        let pipeline = TextPipeline::new(PipelineConfig::default());
        assert_eq!(pipeline.process("the and of"), "");
        assert_eq!(pipeline.process(""), "");
    }

    #[test]
    fn test_tokens_keep_order() {
        let config = PipelineConfig {
            stopword_flag: false,
            ..PipelineConfig::default()
        };
        let pipeline = TextPipeline::new(config);
        let tokens = pipeline.tokens("c b a");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "b", "a"]);
    }
}
