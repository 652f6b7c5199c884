//! Whole-document analysis.
//!
//! [`DocumentAnalyzer`] runs the text pipeline once and feeds its output to
//! the sentiment, topic and keyword analyzers. Statistics are measured on the
//! raw text, and the summary works from its own normalization of the raw
//! text.

use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::TextPipeline;
use crate::analysis::resources::LinguisticResources;
use crate::analytics::keywords::{KeywordFrequency, KeywordRanker};
use crate::analytics::sentiment::{SentimentAnalyzer, SentimentLexicon, SentimentResult};
use crate::analytics::stats::{TextStats, text_stats};
use crate::analytics::summarize::{LexRankSummarizer, summary_text_with};
use crate::analytics::topic::{Topic, TopicExtractor};
use crate::config::AnalysisConfig;
use crate::error::{NarrativeError, Result};

/// Everything computed for one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub processed_text: String,
    pub stats: TextStats,
    pub sentiment: SentimentResult,
    pub topics: Vec<Topic>,
    pub keywords: Vec<KeywordFrequency>,
    pub summary: String,
}

/// Runs every analyzer over a document.
#[derive(Clone, Debug)]
pub struct DocumentAnalyzer {
    config: AnalysisConfig,
    resources: LinguisticResources,
    pipeline: TextPipeline,
    sentiment: SentimentAnalyzer,
    topics: TopicExtractor,
    keywords: KeywordRanker,
    summarizer: LexRankSummarizer,
}

impl DocumentAnalyzer {
    /// Build an analyzer, loading any resource files the config names.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let resources = config.resources.load()?;
        let lexicon = config.resources.load_sentiment_lexicon()?;
        Ok(Self::with_resources(config, resources).with_sentiment_lexicon(lexicon))
    }

    /// Build an analyzer over already loaded resources.
    pub fn with_resources(config: AnalysisConfig, resources: LinguisticResources) -> Self {
        DocumentAnalyzer {
            pipeline: TextPipeline::with_resources(config.pipeline, &resources),
            sentiment: SentimentAnalyzer::new(),
            topics: TopicExtractor::from_config(&config.topics),
            keywords: KeywordRanker::new(),
            summarizer: LexRankSummarizer::new(),
            config,
            resources,
        }
    }

    /// Score sentiment with `lexicon` instead of the built-in one.
    pub fn with_sentiment_lexicon(mut self, lexicon: Arc<SentimentLexicon>) -> Self {
        self.sentiment = SentimentAnalyzer::with_lexicon(lexicon);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &TextPipeline {
        &self.pipeline
    }

    /// Run only the text pipeline.
    pub fn process(&self, text: &str) -> String {
        self.pipeline.process(text)
    }

    /// Analyze `text`.
    ///
    /// Fails only for input that is empty or all whitespace.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        if text.trim().is_empty() {
            return Err(NarrativeError::analysis("empty input"));
        }

        let processed_text = self.pipeline.process(text);
        let summary_input = summary_text_with(text, self.config.summary_lemmatize(), &self.resources);

        let report = AnalysisReport {
            stats: text_stats(text),
            sentiment: self.sentiment.analyze(&processed_text),
            topics: self.topics.topics(&processed_text),
            keywords: self
                .keywords
                .top_keywords(&processed_text, self.config.keywords.top_n),
            summary: self
                .summarizer
                .summarize(&summary_input, self.config.summary.sentence_count),
            processed_text,
        };

        info!(
            "analyzed {} words: {} topics, {} keywords, sentiment {}",
            report.stats.word_count,
            report.topics.len(),
            report.keywords.len(),
            report.sentiment.label
        );
        Ok(report)
    }
}
