//! # narrative
//!
//! Text analytics for a single document.
//!
//! ## Features
//!
//! - Configurable cleanup pipeline: whitespace and special-character removal,
//!   stop words, Porter stemming, dictionary lemmatization
//! - Raw text statistics
//! - Lexicon-based sentiment with polarity, subjectivity and a label
//! - Topic extraction with LDA or NMF
//! - Keyword frequency ranking
//! - Extractive LexRank summaries
//! - Plain text and CSV extraction
//!
//! ## Example
//!
//! ```
//! use narrative::config::AnalysisConfig;
//! use narrative::report::DocumentAnalyzer;
//!
//! let analyzer = DocumentAnalyzer::new(AnalysisConfig::default()).unwrap();
//! let report = analyzer.analyze("Rust is a great language. The compiler is helpful.").unwrap();
//! assert_eq!(report.stats.sentence_count, 2);
//! ```

pub mod analysis;
pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod report;

pub mod prelude {
    pub use crate::analysis::pipeline::{PipelineConfig, TextPipeline};
    pub use crate::analysis::resources::LinguisticResources;
    pub use crate::analytics::{
        KeywordFrequency, KeywordRanker, LexRankSummarizer, SentimentAnalyzer, SentimentLabel,
        SentimentResult, TextStats, Topic, TopicExtractor, TopicModelType, summary_text,
        text_stats,
    };
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{NarrativeError, Result};
    pub use crate::report::{AnalysisReport, DocumentAnalyzer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
