//! Single-pass analyzers over raw or processed text.
//!
//! Every analyzer here is independent of the others: none shares mutable
//! state, and each can be run on its own.

pub mod keywords;
pub mod sentiment;
pub mod stats;
pub mod summarize;
pub mod topic;

pub use keywords::{KeywordFrequency, KeywordRanker};
pub use sentiment::{SentimentAnalyzer, SentimentLabel, SentimentResult};
pub use stats::{TextStats, text_stats};
pub use summarize::{LexRankSummarizer, summary_text};
pub use topic::{Topic, TopicExtractor, TopicModelType};
