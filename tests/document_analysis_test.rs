//! End-to-end tests for document analysis through the public API.

use narrative::analysis::pipeline::PipelineConfig;
use narrative::analysis::resources::LinguisticResources;
use narrative::analytics::topic::TopicModelType;
use narrative::error::NarrativeError;
use narrative::prelude::*;

const REVIEW: &str = "The new library is excellent and the documentation is wonderful.\n\
    Installing the library took minutes. The examples in the documentation are helpful.\n\
    \n\
    Some error messages were confusing, but the library is still great.";

#[test]
fn test_full_report() -> Result<()> {
    let analyzer = DocumentAnalyzer::new(AnalysisConfig::default())?;
    let report = analyzer.analyze(REVIEW)?;

    assert_eq!(report.stats.line_count, 3);
    assert_eq!(report.stats.sentence_count, 4);
    assert_eq!(report.stats.word_count, REVIEW.split_whitespace().count());

    assert_eq!(report.sentiment.label, SentimentLabel::Positive);
    assert!(report.sentiment.polarity > 0.0 && report.sentiment.polarity <= 1.0);
    assert!((0.0..=1.0).contains(&report.sentiment.subjectivity));

    assert_eq!(report.topics.len(), 5);
    for (i, topic) in report.topics.iter().enumerate() {
        assert_eq!(topic.label, format!("Topic {}", i + 1));
        assert!(topic.terms.split(", ").count() <= 10);
    }

    assert_eq!(report.keywords[0].token, "library");
    assert_eq!(report.keywords[0].count, 3);
    assert!(report.keywords.len() <= 10);

    let summary_sentences = LexRankSummarizer::new().sentences(&report.summary).len();
    assert_eq!(summary_sentences, 3);
    Ok(())
}

#[test]
fn test_custom_config() -> Result<()> {
    let mut config = AnalysisConfig::default();
    config.pipeline = PipelineConfig {
        stem_flag: true,
        ..PipelineConfig::default()
    };
    config.topics.num_topics = 2;
    config.topics.model_type = TopicModelType::Nmf;
    config.topics.top_terms = 3;
    config.keywords.top_n = 2;
    config.summary.sentence_count = 1;

    let report = DocumentAnalyzer::new(config)?.analyze(REVIEW)?;
    assert_eq!(report.topics.len(), 2);
    assert!(report.topics.iter().all(|t| t.terms.split(", ").count() == 3));
    assert_eq!(report.keywords.len(), 2);
    assert_eq!(report.keywords[0].token, "librari");
    assert_eq!(LexRankSummarizer::new().sentences(&report.summary).len(), 1);
    Ok(())
}

#[test]
fn test_injected_resources() -> Result<()> {
    let resources = LinguisticResources::builder()
        .stop_words(["library", "documentation"])
        .build();
    let analyzer = DocumentAnalyzer::with_resources(AnalysisConfig::default(), resources);
    let report = analyzer.analyze(REVIEW)?;

    assert!(!report.processed_text.contains("library "));
    assert!(report.processed_text.contains("The "));
    Ok(())
}

#[test]
fn test_empty_input() {
    let analyzer = DocumentAnalyzer::new(AnalysisConfig::default()).unwrap();
    assert!(matches!(
        analyzer.analyze("\n \t"),
        Err(NarrativeError::Analysis(_))
    ));
}

#[test]
fn test_components_are_total_on_empty_text() {
    assert_eq!(TextPipeline::new(PipelineConfig::default()).process(""), "");
    assert_eq!(text_stats(""), TextStats::default());
    assert_eq!(SentimentAnalyzer::new().analyze("").label, SentimentLabel::Neutral);
    assert!(TopicExtractor::default().topics("").is_empty());
    assert!(KeywordRanker::new().top_keywords("", 10).is_empty());
    assert_eq!(LexRankSummarizer::new().summarize("", 3), "");
    assert_eq!(summary_text("", true), "");
}

#[test]
fn test_report_json_shape() -> Result<()> {
    let report = DocumentAnalyzer::new(AnalysisConfig::default())?.analyze(REVIEW)?;
    let json = serde_json::to_value(&report)?;

    for key in ["processed_text", "stats", "sentiment", "topics", "keywords", "summary"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["topics"][0]["label"], "Topic 1");
    assert_eq!(json["keywords"][0]["token"], "library");

    let parsed: AnalysisReport = serde_json::from_value(json)?;
    assert_eq!(parsed, report);
    Ok(())
}
