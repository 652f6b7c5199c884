//! Property-based tests for the text pipeline and the total text operations.

use proptest::prelude::*;

use narrative::analysis::normalize::{clean_whitespace, strip_for_summary, strip_non_essential};
use narrative::analysis::pipeline::{PipelineConfig, TextPipeline};
use narrative::analysis::token::Token;
use narrative::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS_SET;
use narrative::analysis::token_filter::{Filter, StopFilter};
use narrative::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use narrative::analytics::keywords::KeywordRanker;
use narrative::analytics::stats::text_stats;
use narrative::analytics::summarize::LexRankSummarizer;

fn texts(tokens: Vec<Token>) -> Vec<String> {
    tokens.into_iter().map(|t| t.text).collect()
}

/// Words mixing stop words, content words, punctuation and odd whitespace.
fn document() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("the".to_string()),
        Just("The".to_string()),
        Just("AND".to_string()),
        Just("of".to_string()),
        Just("garden".to_string()),
        Just("Cats".to_string()),
        Just("running.".to_string()),
        Just("hello,".to_string()),
        "[a-zA-Z]{1,8}",
        "[^\\s]{1,4}",
    ];
    let separator = prop_oneof![
        Just(" ".to_string()),
        Just("  ".to_string()),
        Just("\n".to_string()),
        Just("\t".to_string()),
        Just(". ".to_string()),
    ];
    prop::collection::vec((word, separator), 0..40)
        .prop_map(|parts| parts.into_iter().map(|(w, s)| w + &s).collect())
}

proptest! {
    #[test]
    fn clean_whitespace_is_idempotent(text in "\\PC*") {
        let once = clean_whitespace(&text);
        prop_assert_eq!(clean_whitespace(&once), once);
    }

    #[test]
    fn normalization_policies_are_idempotent(text in "\\PC*") {
        let general = strip_non_essential(&text);
        prop_assert_eq!(strip_non_essential(&general), general);
        let summary = strip_for_summary(&text);
        prop_assert_eq!(strip_for_summary(&summary), summary);
    }

    #[test]
    fn tokens_have_no_whitespace_and_round_trip(text in "\\PC*") {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = texts(tokenizer.tokenize(&text).collect());
        prop_assert!(tokens.iter().all(|t| !t.is_empty() && !t.chars().any(char::is_whitespace)));

        let rejoined = tokens.join(" ");
        let again = texts(tokenizer.tokenize(&rejoined).collect());
        prop_assert_eq!(again, tokens);
    }

    #[test]
    fn stop_filter_is_idempotent(text in document()) {
        let tokenizer = WhitespaceTokenizer::new();
        let filter = StopFilter::new();
        let once: Vec<Token> = filter.filter(tokenizer.tokenize(&text)).collect();
        let twice = texts(filter.filter(Box::new(once.clone().into_iter())).collect());
        prop_assert_eq!(twice, texts(once));
    }

    #[test]
    fn disabled_pipeline_only_normalizes_whitespace(text in document()) {
        let pipeline = TextPipeline::new(PipelineConfig::disabled());
        let expected = text.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(pipeline.process(&text), expected.clone());
        prop_assert_eq!(pipeline.process(&expected), expected);
    }

    #[test]
    fn stop_words_never_survive(text in document()) {
        let pipeline = TextPipeline::new(PipelineConfig::default());
        let processed = pipeline.process(&text);
        for token in processed.split_whitespace() {
            prop_assert!(!DEFAULT_ENGLISH_STOP_WORDS_SET.contains(&token.to_lowercase()));
        }
    }

    #[test]
    fn keyword_counts_are_bounded(text in document(), top_n in 0usize..15) {
        let ranked = KeywordRanker::new().top_keywords(&text, top_n);
        prop_assert!(ranked.len() <= top_n);
        prop_assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
        let words = text.split_whitespace().count();
        prop_assert!(ranked.iter().map(|k| k.count).sum::<usize>() <= words);
    }

    #[test]
    fn stats_are_consistent(text in document()) {
        let stats = text_stats(&text);
        prop_assert_eq!(stats.word_count, text.split_whitespace().count());
        prop_assert!(stats.line_count <= text.lines().count());
        prop_assert!(stats.char_count <= text.chars().count());
    }

    #[test]
    fn short_documents_are_returned_whole(text in document(), extra in 0usize..3) {
        let summarizer = LexRankSummarizer::new();
        let sentences = summarizer.sentences(&text);
        let summary = summarizer.summarize(&text, sentences.len() + extra);
        prop_assert_eq!(summary, sentences.join(" "));
    }
}
