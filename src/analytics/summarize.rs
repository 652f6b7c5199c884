//! Extractive summarization with LexRank.
//!
//! Sentences are split on Unicode sentence boundaries and compared with
//! tf-idf cosine similarity. Pairs above [`DEFAULT_THRESHOLD`] become edges
//! of an unweighted graph whose stationary distribution, found by power
//! iteration, rates each sentence. The best-rated sentences are returned in
//! their original document order.
//!
//! # Examples
//!
//! ```
//! use narrative::analytics::summarize::LexRankSummarizer;
//!
//! let summarizer = LexRankSummarizer::new();
//! assert_eq!(summarizer.summarize("Only one sentence here.", 3), "Only one sentence here.");
//! ```

use std::collections::HashMap;

use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::normalize::strip_for_summary;
use crate::analysis::resources::LinguisticResources;
use crate::analysis::token::join_tokens;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};

/// Similarity above which two sentences are connected.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Power iteration stops once successive vectors differ by less than this.
pub const DEFAULT_EPSILON: f64 = 0.1;

const MAX_POWER_ITERATIONS: usize = 1000;

/// Prepare raw text for summarization.
///
/// Applies the summary normalization policy. With `lemmatize` set the result
/// is also word-tokenized (punctuation kept as its own token), lemmatized and
/// re-joined with single spaces.
pub fn summary_text(raw: &str, lemmatize: bool) -> String {
    summary_text_with(raw, lemmatize, &LinguisticResources::english())
}

/// [`summary_text`] over custom resources.
pub fn summary_text_with(raw: &str, lemmatize: bool, resources: &LinguisticResources) -> String {
    let stripped = strip_for_summary(raw);
    if !lemmatize {
        return stripped;
    }
    let tokens = UnicodeWordTokenizer::new().tokenize(&stripped);
    join_tokens(resources.lemma_filter().filter(tokens))
}

/// LexRank sentence ranking.
#[derive(Clone, Debug)]
pub struct LexRankSummarizer {
    threshold: f64,
    epsilon: f64,
}

impl LexRankSummarizer {
    pub fn new() -> Self {
        LexRankSummarizer {
            threshold: DEFAULT_THRESHOLD,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Split `text` into trimmed, non-empty sentences.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Rate every sentence; ratings sum to at most one.
    pub fn rate(&self, sentences: &[&str]) -> Vec<f64> {
        let n = sentences.len();
        if n == 0 {
            return Vec::new();
        }

        let words: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| s.unicode_words().map(str::to_lowercase).collect())
            .collect();
        let tf: Vec<HashMap<&str, f64>> = words.iter().map(|w| term_frequencies(w)).collect();
        let idf = inverse_document_frequencies(&tf, n);

        let mut matrix = vec![vec![0.0; n]; n];
        let mut degrees = vec![0usize; n];
        for i in 0..n {
            for j in 0..n {
                if cosine_similarity(&tf[i], &tf[j], &idf) > self.threshold {
                    matrix[i][j] = 1.0;
                    degrees[i] += 1;
                }
            }
        }
        for (row, degree) in matrix.iter_mut().zip(&degrees) {
            let degree = (*degree).max(1) as f64;
            for cell in row.iter_mut() {
                *cell /= degree;
            }
        }

        self.power_method(&matrix)
    }

    fn power_method(&self, matrix: &[Vec<f64>]) -> Vec<f64> {
        let n = matrix.len();
        let mut p = vec![1.0 / n as f64; n];
        for iteration in 0..MAX_POWER_ITERATIONS {
            let mut next = vec![0.0; n];
            for (i, row) in matrix.iter().enumerate() {
                for (j, &m) in row.iter().enumerate() {
                    next[j] += m * p[i];
                }
            }
            let delta = next
                .iter()
                .zip(&p)
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
                .sqrt();
            p = next;
            if delta < self.epsilon {
                debug!("lexrank converged after {} iterations", iteration + 1);
                break;
            }
        }
        p
    }

    /// Pick the `sentence_count` best sentences and join them with spaces,
    /// in document order.
    ///
    /// Text with no more sentences than requested is returned whole.
    pub fn summarize(&self, text: &str, sentence_count: usize) -> String {
        let sentences = self.sentences(text);
        if sentences.len() <= sentence_count {
            return sentences.join(" ");
        }

        let ratings = self.rate(&sentences);
        let mut order: Vec<usize> = (0..sentences.len()).collect();
        order.sort_by(|&a, &b| ratings[b].total_cmp(&ratings[a]));
        order.truncate(sentence_count);
        order.sort_unstable();

        debug!(
            "selected sentences {:?} of {}",
            order,
            sentences.len()
        );
        order
            .into_iter()
            .map(|i| sentences[i])
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for LexRankSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

fn term_frequencies(words: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for word in words {
        *counts.entry(word.as_str()).or_insert(0.0) += 1.0;
    }
    let max = counts.values().copied().fold(0.0, f64::max);
    if max > 0.0 {
        for value in counts.values_mut() {
            *value /= max;
        }
    }
    counts
}

fn inverse_document_frequencies<'a>(
    tf: &[HashMap<&'a str, f64>],
    n: usize,
) -> HashMap<&'a str, f64> {
    let mut document_counts: HashMap<&str, usize> = HashMap::new();
    for sentence in tf {
        for term in sentence.keys() {
            *document_counts.entry(*term).or_insert(0) += 1;
        }
    }
    document_counts
        .into_iter()
        .map(|(term, count)| (term, (n as f64 / (1 + count) as f64).ln()))
        .collect()
}

fn cosine_similarity(
    a: &HashMap<&str, f64>,
    b: &HashMap<&str, f64>,
    idf: &HashMap<&str, f64>,
) -> f64 {
    let weight = |term: &str| idf.get(term).copied().unwrap_or(0.0);

    let numerator: f64 = a
        .iter()
        .filter_map(|(term, tf_a)| {
            b.get(term)
                .map(|tf_b| tf_a * tf_b * weight(*term) * weight(*term))
        })
        .sum();
    let norm = |v: &HashMap<&str, f64>| {
        v.iter()
            .map(|(term, tf)| (tf * weight(*term)).powi(2))
            .sum::<f64>()
            .sqrt()
    };
    let denominator = norm(a) * norm(b);

    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
