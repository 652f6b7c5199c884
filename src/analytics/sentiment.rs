//! Lexicon-based sentiment scoring.
//!
//! Each word found in the lexicon contributes a `(polarity, subjectivity)`
//! assessment. An intensifier directly before a scored word multiplies both
//! values; a negation directly before it (possibly with intensifiers in
//! between) multiplies the polarity by `-0.5`. The result is the mean of all
//! assessments, clamped to `[-1, 1]` for polarity and `[0, 1]` for
//! subjectivity. Text without any lexicon word scores `0.0` and is
//! [`SentimentLabel::Neutral`].
//!
//! The built-in English lexicon is small: about 150 common adjectives plus a
//! handful of intensifiers and negations. Domain text usually scores better
//! with a lexicon loaded through [`SentimentLexicon::from_reader`].
//!
//! # Examples
//!
//! ```
//! use narrative::analytics::sentiment::{SentimentAnalyzer, SentimentLabel};
//!
//! let analyzer = SentimentAnalyzer::new();
//! assert_eq!(analyzer.analyze("a great product").label, SentimentLabel::Positive);
//! assert_eq!(analyzer.analyze("not great").label, SentimentLabel::Negative);
//! assert_eq!(analyzer.analyze("a product").label, SentimentLabel::Neutral);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::debug;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{NarrativeError, Result};

/// `(word, polarity, subjectivity)` entries of the built-in English lexicon.
const ENGLISH_LEXICON: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("calm", 0.3, 0.75),
    ("clean", 0.37, 0.69),
    ("clear", 0.1, 0.38),
    ("comfortable", 0.4, 0.7),
    ("cool", 0.35, 0.65),
    ("correct", 0.0, 0.0),
    ("delightful", 1.0, 1.0),
    ("easy", 0.43, 0.83),
    ("effective", 0.6, 0.8),
    ("efficient", 0.0, 0.0),
    ("enjoyable", 0.5, 0.8),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.3, 0.8),
    ("fair", 0.7, 0.9),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("fine", 0.42, 0.5),
    ("fortunate", 0.4, 0.8),
    ("free", 0.4, 0.8),
    ("fresh", 0.3, 0.5),
    ("friendly", 0.38, 0.5),
    ("fun", 0.3, 0.2),
    ("generous", 0.5, 0.75),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("healthy", 0.5, 0.5),
    ("helpful", 0.5, 0.5),
    ("honest", 0.6, 0.9),
    ("ideal", 0.9, 0.9),
    ("important", 0.4, 1.0),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("kind", 0.6, 0.9),
    ("like", 0.0, 0.0),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("lucky", 0.33, 1.0),
    ("magnificent", 1.0, 1.0),
    ("marvelous", 0.8, 1.0),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("pleased", 0.5, 1.0),
    ("positive", 0.23, 0.55),
    ("powerful", 0.3, 1.0),
    ("pretty", 0.25, 1.0),
    ("proud", 0.8, 1.0),
    ("quick", 0.33, 0.5),
    ("reliable", 0.4, 0.6),
    ("remarkable", 0.75, 0.75),
    ("rich", 0.38, 0.75),
    ("right", 0.29, 0.54),
    ("safe", 0.5, 0.5),
    ("satisfied", 0.5, 1.0),
    ("simple", 0.0, 0.36),
    ("smart", 0.21, 0.64),
    ("smooth", 0.4, 0.69),
    ("strong", 0.43, 0.73),
    ("success", 0.3, 0.0),
    ("successful", 0.75, 0.95),
    ("super", 0.33, 0.67),
    ("superb", 1.0, 1.0),
    ("supportive", 0.5, 0.8),
    ("terrific", 1.0, 1.0),
    ("thankful", 0.5, 0.8),
    ("useful", 0.3, 0.0),
    ("valuable", 0.33, 0.9),
    ("warm", 0.6, 0.6),
    ("win", 0.8, 0.4),
    ("wise", 0.7, 0.9),
    ("wonderful", 1.0, 1.0),
    ("worthy", 0.3, 0.3),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("anxious", -0.25, 0.75),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("careless", -0.5, 0.6),
    ("cheap", 0.4, 0.7),
    ("confusing", -0.3, 0.7),
    ("cruel", -1.0, 1.0),
    ("damaged", -0.4, 0.4),
    ("dangerous", -0.6, 0.9),
    ("dark", -0.15, 0.4),
    ("dead", -0.2, 0.4),
    ("difficult", -0.5, 1.0),
    ("dirty", -0.6, 0.8),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dull", -0.31, 0.67),
    ("evil", -1.0, 1.0),
    ("expensive", -0.5, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("fake", -0.5, 1.0),
    ("false", -0.4, 0.6),
    ("fear", -0.4, 0.6),
    ("frustrating", -0.4, 0.7),
    ("hard", -0.29, 0.54),
    ("harmful", -0.5, 0.8),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("hostile", -0.6, 0.8),
    ("hurt", -0.4, 0.6),
    ("ill", -0.5, 0.8),
    ("impossible", -0.67, 1.0),
    ("inferior", -0.5, 0.5),
    ("lazy", -0.25, 1.0),
    ("mediocre", -0.5, 0.5),
    ("messy", -0.4, 0.6),
    ("miserable", -1.0, 1.0),
    ("negative", -0.3, 0.4),
    ("painful", -0.7, 0.9),
    ("pathetic", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("problem", -0.2, 0.3),
    ("rude", -0.3, 0.6),
    ("sad", -0.5, 1.0),
    ("scary", -0.5, 1.0),
    ("severe", -0.3, 0.5),
    ("sick", -0.71, 0.86),
    ("slow", -0.3, 0.39),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unfair", -0.5, 0.9),
    ("unhappy", -0.6, 0.9),
    ("upset", -0.4, 0.8),
    ("useless", -0.5, 0.2),
    ("weak", -0.38, 0.63),
    ("wrong", -0.5, 0.9),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("worthless", -0.8, 0.9),
];

/// Words that multiply the assessment of the next scored word.
const ENGLISH_INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("completely", 1.4),
    ("deeply", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("most", 1.2),
    ("particularly", 1.2),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.2),
    ("totally", 1.4),
    ("truly", 1.3),
    ("very", 1.3),
];

/// Words that flip and dampen the next scored word.
const ENGLISH_NEGATIONS: &[&str] = &["not", "never", "no", "none", "nothing", "nobody", "neither", "nor"];

static ENGLISH_SENTIMENT_LEXICON: LazyLock<Arc<SentimentLexicon>> = LazyLock::new(|| {
    Arc::new(SentimentLexicon::from_entries(
        ENGLISH_LEXICON.iter().map(|&(w, p, s)| (w, p, s)),
        ENGLISH_INTENSIFIERS.iter().copied(),
        ENGLISH_NEGATIONS.iter().copied(),
    ))
});

/// Three-way sentiment classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a polarity: above zero is positive, below zero negative,
    /// exactly zero neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        write!(f, "{label}")
    }
}

/// Outcome of a sentiment pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Polarity in `[-1, 1]`.
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`.
    pub subjectivity: f64,
    /// Label derived from `polarity`.
    pub label: SentimentLabel,
}

impl SentimentResult {
    /// Build a result, deriving the label from the polarity.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        SentimentResult {
            polarity,
            subjectivity,
            label: SentimentLabel::from_polarity(polarity),
        }
    }
}

/// Scored words, intensifiers and negations.
#[derive(Clone, Debug, Default)]
pub struct SentimentLexicon {
    scores: HashMap<String, (f64, f64)>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl SentimentLexicon {
    /// The built-in English lexicon, initialized once and shared.
    pub fn english() -> Arc<SentimentLexicon> {
        Arc::clone(&ENGLISH_SENTIMENT_LEXICON)
    }

    /// Build a lexicon from `(word, polarity, subjectivity)` entries,
    /// `(word, multiplier)` intensifiers and negation words.
    pub fn from_entries<'a, E, I, N>(entries: E, intensifiers: I, negations: N) -> Self
    where
        E: IntoIterator<Item = (&'a str, f64, f64)>,
        I: IntoIterator<Item = (&'a str, f64)>,
        N: IntoIterator<Item = &'a str>,
    {
        SentimentLexicon {
            scores: entries
                .into_iter()
                .map(|(w, p, s)| (w.to_lowercase(), (p, s)))
                .collect(),
            intensifiers: intensifiers
                .into_iter()
                .map(|(w, m)| (w.to_lowercase(), m))
                .collect(),
            negations: negations.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Load a lexicon from a whitespace-separated text source.
    ///
    /// Empty lines and lines starting with `#` are skipped. The field count
    /// decides what a line defines:
    ///
    /// ```text
    /// # word polarity subjectivity
    /// superb 0.9 1.0
    /// # word multiplier
    /// hugely 1.4
    /// # negation
    /// hardly
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lexicon = SentimentLexicon::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let number = |field: &str| {
                field.parse::<f64>().map_err(|_| {
                    NarrativeError::config(format!(
                        "sentiment lexicon line {}: invalid number {field:?}",
                        line_num + 1
                    ))
                })
            };
            match fields.as_slice() {
                [word] => {
                    lexicon.negations.insert(word.to_lowercase());
                }
                [word, multiplier] => {
                    lexicon
                        .intensifiers
                        .insert(word.to_lowercase(), number(*multiplier)?);
                }
                [word, polarity, subjectivity] => {
                    let assessment = (number(*polarity)?, number(*subjectivity)?);
                    lexicon.scores.insert(word.to_lowercase(), assessment);
                }
                _ => {
                    return Err(NarrativeError::config(format!(
                        "sentiment lexicon line {} has {} fields, expected 1 to 3",
                        line_num + 1,
                        fields.len()
                    )));
                }
            }
        }

        Ok(lexicon)
    }

    /// Load a lexicon file in the [`from_reader`](Self::from_reader) format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading sentiment lexicon from {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Number of scored words.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the lexicon scores no words.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }
}

/// Lexicon-based polarity and subjectivity scorer.
#[derive(Clone, Debug)]
pub struct SentimentAnalyzer {
    lexicon: Arc<SentimentLexicon>,
}

impl SentimentAnalyzer {
    /// Create an analyzer over the built-in English lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(SentimentLexicon::english())
    }

    /// Create an analyzer over a custom lexicon.
    pub fn with_lexicon(lexicon: Arc<SentimentLexicon>) -> Self {
        SentimentAnalyzer { lexicon }
    }

    /// Score `text`.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut modifier: Option<f64> = None;
        let mut negated = false;

        for word in text.unicode_words() {
            let word = word.to_lowercase();

            if self.lexicon.is_negation(&word) {
                negated = true;
                continue;
            }
            if let Some(&multiplier) = self.lexicon.intensifiers.get(&word) {
                modifier = Some(modifier.unwrap_or(1.0) * multiplier);
                continue;
            }
            if let Some(&(polarity, subjectivity)) = self.lexicon.scores.get(&word) {
                let multiplier = modifier.unwrap_or(1.0);
                let mut polarity = polarity * multiplier;
                if negated {
                    polarity *= -0.5;
                }
                assessments.push((
                    polarity.clamp(-1.0, 1.0),
                    (subjectivity * multiplier).clamp(0.0, 1.0),
                ));
            }
            modifier = None;
            negated = false;
        }

        if assessments.is_empty() {
            return SentimentResult::new(0.0, 0.0);
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;
        debug!(
            "sentiment over {} assessments: polarity={polarity:.3} subjectivity={subjectivity:.3}",
            assessments.len()
        );

        SentimentResult::new(polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
