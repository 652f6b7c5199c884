//! Topic extraction over a bag-of-words vocabulary.
//!
//! The text is vectorized with [`CountVectorizer`], a [`TopicModel`] is
//! fitted with the requested number of components, and the highest-weighted
//! vocabulary terms of each component are reported as a [`Topic`].
//!
//! A single document is a degenerate corpus for these models: topics tend to
//! repeat the document's most frequent terms. Inputs whose vocabulary is
//! empty after stop word removal produce no topics at all.
//!
//! # Examples
//!
//! ```
//! use narrative::analytics::topic::{TopicExtractor, TopicModelType};
//!
//! let extractor = TopicExtractor::new(2, TopicModelType::Nmf);
//! let topics = extractor.topics("rust compiler rust borrow checker rust");
//! assert_eq!(topics.len(), 2);
//! assert_eq!(topics[0].label, "Topic 1");
//! ```

pub mod lda;
pub mod nmf;
pub mod vectorizer;

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::TopicConfig;
use crate::error::NarrativeError;

pub use lda::LatentDirichletAllocation;
pub use nmf::NonNegativeMatrixFactorization;
pub use vectorizer::{CountVectorizer, DocumentTermMatrix};

/// A model that decomposes a document-term matrix into topic-term weights.
pub trait TopicModel: Send + Sync {
    /// Fit the model and return one row of term weights per component.
    fn fit(&self, matrix: &DocumentTermMatrix) -> Vec<Vec<f64>>;

    /// Get the name of this model.
    fn name(&self) -> &'static str;
}

/// Which topic model to fit.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TopicModelType {
    /// Latent Dirichlet Allocation.
    #[default]
    Lda,
    /// Non-negative matrix factorization.
    Nmf,
}

impl TopicModelType {
    /// The iteration budget used when none is configured.
    pub fn default_max_iter(self) -> usize {
        match self {
            TopicModelType::Lda => 10,
            TopicModelType::Nmf => 200,
        }
    }
}

impl fmt::Display for TopicModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicModelType::Lda => write!(f, "lda"),
            TopicModelType::Nmf => write!(f, "nmf"),
        }
    }
}

impl FromStr for TopicModelType {
    type Err = NarrativeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lda" => Ok(TopicModelType::Lda),
            "nmf" => Ok(TopicModelType::Nmf),
            other => Err(NarrativeError::invalid_argument(format!(
                "unknown topic model: {other}"
            ))),
        }
    }
}

/// A labelled group of terms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// `"Topic 1"`, `"Topic 2"`, ...
    pub label: String,
    /// Top terms joined with `", "`, most relevant first.
    pub terms: String,
}

/// Fits a topic model to a text and reports its top terms.
#[derive(Clone, Debug)]
pub struct TopicExtractor {
    num_topics: usize,
    model_type: TopicModelType,
    top_terms: usize,
    max_iter: Option<usize>,
    seed: u64,
    vectorizer: CountVectorizer,
}

impl TopicExtractor {
    pub fn new(num_topics: usize, model_type: TopicModelType) -> Self {
        TopicExtractor {
            num_topics,
            model_type,
            top_terms: 10,
            max_iter: None,
            seed: 0,
            vectorizer: CountVectorizer::new(),
        }
    }

    pub fn from_config(config: &TopicConfig) -> Self {
        TopicExtractor {
            num_topics: config.num_topics,
            model_type: config.model_type,
            top_terms: config.top_terms,
            max_iter: config.max_iter,
            seed: config.seed,
            vectorizer: CountVectorizer::new(),
        }
    }

    pub fn with_top_terms(mut self, top_terms: usize) -> Self {
        self.top_terms = top_terms;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn model(&self) -> Box<dyn TopicModel> {
        let max_iter = self
            .max_iter
            .unwrap_or_else(|| self.model_type.default_max_iter());
        match self.model_type {
            TopicModelType::Lda => Box::new(
                LatentDirichletAllocation::new(self.num_topics)
                    .with_max_iter(max_iter)
                    .with_seed(self.seed),
            ),
            TopicModelType::Nmf => Box::new(
                NonNegativeMatrixFactorization::new(self.num_topics)
                    .with_max_iter(max_iter)
                    .with_seed(self.seed),
            ),
        }
    }

    /// Extract topics from a single text.
    pub fn topics(&self, text: &str) -> Vec<Topic> {
        self.topics_from_documents(&[text])
    }

    /// Extract topics from a set of documents sharing one vocabulary.
    pub fn topics_from_documents<S: AsRef<str>>(&self, documents: &[S]) -> Vec<Topic> {
        let matrix = self.vectorizer.fit_transform(documents);
        if matrix.is_empty() {
            debug!("empty vocabulary, no topics extracted");
            return Vec::new();
        }

        let model = self.model();
        let components = model.fit(&matrix);
        debug!(
            "fitted {} with {} components over {} terms",
            model.name(),
            components.len(),
            matrix.n_terms()
        );

        components
            .iter()
            .enumerate()
            .map(|(i, weights)| Topic {
                label: format!("Topic {}", i + 1),
                terms: top_terms(weights, &matrix.vocabulary, self.top_terms).join(", "),
            })
            .collect()
    }
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new(5, TopicModelType::Lda)
    }
}

/// The `n` highest-weighted terms, descending; ties go to the lower
/// vocabulary index.
pub fn top_terms<'a>(weights: &[f64], vocabulary: &'a [String], n: usize) -> Vec<&'a str> {
    let mut order: Vec<usize> = (0..weights.len().min(vocabulary.len())).collect();
    order.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));
    order
        .into_iter()
        .take(n)
        .map(|i| vocabulary[i].as_str())
        .collect()
}
