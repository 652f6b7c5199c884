//! Token filter implementations for token transformation.
//!
//! Filters consume a token stream and produce a new one. Every filter keeps
//! the relative order of the tokens it lets through.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words (case-insensitive)
//! - [`stem::StemFilter`] - Reduces words to their stem form
//! - [`lemma::LemmaFilter`] - Maps words to their dictionary base form
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Stop Words → Stemmer → Lemmatizer
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lemma;
pub mod stem;
pub mod stop;

pub use lemma::{LemmaDictionary, LemmaFilter};
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
