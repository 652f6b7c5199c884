//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split a normalized string into a [`TokenStream`]. The general
//! pipeline uses [`whitespace::WhitespaceTokenizer`]; the summary path uses
//! the boundary-aware [`unicode_word::UnicodeWordTokenizer`].
//!
//! # Examples
//!
//! ```
//! use narrative::analysis::tokenizer::Tokenizer;
//! use narrative::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization is total: every string, including the empty one, yields a
/// (possibly empty) stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;
pub mod whitespace;

pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
