//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the text string before it is passed to the
//! tokenizer.
//!
//! # Available Filters
//!
//! - [`whitespace::WhitespaceCharFilter`] - Collapses whitespace runs and trims
//! - [`pattern_remove::PatternRemoveCharFilter`] - Removes every regex match
//!
//! # Examples
//!
//! ```
//! use narrative::analysis::char_filter::CharFilter;
//! use narrative::analysis::char_filter::whitespace::WhitespaceCharFilter;
//!
//! let filter = WhitespaceCharFilter::new();
//! assert_eq!(filter.filter("  hello \n\t world "), "hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_remove;
pub mod whitespace;

pub use pattern_remove::PatternRemoveCharFilter;
pub use whitespace::WhitespaceCharFilter;
