//! Unicode word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29). Unlike the whitespace
//! tokenizer, punctuation becomes its own token, so `"cats, dogs."` yields
//! `cats` `,` `dogs` `.`. Whitespace segments are dropped.
//!
//! # Examples
//!
//! ```
//! use narrative::analysis::tokenizer::Tokenizer;
//! use narrative::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world.").map(|t| t.text).collect();
//! assert_eq!(tokens, vec!["Hello", ",", "world", "."]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that splits text on Unicode word boundaries, keeping
/// punctuation as separate tokens.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
            .enumerate()
            .map(|(position, (start, segment))| {
                Token::with_offsets(segment, position, start, start + segment.len())
            })
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_is_separate() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("The cats, sat.").collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["The", "cats", ",", "sat", "."]);
        assert_eq!(tokens[2].position, 2);
        assert_eq!(tokens[2].start_offset, 8);
    }

    #[test]
    fn test_decimal_stays_whole() {
        let tokenizer = UnicodeWordTokenizer::new();
        let texts: Vec<String> = tokenizer.tokenize("version 1.5 ships").map(|t| t.text).collect();
        assert_eq!(texts, vec!["version", "1.5", "ships"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(UnicodeWordTokenizer::new().tokenize("").count(), 0);
    }
}
