//! Descriptive statistics over raw document text.

use serde::{Deserialize, Serialize};

/// Character, word, line and sentence counts of a text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Characters other than space, tab, newline and `.`.
    pub char_count: usize,
    /// Whitespace-delimited words.
    pub word_count: usize,
    /// Lines that are not blank after trimming.
    pub line_count: usize,
    /// Non-blank segments between `.` characters.
    pub sentence_count: usize,
}

/// Compute [`TextStats`] for `text`.
///
/// The sentence count is a heuristic: it splits on every literal dot, so
/// abbreviations and decimals count as boundaries.
///
/// ```
/// use narrative::analytics::stats::text_stats;
///
/// let stats = text_stats("Hello world.");
/// assert_eq!(stats.char_count, 10);
/// assert_eq!(stats.word_count, 2);
/// assert_eq!(stats.line_count, 1);
/// assert_eq!(stats.sentence_count, 1);
/// ```
pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        char_count: text
            .chars()
            .filter(|c| !matches!(c, ' ' | '\n' | '\t' | '.'))
            .count(),
        word_count: text.split_whitespace().count(),
        line_count: text.lines().filter(|line| !line.trim().is_empty()).count(),
        sentence_count: text
            .split('.')
            .filter(|segment| !segment.trim().is_empty())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(text_stats(""), TextStats::default());
        assert_eq!(text_stats("  \n\t "), TextStats::default());
    }

    #[test]
    fn test_multiline_text() {
        let text = "First line. Still first.\n\n  \nSecond line\n";
        let stats = text_stats(text);

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.line_count, 2);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.char_count, "FirstlineStillfirstSecondline".len());
    }

    #[test]
    fn test_counts_unicode_characters() {
        let stats = text_stats("naïve café");
        assert_eq!(stats.char_count, 9);
        assert_eq!(stats.word_count, 2);
    }

    #[test]
    fn test_carriage_return_is_counted() {
        let stats = text_stats("a\r\nb");
        assert_eq!(stats.char_count, 3);
        assert_eq!(stats.line_count, 2);
    }
}
