use super::CharFilter;

/// A char filter that collapses every run of whitespace into a single space
/// and trims both ends.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceCharFilter;

impl WhitespaceCharFilter {
    /// Create a new whitespace char filter.
    pub fn new() -> Self {
        WhitespaceCharFilter
    }
}

impl CharFilter for WhitespaceCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for word in input.split_whitespace() {
            if !output.is_empty() {
                output.push(' ');
            }
            output.push_str(word);
        }
        output
    }

    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_and_trim() {
        let filter = WhitespaceCharFilter::new();
        assert_eq!(filter.filter("  a \t\tb\n\nc  "), "a b c");
        assert_eq!(filter.filter(""), "");
        assert_eq!(filter.filter(" \n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let filter = WhitespaceCharFilter::new();
        let once = filter.filter(" one  two\r\nthree ");
        assert_eq!(filter.filter(&once), once);
    }
}
