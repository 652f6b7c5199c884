//! CSV text extraction.
//!
//! The first row is a header and is skipped. Every non-empty cell of the
//! remaining rows is appended followed by a single space:
//! ```csv
//! name,comment
//! Ann,great service
//! ```
//! becomes `"Ann great service "`.

use std::io::Read;

use csv::ReaderBuilder;

use crate::error::Result;

use super::Extractor;

/// Flattens CSV records into space-separated text.
#[derive(Clone, Debug)]
pub struct CsvExtractor {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
}

impl Default for CsvExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExtractor {
    /// Create a new CSV extractor with comma delimiter.
    pub fn new() -> Self {
        CsvExtractor { delimiter: b',' }
    }

    /// Set a custom single-byte delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Extractor for CsvExtractor {
    fn extract(&self, reader: &mut dyn Read) -> Result<String> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut text = String::new();
        for record in reader.records() {
            let record = record?;
            for cell in record.iter().filter(|cell| !cell.is_empty()) {
                text.push_str(cell);
                text.push(' ');
            }
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(extractor: &CsvExtractor, input: &str) -> String {
        let mut bytes = input.as_bytes();
        extractor.extract(&mut bytes).unwrap()
    }

    #[test]
    fn test_header_is_skipped() {
        let text = extract(&CsvExtractor::new(), "title,body\nFirst,Hello there\nSecond,Bye\n");
        assert_eq!(text, "First Hello there Second Bye ");
    }

    #[test]
    fn test_empty_cells_and_ragged_rows() {
        let text = extract(&CsvExtractor::new(), "a,b,c\n1,,3\n4\n");
        assert_eq!(text, "1 3 4 ");
    }

    #[test]
    fn test_quoted_cells_and_custom_delimiter() {
        let text = extract(&CsvExtractor::new(), "q\n\"one, two\"\n");
        assert_eq!(text, "one, two ");

        let text = extract(&CsvExtractor::new().with_delimiter(b';'), "x;y\nleft;right\n");
        assert_eq!(text, "left right ");
    }

    #[test]
    fn test_tab_delimiter_keeps_commas() {
        let extractor = CsvExtractor::new().with_delimiter(b'\t');
        let text = extract(&extractor, "who\tnote\nAnn\tfast, friendly\n");
        assert_eq!(text, "Ann fast, friendly ");
    }

    #[test]
    fn test_header_only() {
        assert_eq!(extract(&CsvExtractor::new(), "a,b\n"), "");
        assert_eq!(extract(&CsvExtractor::new(), ""), "");
    }
}
