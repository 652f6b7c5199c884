use std::io::Read;

use crate::error::{NarrativeError, Result};

use super::Extractor;

/// Reads UTF-8 text as is.
#[derive(Clone, Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        PlainTextExtractor
    }
}

impl Extractor for PlainTextExtractor {
    fn extract(&self, reader: &mut dyn Read) -> Result<String> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        String::from_utf8(bytes)
            .map_err(|e| NarrativeError::extraction(format!("invalid UTF-8: {e}")))
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_utf8() {
        let mut input = "naïve café\n".as_bytes();
        assert_eq!(
            PlainTextExtractor::new().extract(&mut input).unwrap(),
            "naïve café\n"
        );
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let mut input: &[u8] = &[0x66, 0xff, 0x6f];
        assert!(PlainTextExtractor::new().extract(&mut input).is_err());
    }
}
