//! Text extraction from files.
//!
//! An [`Extractor`] turns the bytes of one file format into plain text.
//! [`extract_file`] picks an extractor by file extension and never fails:
//! unreadable files and unsupported formats yield an empty string after a
//! logged warning, so downstream analysis only ever sees text.

pub mod csv;
pub mod text;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use crate::error::{NarrativeError, Result};

pub use self::csv::CsvExtractor;
pub use self::text::PlainTextExtractor;

/// Converts one input format into plain text.
pub trait Extractor: Send + Sync {
    /// Extract all text from `reader`.
    fn extract(&self, reader: &mut dyn Read) -> Result<String>;

    /// Get the name of this extractor.
    fn name(&self) -> &'static str;
}

/// Select the extractor for a file extension (case-insensitive).
pub fn extractor_for(extension: &str) -> Option<Box<dyn Extractor>> {
    match extension.to_ascii_lowercase().as_str() {
        "txt" | "text" | "md" => Some(Box::new(PlainTextExtractor::new())),
        "csv" => Some(Box::new(CsvExtractor::new())),
        _ => None,
    }
}

/// Extract text from `path`, or fail with the reason.
pub fn try_extract_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let extractor = extractor_for(extension).ok_or_else(|| {
        NarrativeError::extraction(format!("unsupported file type: {}", path.display()))
    })?;

    debug!("extracting {} with {}", path.display(), extractor.name());
    let mut reader = BufReader::new(File::open(path)?);
    extractor.extract(&mut reader)
}

/// Extract text from `path`, returning an empty string on any failure.
pub fn extract_file<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match try_extract_file(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("failed to extract {}: {}", path.display(), e);
            String::new()
        }
    }
}
