//! Error types for the Narrative library.
//!
//! All fallible operations return [`NarrativeError`] through the crate-wide
//! [`Result`] alias. The text operations themselves are total: they accept any
//! string, including the empty one, and never fail. Errors only come from the
//! outer edges (configuration, resource files, extraction, output).
//!
//! # Examples
//!
//! ```
//! use narrative::error::{NarrativeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NarrativeError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::{fmt, io};

use thiserror::Error;

/// The main error type for Narrative operations.
#[derive(Error, Debug)]
pub enum NarrativeError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (invalid input, filter construction, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Text extraction errors
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Formatting errors while rendering output
    #[error("Format error: {0}")]
    Fmt(#[from] fmt::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with NarrativeError.
pub type Result<T> = std::result::Result<T, NarrativeError>;

impl NarrativeError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NarrativeError::Analysis(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NarrativeError::Config(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        NarrativeError::Extraction(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NarrativeError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NarrativeError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NarrativeError::analysis("empty input");
        assert_eq!(error.to_string(), "Analysis error: empty input");

        let error = NarrativeError::config("num_topics must be at least 1");
        assert_eq!(
            error.to_string(),
            "Config error: num_topics must be at least 1"
        );

        let error = NarrativeError::invalid_argument("bad flag");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad flag");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = NarrativeError::from(io_error);

        match error {
            NarrativeError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_fmt_error_conversion() {
        let error: NarrativeError = fmt::Error.into();
        assert!(matches!(error, NarrativeError::Fmt(_)));
        assert!(error.to_string().starts_with("Format error"));
    }
}
