//! Error handling for Cary export parsing operations.
//!
//! Provides error types with context for file reading, format detection,
//! and timestamp conversion failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid Cary export format in file: {path} - {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("Series count mismatch in {context}: expected {expected} series, found {found}")]
    SchemaMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("Collection time parsing failed in file: {path} - '{value}'")]
    TimestampParse {
        path: PathBuf,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Cannot extract a profile from a table with an empty index")]
    EmptyTable,
}

impl CaryError {
    /// Create a format error with file context
    pub fn invalid_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a series count mismatch error
    pub fn schema_mismatch(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::SchemaMismatch {
            context: context.into(),
            expected,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, CaryError>;
