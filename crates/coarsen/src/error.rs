//! Error types for the coarsen library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coarsen operations.
#[derive(Debug, Error)]
pub enum CoarsenError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty file or no columns to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Invalid rule set (bad rule file, empty buckets, inverted ranges).
    #[error("Invalid rule set: {0}")]
    Rules(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for coarsen operations.
pub type Result<T> = std::result::Result<T, CoarsenError>;
