//! Error types for the fdscout library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dependency discovery.
#[derive(Debug, Error)]
pub enum FdError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row does not line up with the header.
    #[error("Parse error at row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: usize,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data rows to scan.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Depth limit, support threshold or trial count out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A candidate names an attribute the schema does not contain.
    #[error("Unknown attribute: '{0}'")]
    UnknownAttribute(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fdscout operations.
pub type Result<T> = std::result::Result<T, FdError>;
