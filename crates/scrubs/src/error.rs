//! Error types for the scrubs library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scrubs operations.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to clean.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// An expected column is absent at final projection.
    #[error("Expected column '{0}' is missing from the table")]
    MissingColumn(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing the spreadsheet output.
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias for scrubs operations.
pub type Result<T> = std::result::Result<T, ScrubError>;
