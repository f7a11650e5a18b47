//! Error types for writing output files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// The destination's parent directory does not exist.
    #[error("output directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to create the temporary file in the destination directory.
    #[error("failed to create temporary file in {path}: {source}")]
    TempFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a row.
    #[error("failed to write CSV for {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    /// Failed to move the finished file into place.
    #[error("failed to write {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
