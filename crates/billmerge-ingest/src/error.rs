//! Error types for billing export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// A data row has a different number of fields than the header.
    ///
    /// Rows are never skipped or padded; one bad row fails the run.
    #[error(
        "malformed row in {path} at line {line}: expected {expected} fields, found {found}"
    )]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Input Set Errors ===
    /// Nothing to process in the selected directory.
    #[error("no input data in {path}: {reason}")]
    EmptyInputSet { path: PathBuf, reason: &'static str },
}

impl IngestError {
    pub(crate) fn from_csv(path: &std::path::Path, err: &csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => Self::MalformedRow {
                path: path.to_path_buf(),
                line: pos.as_ref().map_or(0, csv::Position::line),
                expected: *expected_len as usize,
                found: *len as usize,
            },
            _ => Self::CsvParse {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
