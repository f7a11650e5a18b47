//! Errors raised before any processing starts.

use thiserror::Error;

/// A required path was not given on the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no input directory selected (use --input-dir)")]
    NoInputSelected,

    #[error("no output file selected (use --output, or --dry-run to skip writing)")]
    NoOutputSelected,
}
