//! Billing export ingestion.
//!
//! This crate discovers the CSV exports in a directory, reads each one
//! strictly (string cells, fixed column count), normalizes their headers and
//! concatenates them into a single [`billmerge_model::RecordTable`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use billmerge_ingest::load_directory;
//!
//! let table = load_directory(Path::new("exports/2024-06"))?;
//! println!("{} records from {} files", table.len(), table.sources.len());
//! ```

mod combine;
mod csv_table;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{CsvTable, read_csv_table};

// === File Discovery ===
pub use discovery::list_csv_files;

// === Concatenation ===
pub use combine::{combine_tables, load_directory};
