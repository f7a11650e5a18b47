//! Strict CSV loading.
//!
//! Every cell is kept as a string; no type inference and no trimming. Cells
//! that spell a missing value (`NA`, `N/A`, `NULL`, `nan`, ...) load as empty
//! strings. The first record is the header. Rows whose field count differs from the
//! header fail the load with [`IngestError::MalformedRow`].

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// Raw header cells, as written.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Cell spellings read as missing. Matched exactly, case-sensitive.
const MISSING_VALUE_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns the cell as loaded: missing-value tokens become `""`.
fn cell_value(raw: &str) -> String {
    if MISSING_VALUE_TOKENS.contains(&raw) {
        String::new()
    } else {
        raw.to_string()
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads a CSV file with a single header row.
///
/// Returns [`IngestError::EmptyCsv`] when the file has no header at all.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::from_csv(path, &e))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::from_csv(path, &e))?;
        rows.push(record.iter().map(cell_value).collect());
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv"
    );
    Ok(CsvTable { headers, rows })
}
