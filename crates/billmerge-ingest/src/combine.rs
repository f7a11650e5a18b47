//! Concatenation of every input file into one record table.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use billmerge_map::normalize_column_name;
use billmerge_model::{Record, RecordOrigin, RecordTable};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::discovery::list_csv_files;
use crate::error::{IngestError, Result};

/// Loads every `*.csv` file in `dir` into one [`RecordTable`].
///
/// Files are read in filename order. Headers are normalized per file, so
/// columns that differ only in case or padding merge. A file without a header
/// is skipped with a warning; any other read failure aborts the load.
///
/// Fails with [`IngestError::EmptyInputSet`] when the directory has no CSV
/// files or when the files hold no data rows between them.
pub fn load_directory(dir: &Path) -> Result<RecordTable> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        return Err(IngestError::EmptyInputSet {
            path: dir.to_path_buf(),
            reason: "no CSV files found",
        });
    }

    let mut tables = Vec::with_capacity(files.len());
    for path in files {
        match read_csv_table(&path) {
            Ok(table) => tables.push((path, table)),
            Err(IngestError::EmptyCsv { path }) => {
                warn!(path = %path.display(), "skipping empty CSV file");
            }
            Err(err) => return Err(err),
        }
    }

    let combined = combine_tables(tables);
    if combined.is_empty() {
        return Err(IngestError::EmptyInputSet {
            path: dir.to_path_buf(),
            reason: "all CSV files are empty",
        });
    }
    Ok(combined)
}

/// Concatenates already-read tables.
///
/// The resulting column list is the union of normalized headers in
/// first-seen order. When one file repeats a header after normalization, the
/// first occurrence is kept.
pub fn combine_tables(tables: Vec<(PathBuf, CsvTable)>) -> RecordTable {
    let mut combined = RecordTable::new();
    for (path, table) in tables {
        let columns = file_columns(&path, &table.headers);
        for column in columns.iter().flatten() {
            combined.ensure_column(column.clone());
        }

        let file_index = combined.add_source(path);
        for (idx, row) in table.rows.into_iter().enumerate() {
            let mut record = Record::new(RecordOrigin {
                file_index,
                line: (idx as u64) + 1,
            });
            for (column, value) in columns.iter().zip(row) {
                if let Some(column) = column {
                    record.set(column.clone(), value);
                }
            }
            combined.push_record(record);
        }
    }
    debug!(
        files = combined.sources.len(),
        columns = combined.columns.len(),
        records = combined.len(),
        "combined input tables"
    );
    combined
}

/// Normalized header per position; `None` marks a repeated header.
fn file_columns(path: &Path, headers: &[String]) -> Vec<Option<String>> {
    let mut seen: Vec<String> = Vec::with_capacity(headers.len());
    let mut columns = Vec::with_capacity(headers.len());
    for raw in headers {
        let name = normalize_column_name(raw);
        if seen.contains(&name) {
            warn!(
                path = %path.display(),
                column = %name,
                "duplicate column after normalization; keeping first occurrence"
            );
            columns.push(None);
        } else {
            seen.push(name.clone());
            columns.push(Some(name));
        }
    }
    columns
}
