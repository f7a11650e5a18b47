//! Atomic CSV writing.

use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use billmerge_model::OutputTable;

use crate::error::{OutputError, Result};

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Writes `table` to `path` as CSV, header first.
///
/// Rows are written to a temporary file in the destination directory which
/// replaces `path` only once everything has been flushed. An existing file
/// at `path` is overwritten.
pub fn write_output_csv(table: &OutputTable, path: &Path) -> Result<()> {
    let dir = parent_dir(path);
    if !dir.is_dir() {
        return Err(OutputError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let temp = NamedTempFile::new_in(dir).map_err(|e| OutputError::TempFile {
        path: dir.to_path_buf(),
        source: e,
    })?;
    debug!(temp = %temp.path().display(), "writing output to temporary file");

    let csv_error = |e: csv::Error| OutputError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(temp);
    writer.write_record(&table.columns).map_err(csv_error)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_error)?;
    }

    let temp = writer.into_inner().map_err(|e| OutputError::CsvWrite {
        path: path.to_path_buf(),
        message: e.error().to_string(),
    })?;
    temp.as_file()
        .sync_all()
        .map_err(|e| OutputError::Persist {
            path: path.to_path_buf(),
            source: e,
        })?;
    temp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    info!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.len(),
        "wrote output CSV"
    );
    Ok(())
}
