//! Projection onto the fixed output schema.

use tracing::debug;

use billmerge_model::{EXPECTED_COLUMNS, OutputTable, RecordTable};

/// Expected columns the table does not carry.
pub fn missing_columns(table: &RecordTable) -> Vec<&'static str> {
    EXPECTED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !table.has_column(column))
        .collect()
}

/// Projects every record onto [`EXPECTED_COLUMNS`], in order.
///
/// Absent columns are materialized as empty strings and every other column
/// is dropped.
pub fn finalize_schema(table: &RecordTable) -> OutputTable {
    let missing = missing_columns(table);
    if !missing.is_empty() {
        debug!(columns = ?missing, "materializing missing output columns as empty");
    }

    let mut output = OutputTable::new(EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect());
    output.rows = table
        .records
        .iter()
        .map(|record| {
            EXPECTED_COLUMNS
                .iter()
                .map(|column| record.get(column).to_string())
                .collect()
        })
        .collect();
    output
}
