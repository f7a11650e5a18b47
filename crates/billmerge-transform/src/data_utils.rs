//! String helpers shared by the reconciliation stages.

use billmerge_model::Record;

/// Space-joins the values of `columns` for one record and trims the ends.
///
/// Values are joined as written, so inner padding survives; only the outer
/// whitespace of the joined string is removed.
///
/// # Examples
///
/// ```
/// use billmerge_model::{Record, RecordOrigin};
/// use billmerge_transform::data_utils::join_columns;
///
/// let origin = RecordOrigin { file_index: 0, line: 1 };
/// let record = Record::from_pairs(origin, [("ADDR1", "1 Elm"), ("ADDRESS1", "")]);
/// let columns = vec!["ADDR1".to_string(), "ADDRESS1".to_string()];
/// assert_eq!(join_columns(&record, &columns), "1 Elm");
/// ```
pub fn join_columns<S: AsRef<str>>(record: &Record, columns: &[S]) -> String {
    columns
        .iter()
        .map(|column| record.get(column.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Collapses every run of whitespace to one space and trims the ends.
///
/// # Examples
///
/// ```
/// use billmerge_transform::data_utils::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  N   Main \t St "), "N Main St");
/// assert_eq!(collapse_whitespace("   "), "");
/// ```
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed value of an optional column, or `""` when the column is absent.
pub fn trimmed_value<'a>(record: &'a Record, column: Option<&str>) -> &'a str {
    column.map_or("", |column| record.get(column).trim())
}

/// True for empty or whitespace-only values.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
