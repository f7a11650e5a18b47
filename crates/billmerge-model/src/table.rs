#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOrigin {
    /// Index into [`RecordTable::sources`].
    pub file_index: usize,
    /// 1-based data line within the file (the header is line 0).
    pub line: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Read from an input file.
    #[default]
    Source,
    /// Copy of a source record carrying the synthesized street address.
    AddressDuplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub origin: RecordOrigin,
    pub kind: RecordKind,
    pub cells: BTreeMap<String, String>,
}

impl Record {
    pub fn new(origin: RecordOrigin) -> Self {
        Self {
            origin,
            kind: RecordKind::Source,
            cells: BTreeMap::new(),
        }
    }

    /// Builds a source record from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(origin: RecordOrigin, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new(origin);
        for (column, value) in pairs {
            record.set(column, value);
        }
        record
    }

    /// Cell value, or the empty string when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Full copy of this record with one cell replaced.
    pub fn duplicate_with(&self, column: &str, value: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.kind = RecordKind::AddressDuplicate;
        copy.set(column, value);
        copy
    }

    pub fn is_duplicate(&self) -> bool {
        self.kind == RecordKind::AddressDuplicate
    }
}

/// All input records concatenated into one table.
///
/// `columns` is the union of every file's normalized headers in first-seen
/// order. Records never need to carry every column; absent cells read as
/// empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordTable {
    pub sources: Vec<PathBuf>,
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for column in columns {
            table.ensure_column(column);
        }
        table
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Appends `name` to the column list unless it is already present.
    pub fn ensure_column(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_column(&name) {
            self.columns.push(name);
        }
    }

    /// Registers a source file and returns its index.
    pub fn add_source(&mut self, path: impl Into<PathBuf>) -> usize {
        self.sources.push(path.into());
        self.sources.len() - 1
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Final fixed-shape table ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl OutputTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Value of `column` in row `row`, if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
