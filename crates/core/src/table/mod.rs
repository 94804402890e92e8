//! Loading delimited, encoded exports into an in-memory table.

mod loader;
mod schema;

pub use loader::{load_table, parse_table, NULL_MARKERS};
pub use schema::{ColumnRole, ColumnSpec, Schema};

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors while reading an export. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown encoding label {label:?} for {}", path.display())]
    UnknownEncoding { path: PathBuf, label: String },

    #[error("Failed to decode {} as {encoding}: malformed byte sequence", path.display())]
    Decode { path: PathBuf, encoding: String },

    #[error("Malformed table in {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Required column {column:?} not found in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },
}

/// One data row, projected onto the schema's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line in the source file where the record starts.
    pub line: u64,
    fields: Vec<(ColumnRole, Option<String>)>,
}

impl Row {
    pub fn new(line: u64, fields: Vec<(ColumnRole, Option<String>)>) -> Self {
        Self { line, fields }
    }

    /// Raw value for `role`, or `None` when the cell is null or the role is not
    /// part of the schema.
    pub fn get(&self, role: ColumnRole) -> Option<&str> {
        self.fields
            .iter()
            .find(|(r, _)| *r == role)
            .and_then(|(_, v)| v.as_deref())
    }
}

/// A fully loaded export.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    /// Data rows dropped because they repeated the header.
    pub duplicate_headers: usize,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
