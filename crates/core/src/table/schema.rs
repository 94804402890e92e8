//! Column schema for delimited exports.
//!
//! A schema names every column a report depends on together with the role it
//! plays, and designates one of them as the key column used to recognise
//! duplicated header rows. It is resolved against the header exactly once.

use std::fmt;

use serde::Serialize;

use super::LoadError;

/// Semantic role of a column within a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Business service name.
    ServiceName,
    /// Free-text commitment cell carrying a ticket reference.
    Commitment,
    /// Re-deployment status.
    Status,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnRole::ServiceName => "service name",
            ColumnRole::Commitment => "commitment",
            ColumnRole::Status => "status",
        })
    }
}

/// A required column: its role and its literal header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub role: ColumnRole,
    pub name: String,
}

impl ColumnSpec {
    pub fn new(role: ColumnRole, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }
}

/// The set of columns a report needs, with one designated key column.
#[derive(Debug, Clone)]
pub struct Schema {
    key: ColumnRole,
    columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Create a schema whose key column is `key`.
    pub fn new(key: ColumnSpec) -> Self {
        Self {
            key: key.role,
            columns: vec![key],
        }
    }

    /// Add another required column. A role that is already present is replaced.
    pub fn with_column(mut self, spec: ColumnSpec) -> Self {
        if let Some(existing) = self.columns.iter_mut().find(|c| c.role == spec.role) {
            *existing = spec;
        } else {
            self.columns.push(spec);
        }
        self
    }

    pub fn key(&self) -> ColumnRole {
        self.key
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Map each required column to its position in `headers`.
    pub(crate) fn resolve<'h, I>(
        &self,
        headers: I,
        path: &std::path::Path,
    ) -> Result<ResolvedSchema, LoadError>
    where
        I: IntoIterator<Item = &'h str>,
    {
        let headers: Vec<&str> = headers.into_iter().collect();
        let mut positions = Vec::with_capacity(self.columns.len());

        for spec in &self.columns {
            let wanted = spec.name.trim();
            let index = headers
                .iter()
                .position(|h| h.trim() == wanted)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column: spec.name.clone(),
                })?;
            positions.push((spec.role, index));
        }

        Ok(ResolvedSchema {
            key: self.key,
            key_header: self
                .columns
                .iter()
                .find(|c| c.role == self.key)
                .map(|c| c.name.trim().to_string())
                .unwrap_or_default(),
            positions,
        })
    }
}

/// A schema bound to concrete header positions.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedSchema {
    pub key: ColumnRole,
    pub key_header: String,
    pub positions: Vec<(ColumnRole, usize)>,
}
