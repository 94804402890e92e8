//! Testing utilities for building encoded exports.
//!
//! # Example
//!
//! ```rust,ignore
//! use deploytally_core::testing::{utf16le_bytes, ExportBuilder};
//!
//! let text = ExportBuilder::new(["Service", "Jira"])
//!     .row(["billing", "NET-1 DONE"])
//!     .build();
//! std::fs::write(&path, utf16le_bytes(&text))?;
//! ```

/// Encode `text` as UTF-16LE with a leading byte-order mark.
pub fn utf16le_bytes(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Encode `text` as UTF-16BE with a leading byte-order mark.
pub fn utf16be_bytes(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

/// Builds delimited export text, one header line followed by data lines.
///
/// Cells are written verbatim; no quoting is applied.
#[derive(Debug, Clone)]
pub struct ExportBuilder {
    delimiter: char,
    lines: Vec<String>,
}

impl ExportBuilder {
    /// Start a tab-delimited export with the given header.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_delimiter(headers, '\t')
    }

    pub fn with_delimiter<I, S>(headers: I, delimiter: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self {
            delimiter,
            lines: Vec::new(),
        };
        builder.push(headers);
        builder
    }

    /// Append a data row.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push(cells);
        self
    }

    fn push<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sep = self.delimiter.to_string();
        let line = cells
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(&sep);
        self.lines.push(line);
    }

    /// The export text, newline-terminated.
    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Test fixtures using the default column names.
pub mod fixtures {
    use super::ExportBuilder;
    use crate::config::{StatusReportConfig, TicketReportConfig};

    /// Ticket export with (service, commitment) rows.
    pub fn ticket_export(rows: &[(&str, &str)]) -> ExportBuilder {
        let config = TicketReportConfig::default();
        rows.iter().fold(
            ExportBuilder::new([
                config.service_column.as_str(),
                "Owner",
                config.commitment_column.as_str(),
            ]),
            |builder, (service, commitment)| builder.row([*service, "team", *commitment]),
        )
    }

    /// Status export with one status value per row.
    pub fn status_export(statuses: &[&str]) -> ExportBuilder {
        let config = StatusReportConfig::default();
        statuses.iter().enumerate().fold(
            ExportBuilder::new(["(C) Business Service Name", config.status_column.as_str()]),
            |builder, (i, status)| builder.row([format!("service-{i}").as_str(), *status]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16le_bytes() {
        assert_eq!(utf16le_bytes("A\t"), vec![0xFF, 0xFE, 0x41, 0x00, 0x09, 0x00]);
    }

    #[test]
    fn test_utf16be_bytes() {
        assert_eq!(utf16be_bytes("A"), vec![0xFE, 0xFF, 0x00, 0x41]);
    }

    #[test]
    fn test_export_builder() {
        let text = ExportBuilder::new(["a", "b"]).row(["1", "2"]).build();
        assert_eq!(text, "a\tb\n1\t2\n");

        let text = ExportBuilder::with_delimiter(["a", "b"], ',').build();
        assert_eq!(text, "a,b\n");
    }
}
