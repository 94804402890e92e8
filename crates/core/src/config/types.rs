use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::extract::ExtractorKind;
use crate::report::OutputFormat;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tickets: TicketReportConfig,
    #[serde(default)]
    pub status: StatusReportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and how to read a delimited export.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct InputConfig {
    /// File to read.
    pub path: PathBuf,
    /// WHATWG encoding label (e.g. "utf-16", "utf-8"). A BOM overrides it.
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// Field separator, a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl InputConfig {
    /// Input with the default encoding and delimiter.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: default_encoding(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_encoding() -> String {
    "utf-16".to_string()
}

fn default_delimiter() -> char {
    '\t'
}

/// Ticket rollup report configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TicketReportConfig {
    #[serde(default = "default_ticket_input")]
    pub input: InputConfig,
    /// Column holding the business service name (also the duplicate-header key).
    #[serde(default = "default_service_column")]
    pub service_column: String,
    /// Free-text column carrying the ticket reference and its status.
    #[serde(default = "default_commitment_column")]
    pub commitment_column: String,
    /// Ticket/status extraction strategy.
    #[serde(default)]
    pub extractor: ExtractorKind,
    /// Number of entries in the most-referenced summary.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Statuses (compared uppercased) that count as finished.
    #[serde(default = "default_done_statuses")]
    pub done_statuses: Vec<String>,
}

impl Default for TicketReportConfig {
    fn default() -> Self {
        Self {
            input: default_ticket_input(),
            service_column: default_service_column(),
            commitment_column: default_commitment_column(),
            extractor: ExtractorKind::default(),
            top_n: default_top_n(),
            done_statuses: default_done_statuses(),
        }
    }
}

fn default_ticket_input() -> InputConfig {
    InputConfig::new("14-06-2025.csv")
}

fn default_service_column() -> String {
    "(C) Business Service Name".to_string()
}

fn default_commitment_column() -> String {
    "(I) Commitment Date & Jira for Adopting Environment Based Prefix Lists".to_string()
}

fn default_top_n() -> usize {
    5
}

fn default_done_statuses() -> Vec<String> {
    ["DONE", "CLOSED", "RESOLVED", "COMPLETED"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Status distribution report configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusReportConfig {
    #[serde(default = "default_status_input")]
    pub input: InputConfig,
    /// Column holding the re-deployment status.
    #[serde(default = "default_status_column")]
    pub status_column: String,
    /// Bucket label used for null or blank status values.
    #[serde(default = "default_missing_label")]
    pub missing_label: String,
}

impl Default for StatusReportConfig {
    fn default() -> Self {
        Self {
            input: default_status_input(),
            status_column: default_status_column(),
            missing_label: default_missing_label(),
        }
    }
}

fn default_status_input() -> InputConfig {
    InputConfig::new("export-7.csv")
}

fn default_status_column() -> String {
    "(J) Status of Re-DeploymentOPENNOT APPLICABLEIN PROGRESSBLOCKEDCOMPLETED".to_string()
}

fn default_missing_label() -> String {
    "Not Specified".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}
