//! Report pipelines: load → (extract →) aggregate → render.
//!
//! The runners return the complete output as a string and never print, so a
//! failed run produces no partial report.

mod format;
mod runner;

pub use format::{is_done, render_status_report, render_ticket_report};
pub use runner::{
    run_status_report, run_ticket_report, status_report_json, status_schema,
    ticket_report_json, ticket_schema, TicketLine, TicketSummary,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::LoadError;

/// Output rendering for both reports
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text report.
    #[default]
    Text,
    /// The aggregate snapshot as pretty-printed JSON.
    Json,
}

/// Errors that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to load input: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
