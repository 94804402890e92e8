//! Aggregation of loaded rows into immutable report snapshots.
//!
//! - `TicketRollup`: tickets keyed by identifier, with services, latest status
//!   and reference counts
//! - `StatusDistribution`: row counts and shares per status value

mod status;
mod tickets;

pub use status::{StatusDistribution, StatusTally};
pub use tickets::{TicketRecord, TicketRollup};

use thiserror::Error;

use crate::table::ColumnRole;

/// A single row that cannot contribute to a report. Logged and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("line {line}: missing {column} value")]
    MissingValue { line: u64, column: ColumnRole },

    #[error("line {line}: no ticket reference in {text:?}")]
    NoTicketReference { line: u64, text: String },
}
