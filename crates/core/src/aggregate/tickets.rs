//! Ticket-centric rollup.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, warn};

use super::RowError;
use crate::extract::{TicketExtractor, TicketId, TicketMatch};
use crate::table::{ColumnRole, Row};

/// Everything known about one ticket after all rows are folded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketRecord {
    pub ticket: TicketId,
    /// Status from the last row (in file order) that referenced the ticket.
    pub status: String,
    /// Referencing services, sorted and duplicate-free.
    pub services: BTreeSet<String>,
    /// Number of rows that referenced the ticket.
    pub occurrences: usize,
}

impl TicketRecord {
    /// Services joined for display, e.g. `billing, search`.
    pub fn services_joined(&self) -> String {
        self.services
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Immutable snapshot of all ticket references in an export.
///
/// Serializes with tickets as a map keyed by ticket id, in ticket order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketRollup {
    tickets: BTreeMap<TicketId, TicketRecord>,
    total_references: usize,
    skipped_rows: usize,
}

impl TicketRollup {
    /// Fold `rows` in order into a rollup.
    ///
    /// A row contributes when it has a non-blank service name and its
    /// commitment text yields a ticket and a status. When several rows name
    /// the same ticket, the status of the last one wins. Other rows are logged
    /// as warnings and counted in `skipped_rows`.
    pub fn from_rows<'a, I>(rows: I, extractor: &dyn TicketExtractor) -> Self
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let rollup = rows.into_iter().fold(Self::default(), |mut acc, row| {
            match observe(row, extractor) {
                Ok((service, found)) => acc.apply(service, found),
                Err(e) => {
                    warn!("Skipping row: {}", e);
                    acc.skipped_rows += 1;
                }
            }
            acc
        });

        debug!(
            "Ticket rollup ({}): {} tickets, {} references, {} rows skipped",
            extractor.name(),
            rollup.tickets.len(),
            rollup.total_references,
            rollup.skipped_rows
        );
        rollup
    }

    fn apply(&mut self, service: String, found: TicketMatch) {
        let record = self
            .tickets
            .entry(found.ticket.clone())
            .or_insert_with(|| TicketRecord {
                ticket: found.ticket,
                status: String::new(),
                services: BTreeSet::new(),
                occurrences: 0,
            });
        record.services.insert(service);
        record.status = found.status;
        record.occurrences += 1;
        self.total_references += 1;
    }

    /// Number of distinct tickets.
    pub fn unique_tickets(&self) -> usize {
        self.tickets.len()
    }

    /// Number of rows that referenced any ticket.
    pub fn total_references(&self) -> usize {
        self.total_references
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Look up a ticket by its textual id.
    pub fn get(&self, ticket: &str) -> Option<&TicketRecord> {
        self.tickets.get(&TicketId::parse(ticket)?)
    }

    /// All tickets, ordered by project prefix then numeric suffix.
    pub fn records(&self) -> impl Iterator<Item = &TicketRecord> {
        self.tickets.values()
    }

    /// The `n` most referenced tickets; ties go to the lower ticket id text.
    pub fn most_referenced(&self, n: usize) -> Vec<&TicketRecord> {
        let mut ranked: Vec<&TicketRecord> = self.tickets.values().collect();
        ranked.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.ticket.as_str().cmp(b.ticket.as_str()))
        });
        ranked.truncate(n);
        ranked
    }
}

fn observe(row: &Row, extractor: &dyn TicketExtractor) -> Result<(String, TicketMatch), RowError> {
    let service = non_blank(row, ColumnRole::ServiceName)?;
    let commitment = non_blank(row, ColumnRole::Commitment)?;
    let found = extractor
        .extract(commitment)
        .ok_or_else(|| RowError::NoTicketReference {
            line: row.line,
            text: commitment.to_string(),
        })?;
    Ok((service.to_string(), found))
}

fn non_blank(row: &Row, role: ColumnRole) -> Result<&str, RowError> {
    row.get(role)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(RowError::MissingValue {
            line: row.line,
            column: role,
        })
}
