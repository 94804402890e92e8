use serde::Serialize;
use tracing::{info, warn};

use super::format::{is_done, render_status_report, render_ticket_report};
use super::{OutputFormat, ReportError};
use crate::aggregate::{StatusDistribution, TicketRecord, TicketRollup};
use crate::config::{Config, StatusReportConfig, TicketReportConfig};
use crate::extract::create_extractor;
use crate::table::{load_table, ColumnRole, ColumnSpec, Schema};

/// Columns read by the ticket report; the service column is the key.
pub fn ticket_schema(config: &TicketReportConfig) -> Schema {
    Schema::new(ColumnSpec::new(
        ColumnRole::ServiceName,
        &config.service_column,
    ))
    .with_column(ColumnSpec::new(
        ColumnRole::Commitment,
        &config.commitment_column,
    ))
}

/// Columns read by the status report; the status column is the key.
pub fn status_schema(config: &StatusReportConfig) -> Schema {
    Schema::new(ColumnSpec::new(ColumnRole::Status, &config.status_column))
}

/// Build the ticket rollup report for `config.tickets.input`.
pub fn run_ticket_report(config: &Config) -> Result<String, ReportError> {
    let tickets = &config.tickets;
    let extractor = create_extractor(tickets.extractor);
    info!(
        "Building ticket report from {:?} (extractor: {})",
        tickets.input.path,
        extractor.name()
    );

    let table = load_table(&tickets.input, &ticket_schema(tickets))?;
    let rollup = TicketRollup::from_rows(&table.rows, extractor.as_ref());

    if rollup.skipped_rows() > 0 {
        warn!(
            "{} of {} rows had no usable ticket reference",
            rollup.skipped_rows(),
            table.len()
        );
    }
    info!(
        "Found {} unique tickets across {} references",
        rollup.unique_tickets(),
        rollup.total_references()
    );

    match config.output.format {
        OutputFormat::Text => Ok(render_ticket_report(&rollup, tickets)),
        OutputFormat::Json => ticket_report_json(&rollup, tickets),
    }
}

/// Build the status distribution report for `config.status.input`.
pub fn run_status_report(config: &Config) -> Result<String, ReportError> {
    let status = &config.status;
    info!("Building status report from {:?}", status.input.path);

    let table = load_table(&status.input, &status_schema(status))?;
    let distribution = StatusDistribution::from_rows(&table.rows, &status.missing_label);
    info!(
        "Tallied {} rows into {} status buckets",
        distribution.total,
        distribution.buckets.len()
    );

    match config.output.format {
        OutputFormat::Text => Ok(render_status_report(&distribution)),
        OutputFormat::Json => status_report_json(&distribution),
    }
}

/// A ticket as emitted in JSON output.
#[derive(Debug, Serialize)]
pub struct TicketLine<'a> {
    #[serde(flatten)]
    pub record: &'a TicketRecord,
    pub done: bool,
}

/// Machine-readable form of the ticket report.
#[derive(Debug, Serialize)]
pub struct TicketSummary<'a> {
    pub unique_tickets: usize,
    pub total_references: usize,
    pub skipped_rows: usize,
    pub tickets: Vec<TicketLine<'a>>,
    pub most_referenced: Vec<TicketLine<'a>>,
}

impl<'a> TicketSummary<'a> {
    pub fn new(rollup: &'a TicketRollup, config: &TicketReportConfig) -> Self {
        let line = |record: &'a TicketRecord| TicketLine {
            record,
            done: is_done(&record.status, &config.done_statuses),
        };
        Self {
            unique_tickets: rollup.unique_tickets(),
            total_references: rollup.total_references(),
            skipped_rows: rollup.skipped_rows(),
            tickets: rollup.records().map(line).collect(),
            most_referenced: rollup
                .most_referenced(config.top_n)
                .into_iter()
                .map(line)
                .collect(),
        }
    }
}

pub fn ticket_report_json(
    rollup: &TicketRollup,
    config: &TicketReportConfig,
) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&TicketSummary::new(
        rollup, config,
    ))?)
}

pub fn status_report_json(distribution: &StatusDistribution) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(distribution)?)
}
