//! Text rendering of report snapshots.

use crate::aggregate::{StatusDistribution, TicketRollup};
use crate::config::TicketReportConfig;

const DONE_MARKER: &str = "✅";
const OPEN_MARKER: &str = "🔄";

/// Whether `status` counts as finished, compared case-insensitively.
pub fn is_done(status: &str, done_statuses: &[String]) -> bool {
    let status = status.to_uppercase();
    done_statuses.iter().any(|d| d.to_uppercase() == status)
}

/// Render the ticket rollup as a chat-friendly text block.
pub fn render_ticket_report(rollup: &TicketRollup, config: &TicketReportConfig) -> String {
    let mut report: Vec<String> = Vec::new();
    report.push("📊 *Jira Tickets Status Report* 📊\n".to_string());
    report.push(format!("Total Unique Jira Tickets: {}", rollup.unique_tickets()));
    report.push(format!(
        "Total Ticket References: {}\n",
        rollup.total_references()
    ));

    report.push("*Detailed Ticket Mapping*".to_string());
    report.push("Format: JIRA-TICKET | STATUS | SERVICES".to_string());
    report.push("-".repeat(50));

    for record in rollup.records() {
        let marker = if is_done(&record.status, &config.done_statuses) {
            DONE_MARKER
        } else {
            OPEN_MARKER
        };
        report.push(format!(
            "{} {} | {} | {}",
            marker,
            record.ticket,
            record.status,
            record.services_joined()
        ));
    }

    report.push("\n*Summary of Most Referenced Tickets:*".to_string());
    for record in rollup.most_referenced(config.top_n) {
        report.push(format!(
            "• {} ({}) - Referenced {} times",
            record.ticket, record.status, record.occurrences
        ));
        report.push(format!("  Services: {}", record.services_joined()));
    }

    report.join("\n")
}

/// Render the status distribution: counts, then percentages, then the total.
pub fn render_status_report(distribution: &StatusDistribution) -> String {
    let mut out = String::new();

    out.push_str("\nStatus of Re-deployment Counts:\n");
    out.push_str("===============================\n");
    for bucket in &distribution.buckets {
        out.push_str(&format!("{}: {}\n", bucket.label, bucket.count));
    }

    out.push_str("\nStatus of Re-deployment Percentages:\n");
    out.push_str("===================================\n");
    for bucket in &distribution.buckets {
        out.push_str(&format!("{}: {:.1}%\n", bucket.label, bucket.percentage));
    }

    out.push_str(&format!("\nTotal number of items: {}", distribution.total));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::LooseExtractor;
    use crate::table::{ColumnRole, Row};

    fn ticket_rows(entries: &[(&str, &str)]) -> Vec<Row> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (service, commitment))| {
                Row::new(
                    i as u64 + 2,
                    vec![
                        (ColumnRole::ServiceName, Some(service.to_string())),
                        (ColumnRole::Commitment, Some(commitment.to_string())),
                    ],
                )
            })
            .collect()
    }

    fn status_rows(values: &[Option<&str>]) -> Vec<Row> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Row::new(i as u64 + 2, vec![(ColumnRole::Status, v.map(str::to_string))]))
            .collect()
    }

    #[test]
    fn test_is_done_case_insensitive() {
        let done = TicketReportConfig::default().done_statuses;
        assert!(is_done("Done", &done));
        assert!(is_done("resolved", &done));
        assert!(!is_done("OPEN", &done));
        assert!(!is_done("In", &done));
    }

    #[test]
    fn test_render_ticket_report() {
        let rows = ticket_rows(&[
            ("search", "NET-10 Open"),
            ("billing", "NET-2 OPEN"),
            ("search", "NET-2 Done"),
            ("auth", "OPS-1 blocked"),
        ]);
        let rollup = TicketRollup::from_rows(&rows, &LooseExtractor::new());
        let text = render_ticket_report(&rollup, &TicketReportConfig::default());

        let expected = "\
📊 *Jira Tickets Status Report* 📊

Total Unique Jira Tickets: 3
Total Ticket References: 4

*Detailed Ticket Mapping*
Format: JIRA-TICKET | STATUS | SERVICES
--------------------------------------------------
✅ NET-2 | Done | billing, search
🔄 NET-10 | Open | search
🔄 OPS-1 | blocked | auth

*Summary of Most Referenced Tickets:*
• NET-2 (Done) - Referenced 2 times
  Services: billing, search
• NET-10 (Open) - Referenced 1 times
  Services: search
• OPS-1 (blocked) - Referenced 1 times
  Services: auth";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_ticket_report_respects_top_n() {
        let rows = ticket_rows(&[
            ("a", "A-1 OPEN"),
            ("a", "A-2 OPEN"),
            ("a", "A-3 OPEN"),
        ]);
        let rollup = TicketRollup::from_rows(&rows, &LooseExtractor::new());
        let config = TicketReportConfig {
            top_n: 2,
            ..Default::default()
        };
        let text = render_ticket_report(&rollup, &config);
        assert_eq!(text.matches("Referenced 1 times").count(), 2);
        assert!(!text.contains("• A-3"));
    }

    #[test]
    fn test_render_empty_ticket_report() {
        let rows: Vec<Row> = Vec::new();
        let rollup = TicketRollup::from_rows(&rows, &LooseExtractor::new());
        let text = render_ticket_report(&rollup, &TicketReportConfig::default());
        assert!(text.contains("Total Unique Jira Tickets: 0"));
        assert!(text.ends_with("*Summary of Most Referenced Tickets:*"));
    }

    #[test]
    fn test_render_status_report() {
        let rows = status_rows(&[Some("OPEN"), Some("COMPLETED"), None]);
        let dist = StatusDistribution::from_rows(&rows, "Not Specified");
        let text = render_status_report(&dist);

        let expected = "
Status of Re-deployment Counts:
===============================
COMPLETED: 1
Not Specified: 1
OPEN: 1

Status of Re-deployment Percentages:
===================================
COMPLETED: 33.3%
Not Specified: 33.3%
OPEN: 33.3%

Total number of items: 3";
        assert_eq!(text, expected);
    }
}
