//! Ticket rollup: each referenced ticket with its services and latest status.

use deploytally_core::run_ticket_report;

fn main() {
    deploytally_cli::run_report("ticket report", run_ticket_report);
}
