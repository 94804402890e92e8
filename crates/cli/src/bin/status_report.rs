//! Re-deployment status distribution: counts and shares per status.

use deploytally_core::run_status_report;

fn main() {
    deploytally_cli::run_report("status report", run_status_report);
}
