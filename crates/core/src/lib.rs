pub mod aggregate;
pub mod config;
pub mod extract;
pub mod report;
pub mod table;
pub mod testing;

pub use aggregate::{RowError, StatusDistribution, StatusTally, TicketRecord, TicketRollup};
pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, Config,
    ConfigError, InputConfig, OutputConfig, StatusReportConfig, TicketReportConfig,
    DEFAULT_CONFIG_FILE,
};
pub use extract::{
    create_extractor, ExtractorKind, LooseExtractor, StrictExtractor, TicketExtractor, TicketId,
    TicketMatch,
};
pub use report::{
    render_status_report, render_ticket_report, run_status_report, run_ticket_report,
    OutputFormat, ReportError,
};
pub use table::{load_table, ColumnRole, ColumnSpec, LoadError, Row, Schema, Table};
