//! Ticket reference extraction from free-text commitment cells.
//!
//! - `LooseExtractor`: the default heuristic, first ticket-shaped token and the
//!   next word after it
//! - `StrictExtractor`: opt-in grammar that only accepts a whole ticket token
//!   followed by an alphabetic status
//!
//! Both sit behind the `TicketExtractor` trait; `create_extractor` picks one
//! from configuration.

mod loose;
mod strict;
mod ticket_id;
mod traits;

pub use loose::LooseExtractor;
pub use strict::StrictExtractor;
pub use ticket_id::TicketId;
pub use traits::{TicketExtractor, TicketMatch};

use serde::{Deserialize, Serialize};

/// Available extraction strategies
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    #[default]
    Loose,
    Strict,
}

/// Build the extractor selected by `kind`.
pub fn create_extractor(kind: ExtractorKind) -> Box<dyn TicketExtractor> {
    match kind {
        ExtractorKind::Loose => Box::new(LooseExtractor::new()),
        ExtractorKind::Strict => Box::new(StrictExtractor::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_extractor() {
        assert_eq!(create_extractor(ExtractorKind::Loose).name(), "loose");
        assert_eq!(create_extractor(ExtractorKind::Strict).name(), "strict");
    }
}
