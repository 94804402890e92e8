//! Traits for ticket extraction strategies.

use serde::Serialize;

use super::TicketId;

/// A ticket reference and the status token found with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketMatch {
    pub ticket: TicketId,
    pub status: String,
}

/// Trait for pulling a ticket reference out of a free-text cell.
///
/// Implementations decide how strict the grammar is. Aggregation only sees
/// the resulting `TicketMatch`, so strategies can be swapped freely.
pub trait TicketExtractor: Send + Sync {
    /// Name of this extractor for logging.
    fn name(&self) -> &str;

    /// Find the first ticket reference and its status in `text`.
    ///
    /// Returns `None` for blank text or when nothing matches.
    fn extract(&self, text: &str) -> Option<TicketMatch>;
}
