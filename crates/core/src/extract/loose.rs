//! Permissive extraction: first ticket-shaped token, then the next word.

use once_cell::sync::Lazy;
use regex::Regex;

use super::traits::{TicketExtractor, TicketMatch};
use super::TicketId;

static LOOSE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+-\d+).*?(\w+)").unwrap());

/// Heuristic extractor used by default.
///
/// Takes the first `[A-Z]+-\d+` token and the first word after it on the same
/// line. Word and digit classes are Unicode-aware, so accented statuses such
/// as `Terminé` come through whole. The match is intentionally loose: a ticket with nothing after it gives
/// up its last digit as the status (`ABC-1234` reads as `ABC-123` / `4`), and
/// any word following the ticket counts as a status.
#[derive(Debug, Default, Clone, Copy)]
pub struct LooseExtractor;

impl LooseExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TicketExtractor for LooseExtractor {
    fn name(&self) -> &str {
        "loose"
    }

    fn extract(&self, text: &str) -> Option<TicketMatch> {
        if text.trim().is_empty() {
            return None;
        }
        let caps = LOOSE_PATTERN.captures(text)?;
        Some(TicketMatch {
            ticket: TicketId::parse(caps.get(1)?.as_str())?,
            status: caps.get(2)?.as_str().to_string(),
        })
    }
}
