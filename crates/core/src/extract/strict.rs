//! Stricter extraction grammar for cleaner exports.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::traits::{TicketExtractor, TicketMatch};
use super::TicketId;

static STRICT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z]+-\d+)\b[^A-Za-z0-9]+([A-Za-z]+)\b").unwrap());

/// Extractor requiring a whole ticket token followed by an alphabetic status.
///
/// The ticket must stand on word boundaries and only punctuation or whitespace
/// may separate it from the status word. Digits are never taken as a status.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictExtractor;

impl StrictExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TicketExtractor for StrictExtractor {
    fn name(&self) -> &str {
        "strict"
    }

    fn extract(&self, text: &str) -> Option<TicketMatch> {
        if text.trim().is_empty() {
            return None;
        }
        let caps = STRICT_PATTERN.captures(text)?;
        Some(TicketMatch {
            ticket: TicketId::parse(caps.get(1)?.as_str())?,
            status: caps.get(2)?.as_str().to_string(),
        })
    }
}
