//! Structured ticket identifiers (`<PROJECT>-<NUMBER>`).

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// A ticket identifier such as `ABC-123`.
///
/// Ordering is by project prefix, then by the numeric value of the suffix, so
/// `ABC-9` sorts before `ABC-10`. Suffixes are compared as digit strings and
/// never overflow. Identifiers that are numerically equal (`ABC-7`, `ABC-07`)
/// fall back to their raw text. Any Unicode decimal digits are accepted in
/// the suffix; digits of one script order numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketId {
    raw: String,
    hyphen: usize,
}

impl TicketId {
    /// Parse `text` as exactly `[A-Z]+-\d+`.
    pub fn parse(text: &str) -> Option<Self> {
        let (project, number) = text.split_once('-')?;
        if project.is_empty() || !project.bytes().all(|b| b.is_ascii_uppercase()) {
            return None;
        }
        if number.is_empty() || !number.chars().all(char::is_numeric) {
            return None;
        }
        Some(Self {
            raw: text.to_string(),
            hyphen: project.len(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Project prefix, e.g. `ABC`.
    pub fn project(&self) -> &str {
        &self.raw[..self.hyphen]
    }

    /// Numeric suffix as written, e.g. `0123`.
    pub fn number(&self) -> &str {
        &self.raw[self.hyphen + 1..]
    }

    fn significant_digits(&self) -> &str {
        let digits = self.number().trim_start_matches('0');
        if digits.is_empty() {
            "0"
        } else {
            digits
        }
    }
}

impl Ord for TicketId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant_digits(), other.significant_digits());
        self.project()
            .cmp(other.project())
            .then_with(|| a.chars().count().cmp(&b.chars().count()))
            .then_with(|| a.cmp(b))
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for TicketId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for TicketId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TicketId {
        TicketId::parse(s).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let t = id("NETOPS-0042");
        assert_eq!(t.project(), "NETOPS");
        assert_eq!(t.number(), "0042");
        assert_eq!(t.to_string(), "NETOPS-0042");
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for bad in ["abc-1", "ABC-", "-12", "ABC12", "ABC-1a", "AB C-1", "ABC-1-2", ""] {
            assert!(TicketId::parse(bad).is_none(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_ordering_numeric_suffix() {
        let mut ids = vec![id("B-1"), id("A-10"), id("A-2")];
        ids.sort();
        let order: Vec<&str> = ids.iter().map(TicketId::as_str).collect();
        assert_eq!(order, vec!["A-2", "A-10", "B-1"]);
    }

    #[test]
    fn test_ordering_large_and_padded_numbers() {
        assert!(id("A-99999999999999999999999") < id("A-100000000000000000000000"));
        assert!(id("A-9") < id("A-010"));
        assert!(id("A-07") < id("A-7"));
        assert!(id("A-0") < id("A-1"));
    }

    #[test]
    fn test_non_ascii_digits() {
        let t = id("NET-٤٢");
        assert_eq!(t.number(), "٤٢");
        assert!(id("NET-٩") < id("NET-١٠"));
    }

    #[test]
    fn test_ordering_prefix_first() {
        assert!(id("AB-100") < id("ABC-1"));
        assert!(id("Z-1") > id("Y-999"));
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&id("ABC-9")).unwrap();
        assert_eq!(json, "\"ABC-9\"");
    }
}
