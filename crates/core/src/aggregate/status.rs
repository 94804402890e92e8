//! Column-centric status distribution.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::table::{ColumnRole, Row};

/// One status bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusTally {
    pub label: String,
    pub count: usize,
    /// Share of all rows, in percent (unrounded).
    pub percentage: f64,
}

/// Row counts per status value, ordered by label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusDistribution {
    pub buckets: Vec<StatusTally>,
    pub total: usize,
}

impl StatusDistribution {
    /// Tally the status column of every row.
    ///
    /// Values are trimmed; null or blank values are counted under
    /// `missing_label`. Every row lands in exactly one bucket.
    pub fn from_rows<'a, I>(rows: I, missing_label: &str) -> Self
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut total = 0;

        for row in rows {
            let label = row
                .get(ColumnRole::Status)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(missing_label);
            *counts.entry(label.to_string()).or_default() += 1;
            total += 1;
        }

        let buckets = counts
            .into_iter()
            .map(|(label, count)| StatusTally {
                percentage: count as f64 / total as f64 * 100.0,
                label,
                count,
            })
            .collect::<Vec<_>>();

        debug!("Status distribution: {} buckets over {} rows", buckets.len(), total);
        Self { buckets, total }
    }

    pub fn get(&self, label: &str) -> Option<&StatusTally> {
        self.buckets.iter().find(|b| b.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[Option<&str>]) -> Vec<Row> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                Row::new(
                    i as u64 + 2,
                    vec![(ColumnRole::Status, v.map(str::to_string))],
                )
            })
            .collect()
    }

    fn ten_rows() -> Vec<Row> {
        rows(&[
            Some("COMPLETED"),
            Some("COMPLETED"),
            Some("COMPLETED"),
            Some("IN PROGRESS"),
            Some("IN PROGRESS"),
            Some("OPEN"),
            Some("BLOCKED"),
            None,
            Some("  "),
            Some(" NOT APPLICABLE "),
        ])
    }

    #[test]
    fn test_counts_sum_to_total() {
        let dist = StatusDistribution::from_rows(&ten_rows(), "Not Specified");
        assert_eq!(dist.total, 10);
        assert_eq!(dist.buckets.iter().map(|b| b.count).sum::<usize>(), 10);
    }

    #[test]
    fn test_missing_and_blank_use_label() {
        let dist = StatusDistribution::from_rows(&ten_rows(), "Not Specified");
        assert_eq!(dist.get("Not Specified").unwrap().count, 2);
        assert_eq!(dist.get("NOT APPLICABLE").unwrap().count, 1);
    }

    #[test]
    fn test_buckets_sorted_by_label() {
        let dist = StatusDistribution::from_rows(&ten_rows(), "Not Specified");
        let labels: Vec<&str> = dist.buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "BLOCKED",
                "COMPLETED",
                "IN PROGRESS",
                "NOT APPLICABLE",
                "Not Specified",
                "OPEN"
            ]
        );
    }

    #[test]
    fn test_percentages() {
        let dist = StatusDistribution::from_rows(&ten_rows(), "Not Specified");
        for bucket in &dist.buckets {
            let expected = bucket.count as f64 / 10.0 * 100.0;
            assert!((bucket.percentage - expected).abs() < 1e-9);
        }
        let sum: f64 = dist
            .buckets
            .iter()
            .map(|b| format!("{:.1}", b.percentage).parse::<f64>().unwrap())
            .sum();
        assert!((sum - 100.0).abs() <= 0.1 + 1e-9);
        assert_eq!(format!("{:.1}", dist.get("COMPLETED").unwrap().percentage), "30.0");
    }

    #[test]
    fn test_empty_rows() {
        let none: Vec<Row> = Vec::new();
        let dist = StatusDistribution::from_rows(&none, "Not Specified");
        assert_eq!(dist.total, 0);
        assert!(dist.buckets.is_empty());
    }
}
