//! Category histogram
//!
//! Counts category occurrences across the full catalog. A tool with three
//! categories lands in three buckets. Categories no tool uses never appear.

use std::collections::HashMap;

use crate::catalog::Tool;

/// Category name to tool count; key order is unspecified
pub type Histogram = HashMap<String, usize>;

/// Count every category entry of every tool
pub fn histogram(tools: &[Tool]) -> Histogram {
    let mut counts = Histogram::new();
    for category in tools.iter().flat_map(|t| &t.categories) {
        *counts.entry(category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Buckets ordered for display: highest count first, then by name
pub fn ranked(histogram: &Histogram) -> Vec<(&str, usize)> {
    let mut buckets: Vec<(&str, usize)> = histogram.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    buckets
}
