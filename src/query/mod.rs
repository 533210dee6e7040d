//! Query engine
//!
//! A pure pipeline over the catalog: [`filter`] then [`sort`] then
//! [`aggregate`]. The category [`histogram`] is always taken over the whole
//! catalog and ignores the query.
//!
//! Nothing here reads ambient state; callers build a [`Query`] from their own
//! inputs (CLI flags, TUI controls) and pass it in.

mod aggregate;
mod filter;
mod histogram;
mod sort;

pub use aggregate::{Summary, aggregate};
pub use filter::filter;
pub use histogram::{Histogram, histogram, ranked};
pub use sort::{SortKey, sort};

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::{Catalog, RATING_MAX, RATING_MIN, Tool};

/// Default minimum rating for a fresh query
pub const DEFAULT_MIN_RATING: f64 = 3.5;

/// Increment used by rating controls
pub const RATING_STEP: f64 = 0.1;

/// User-selected filter and sort parameters for one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Case-insensitive substring matched against name and description
    pub search_text: String,
    /// Accepted categories; empty accepts all
    pub categories: BTreeSet<String>,
    /// Inclusive rating threshold
    pub min_rating: f64,
    /// Sort order; `None` keeps catalog order
    pub sort_key: Option<SortKey>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            categories: BTreeSet::new(),
            min_rating: DEFAULT_MIN_RATING,
            sort_key: Some(SortKey::Popularity),
        }
    }
}

impl Query {
    /// Query that matches every tool in the catalog, keeping catalog order
    pub fn all() -> Self {
        Self {
            min_rating: RATING_MIN,
            sort_key: None,
            ..Self::default()
        }
    }

    /// Set search text
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set accepted categories
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set minimum rating
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Set sort key
    pub fn with_sort(mut self, sort_key: Option<SortKey>) -> Self {
        self.sort_key = sort_key;
        self
    }
}

/// Snap a rating control value onto the 0.1 grid within [1.0, 5.0]
pub fn clamp_rating(value: f64) -> f64 {
    ((value * 10.0).round() / 10.0).clamp(RATING_MIN, RATING_MAX)
}

/// Everything the presentation layer needs for one query
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation<'a> {
    /// Filtered and sorted tools
    pub tools: Vec<&'a Tool>,
    /// Metrics over `tools`
    pub summary: Summary,
    /// Size of the whole catalog
    pub total_tools: usize,
    /// Category counts over the whole catalog
    pub histogram: Histogram,
}

/// Run the full pipeline for `query` against `catalog`
pub fn evaluate<'a>(catalog: &'a Catalog, query: &Query) -> Evaluation<'a> {
    let filtered = filter(catalog.tools(), query);
    let tools = sort(filtered, query.sort_key);
    let summary = aggregate(&tools);
    log::debug!(
        "Evaluated query {:?}: {} of {} tools",
        query,
        summary.count,
        catalog.len()
    );

    Evaluation {
        tools,
        summary,
        total_tools: catalog.len(),
        histogram: histogram(catalog.tools()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_date;

    fn two_tool_catalog() -> Catalog {
        Catalog::new(vec![
            Tool::new("A", "first")
                .with_categories(["LLM"])
                .with_rating(4.8)
                .with_users(100)
                .with_added(parse_date("2024-01-01").unwrap()),
            Tool::new("B", "second")
                .with_categories(["Vision"])
                .with_rating(4.8)
                .with_users(50)
                .with_added(parse_date("2024-06-01").unwrap()),
        ])
        .unwrap()
    }

    fn names(tools: &[&Tool]) -> Vec<String> {
        tools.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_query_default() {
        let query = Query::default();
        assert!(query.search_text.is_empty());
        assert!(query.categories.is_empty());
        assert_eq!(query.min_rating, 3.5);
        assert_eq!(query.sort_key, Some(SortKey::Popularity));
    }

    #[test]
    fn test_evaluate_by_popularity() {
        let catalog = two_tool_catalog();
        let query = Query::default().with_min_rating(1.0);
        let eval = evaluate(&catalog, &query);

        assert_eq!(names(&eval.tools), vec!["A", "B"]);
        assert_eq!(eval.summary.count, 2);
        assert!((eval.summary.avg_rating - 4.8).abs() < 1e-9);
        assert_eq!(eval.summary.total_users, 150);
        assert_eq!(eval.total_tools, 2);
        assert_eq!(eval.histogram.len(), 2);
        assert_eq!(eval.histogram["LLM"], 1);
        assert_eq!(eval.histogram["Vision"], 1);
    }

    #[test]
    fn test_evaluate_excluding_everything() {
        let catalog = two_tool_catalog();
        let query = Query::default().with_min_rating(4.9);
        let eval = evaluate(&catalog, &query);

        assert!(eval.tools.is_empty());
        assert_eq!(eval.summary, Summary::default());
        assert_eq!(eval.histogram["LLM"], 1);
        assert_eq!(eval.histogram["Vision"], 1);
    }

    #[test]
    fn test_clamp_rating() {
        assert_eq!(clamp_rating(3.5 + RATING_STEP), 3.6);
        assert_eq!(clamp_rating(0.2), 1.0);
        assert_eq!(clamp_rating(9.0), 5.0);
        assert_eq!(clamp_rating(4.04), 4.0);
    }

    #[test]
    fn test_evaluation_serializes() {
        let catalog = two_tool_catalog();
        let eval = evaluate(&catalog, &Query::all());
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["summary"]["count"], 2);
        assert_eq!(json["tools"][0]["name"], "A");
    }
}
