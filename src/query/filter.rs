//! Catalog filtering
//!
//! Three predicate groups combined with AND: search text, categories (OR
//! within the group) and minimum rating. Output keeps catalog order.

use super::Query;
use crate::catalog::Tool;

/// Tools passing every predicate of `query`, in input order
pub fn filter<'a>(tools: &'a [Tool], query: &Query) -> Vec<&'a Tool> {
    let needle = query.search_text.to_lowercase();
    tools
        .iter()
        .filter(|tool| passes(tool, &needle, query))
        .collect()
}

/// `needle` is `query.search_text`, lowercased once per filter call
fn passes(tool: &Tool, needle: &str, query: &Query) -> bool {
    text_matches(tool, needle) && category_matches(tool, query) && tool.rating >= query.min_rating
}

/// `needle` must already be lowercased
fn text_matches(tool: &Tool, needle: &str) -> bool {
    needle.is_empty()
        || tool.name.to_lowercase().contains(needle)
        || tool.description.to_lowercase().contains(needle)
}

fn category_matches(tool: &Tool, query: &Query) -> bool {
    query.categories.is_empty() || query.categories.iter().any(|c| tool.has_category(c))
}
