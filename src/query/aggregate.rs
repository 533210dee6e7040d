//! Summary metrics over a filtered result

use serde::Serialize;

use crate::catalog::Tool;

/// Count, mean rating and combined users of a result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    /// Mean rating, `0.0` for an empty set
    pub avg_rating: f64,
    pub total_users: u64,
}

/// Summarize `tools`. Total over the empty set.
pub fn aggregate(tools: &[&Tool]) -> Summary {
    if tools.is_empty() {
        return Summary::default();
    }

    let rating_sum: f64 = tools.iter().map(|t| t.rating).sum();
    Summary {
        count: tools.len(),
        avg_rating: rating_sum / tools.len() as f64,
        total_users: tools.iter().map(|t| t.users).sum(),
    }
}
