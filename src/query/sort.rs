//! Result ordering
//!
//! All orderings use `sort_by`, which is stable: tools with equal keys keep
//! the order the filter produced.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Tool;

/// Sort orders offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Most users first
    Popularity,
    /// Highest rating first
    Rating,
    /// Ascending name, case-sensitive
    Name,
    /// Newest `added` date first
    RecentlyAdded,
}

impl SortKey {
    /// All keys in menu order
    pub const ALL: [SortKey; 4] = [Self::Popularity, Self::Rating, Self::Name, Self::RecentlyAdded];

    /// Parse a sort label ("Recently Added", "recently-added", "rating", ...)
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "popularity" => Some(Self::Popularity),
            "rating" => Some(Self::Rating),
            "name" => Some(Self::Name),
            "recentlyadded" => Some(Self::RecentlyAdded),
            _ => None,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Popularity => "Popularity",
            Self::Rating => "Rating",
            Self::Name => "Name",
            Self::RecentlyAdded => "Recently Added",
        }
    }

    /// Cycle to the next key
    pub fn next(self) -> Self {
        match self {
            Self::Popularity => Self::Rating,
            Self::Rating => Self::Name,
            Self::Name => Self::RecentlyAdded,
            Self::RecentlyAdded => Self::Popularity,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Order `tools` by `key`. `None` returns the input unchanged.
pub fn sort(mut tools: Vec<&Tool>, key: Option<SortKey>) -> Vec<&Tool> {
    match key {
        Some(SortKey::Popularity) => tools.sort_by(|a, b| b.users.cmp(&a.users)),
        Some(SortKey::Rating) => tools.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        Some(SortKey::Name) => tools.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(SortKey::RecentlyAdded) => tools.sort_by(|a, b| b.added.cmp(&a.added)),
        None => {}
    }
    tools
}
