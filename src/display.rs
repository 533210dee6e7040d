//! Presentation helpers shared by the CLI and the TUI.
//!
//! The view mode only changes how results are laid out, never which results
//! there are.

use serde::{Deserialize, Serialize};

use crate::catalog::{DATE_FORMAT, Tool};
use crate::query::Summary;

/// Characters of description shown in compact view
pub const COMPACT_DESCRIPTION_CHARS: usize = 100;

/// Column headers for table view
pub const TABLE_HEADERS: [&str; 5] = ["Name", "Rating", "Users", "Pricing", "Last Updated"];

pub const ABOUT: &str = "This dashboard tracks the latest AI tools, frameworks, and models with \
                         real-time metrics and ratings. Updated daily.";

/// (title, url) pairs listed under Resources
pub const RESOURCES: [(&str, &str); 3] = [
    ("AI Tools Directory", "https://github.com/ai-tools"),
    ("ML Papers Digest", "https://paperswithcode.com"),
    ("AI Newsletter", "https://newsletter.ai"),
];

pub const DISCLAIMER: &str = "Disclaimer: This dashboard is for informational purposes only. Tool ratings \
                              and metrics are based on community feedback and public data.";

/// Shown instead of a result list when nothing matches
pub const NO_MATCHES: &str = "No tools match your filters. Try adjusting your criteria.";

/// How a result list is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ViewMode {
    /// Rich cards, three per row
    #[default]
    Cards,
    /// One row per tool
    Table,
    /// Two-line summaries
    Compact,
}

impl ViewMode {
    /// Cycle to the next mode
    pub fn next(self) -> Self {
        match self {
            Self::Cards => Self::Table,
            Self::Table => Self::Compact,
            Self::Compact => Self::Cards,
        }
    }

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            Self::Cards => "Cards",
            Self::Table => "Table",
            Self::Compact => "Compact",
        }
    }
}

/// Format an integer with thousands separators: `238500` -> `238,500`
pub fn format_users(users: u64) -> String {
    let digits = users.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rating with one decimal and a star: `4.8 ⭐`
pub fn format_rating(rating: f64) -> String {
    format!("{:.1} ⭐", rating)
}

/// One star per whole rating point
pub fn star_bar(rating: f64) -> String {
    "⭐".repeat(rating.max(0.0).floor() as usize)
}

/// Description cut to the compact length, always followed by `...`
pub fn compact_description(description: &str) -> String {
    let head: String = description.chars().take(COMPACT_DESCRIPTION_CHARS).collect();
    format!("{}...", head)
}

/// Cells for one table row, matching [`TABLE_HEADERS`]
pub fn table_row(tool: &Tool) -> [String; 5] {
    [
        tool.name.clone(),
        format_rating(tool.rating),
        format_users(tool.users),
        tool.pricing.clone(),
        tool.updated.format(DATE_FORMAT).to_string(),
    ]
}

/// Headline line for compact view: `name - 4.8⭐ - pricing`
pub fn compact_headline(tool: &Tool) -> String {
    format!("{} - {:.1}⭐ - {}", tool.name, tool.rating, tool.pricing)
}

/// Detail line for compact view
pub fn compact_detail(tool: &Tool) -> String {
    format!("{} - {}", compact_description(&tool.description), tool.categories.join(", "))
}

/// The four overview metrics as (label, value) pairs
pub fn overview_metrics(total_tools: usize, summary: &Summary) -> [(&'static str, String); 4] {
    [
        ("Total Tools", total_tools.to_string()),
        ("Filtered Tools", summary.count.to_string()),
        ("Average Rating", format!("{:.1} ⭐", summary.avg_rating)),
        ("Combined Users", format_users(summary.total_users)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_date;

    #[test]
    fn test_format_users() {
        assert_eq!(format_users(0), "0");
        assert_eq!(format_users(999), "999");
        assert_eq!(format_users(1_000), "1,000");
        assert_eq!(format_users(238_500), "238,500");
        assert_eq!(format_users(1_234_567), "1,234,567");
    }

    #[test]
    fn test_star_bar() {
        assert_eq!(star_bar(4.8), "⭐⭐⭐⭐");
        assert_eq!(star_bar(1.0), "⭐");
        assert_eq!(star_bar(5.0).chars().count(), 5);
    }

    #[test]
    fn test_compact_description_truncates() {
        let long = "x".repeat(150);
        let short = compact_description(&long);
        assert_eq!(short.chars().count(), COMPACT_DESCRIPTION_CHARS + 3);
        assert!(short.ends_with("..."));

        assert_eq!(compact_description("tiny"), "tiny...");
    }

    #[test]
    fn test_compact_description_respects_char_boundaries() {
        let text = "é".repeat(120);
        let short = compact_description(&text);
        assert_eq!(short.chars().filter(|c| *c == 'é').count(), COMPACT_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_table_row() {
        let tool = Tool::new("Vercel v0", "x")
            .with_rating(4.8)
            .with_users(238_500)
            .with_pricing("Freemium")
            .with_added(parse_date("2024-09-15").unwrap())
            .with_updated(parse_date("2025-04-22").unwrap());
        let row = table_row(&tool);
        assert_eq!(row, ["Vercel v0", "4.8 ⭐", "238,500", "Freemium", "2025-04-22"].map(String::from));
    }

    #[test]
    fn test_compact_lines() {
        let tool = Tool::new("Devflow", "No-code platform")
            .with_categories(["Automation", "Productivity"])
            .with_rating(4.0)
            .with_pricing("Free/Team");
        assert_eq!(compact_headline(&tool), "Devflow - 4.0⭐ - Free/Team");
        assert_eq!(compact_detail(&tool), "No-code platform... - Automation, Productivity");
    }

    #[test]
    fn test_overview_metrics_empty() {
        let metrics = overview_metrics(12, &Summary::default());
        assert_eq!(metrics[0].1, "12");
        assert_eq!(metrics[1].1, "0");
        assert_eq!(metrics[2].1, "0.0 ⭐");
        assert_eq!(metrics[3].1, "0");
    }

    #[test]
    fn test_view_mode_cycle() {
        assert_eq!(ViewMode::default(), ViewMode::Cards);
        assert_eq!(ViewMode::Cards.next(), ViewMode::Table);
        assert_eq!(ViewMode::Table.next(), ViewMode::Compact);
        assert_eq!(ViewMode::Compact.next(), ViewMode::Cards);
    }
}
