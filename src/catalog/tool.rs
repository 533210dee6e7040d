//! Tool records
//!
//! A `Tool` is one immutable catalog entry. Dates are kept as `NaiveDate` and
//! only accepted in strict `YYYY-MM-DD` form, so chronological and
//! lexicographic ordering agree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Lowest rating a tool may carry
pub const RATING_MIN: f64 = 1.0;

/// Highest rating a tool may carry
pub const RATING_MAX: f64 = 5.0;

/// Date format used throughout the catalog
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single AI tool in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Display name, unique within a catalog
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Homepage URL (not validated)
    pub link: String,
    /// Categories in display order
    #[serde(alias = "category")]
    pub categories: Vec<String>,
    /// Logo image URL
    #[serde(alias = "logo", default)]
    pub logo_url: String,
    /// Community rating in [1.0, 5.0]
    pub rating: f64,
    /// User count, a popularity proxy
    pub users: u64,
    /// Pricing label, e.g. "Freemium"
    pub pricing: String,
    /// Date the tool entered the catalog
    #[serde(with = "iso_date")]
    pub added: NaiveDate,
    /// Date of the last revision
    #[serde(with = "iso_date")]
    pub updated: NaiveDate,
}

impl Tool {
    /// Create a tool with placeholder metadata.
    ///
    /// Mostly useful for building fixtures; real catalogs come from YAML.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let epoch = NaiveDate::default();
        Self {
            name: name.into(),
            description: description.into(),
            link: String::new(),
            categories: Vec::new(),
            logo_url: String::new(),
            rating: RATING_MIN,
            users: 0,
            pricing: String::new(),
            added: epoch,
            updated: epoch,
        }
    }

    /// Set categories
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set user count
    pub fn with_users(mut self, users: u64) -> Self {
        self.users = users;
        self
    }

    /// Set pricing label
    pub fn with_pricing(mut self, pricing: impl Into<String>) -> Self {
        self.pricing = pricing.into();
        self
    }

    /// Set link and logo URLs
    pub fn with_urls(mut self, link: impl Into<String>, logo_url: impl Into<String>) -> Self {
        self.link = link.into();
        self.logo_url = logo_url.into();
        self
    }

    /// Set added date; `updated` follows it unless already later
    pub fn with_added(mut self, added: NaiveDate) -> Self {
        self.added = added;
        if self.updated < added {
            self.updated = added;
        }
        self
    }

    /// Set updated date
    pub fn with_updated(mut self, updated: NaiveDate) -> Self {
        self.updated = updated;
        self
    }

    /// Whether any of this tool's categories equals `category`
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Check the record against catalog rules.
    ///
    /// `updated < added` is tolerated and only logged.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DashboardError::invalid_tool(&self.name, "name is empty"));
        }
        if self.categories.is_empty() {
            return Err(DashboardError::invalid_tool(&self.name, "no categories"));
        }
        if let Some(blank) = self.categories.iter().find(|c| c.trim().is_empty()) {
            return Err(DashboardError::invalid_tool(
                &self.name,
                format!("blank category '{}'", blank),
            ));
        }
        if !self.rating.is_finite() || self.rating < RATING_MIN || self.rating > RATING_MAX {
            return Err(DashboardError::invalid_tool(
                &self.name,
                format!("rating {} outside [{:.1}, {:.1}]", self.rating, RATING_MIN, RATING_MAX),
            ));
        }
        if self.updated < self.added {
            log::warn!(
                "Tool '{}' updated ({}) before it was added ({})",
                self.name,
                self.updated,
                self.added
            );
        }
        Ok(())
    }
}

/// Parse a date in strict `YYYY-MM-DD` form.
///
/// chrono alone accepts unpadded fields like `2024-1-5`; those are rejected
/// here so every stored date has the same width.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(DashboardError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DashboardError::InvalidDate(s.to_string()))
}

/// Serde adapter for strict ISO-8601 calendar dates
mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(super::DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(D::Error::custom)
    }
}
