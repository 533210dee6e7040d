//! Catalog store
//!
//! An immutable, ordered collection of [`Tool`] records. A catalog is built
//! once at startup, either from the built-in definition or from a YAML file,
//! and every record is validated on the way in. Nothing mutates it afterwards.

mod tool;

pub use tool::{DATE_FORMAT, RATING_MAX, RATING_MIN, Tool, parse_date};

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{DashboardError, Result};

/// Built-in catalog definition
const BUILTIN_YAML: &str = include_str!("builtin.yml");

/// Category vocabulary offered by the filter controls.
///
/// Catalogs may use categories outside this list; they still filter and count.
pub const CATEGORY_OPTIONS: &[&str] = &[
    "Design",
    "Prototyping",
    "Automation",
    "LLM",
    "Vision",
    "Multimodal",
    "Code Generation",
    "Productivity",
];

/// YAML file structure
#[derive(Debug, Deserialize)]
struct CatalogFile {
    tools: Vec<Tool>,
}

/// Immutable, ordered tool catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Build a catalog, validating every record and rejecting duplicate names
    pub fn new(tools: Vec<Tool>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tool in &tools {
            tool.validate()?;
            if !seen.insert(tool.name.as_str()) {
                return Err(DashboardError::DuplicateTool(tool.name.clone()));
            }
        }
        Ok(Self { tools })
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_YAML)
    }

    /// Load catalog from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::new(file.tools)
    }

    /// Load catalog from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_yaml(&content)?;
        log::info!(
            "Loaded {} tools from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Load from `path` if given, else the built-in catalog
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let catalog = Self::builtin()?;
                log::debug!("Using built-in catalog ({} tools)", catalog.len());
                Ok(catalog)
            }
        }
    }

    /// All tools in catalog order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Every category used by at least one tool, sorted
    pub fn categories(&self) -> BTreeSet<&str> {
        self.tools
            .iter()
            .flat_map(|t| t.categories.iter().map(String::as_str))
            .collect()
    }

    /// Filter-control vocabulary: the standard options followed by any
    /// extra categories this catalog uses
    pub fn category_options(&self) -> Vec<String> {
        let mut options: Vec<String> = CATEGORY_OPTIONS.iter().map(|c| c.to_string()).collect();
        for category in self.categories() {
            if !CATEGORY_OPTIONS.contains(&category) {
                options.push(category.to_string());
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_YAML: &str = r#"
tools:
  - name: A
    description: First tool
    link: https://a.example
    categories: [LLM]
    rating: 4.8
    users: 100
    pricing: Free
    added: "2024-01-01"
    updated: "2024-02-01"
  - name: B
    description: Second tool
    link: https://b.example
    categories: [Vision, Robotics]
    rating: 4.8
    users: 50
    pricing: Free
    added: "2024-06-01"
    updated: "2024-06-01"
"#;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.tools()[0].name, "Vercel v0");
        assert_eq!(catalog.tools()[11].name, "Replit GhostWriter+");
    }

    #[test]
    fn test_builtin_categories_within_vocabulary() {
        let catalog = Catalog::builtin().unwrap();
        for category in catalog.categories() {
            assert!(CATEGORY_OPTIONS.contains(&category), "unexpected category {}", category);
        }
    }

    #[test]
    fn test_from_yaml_preserves_order() {
        let catalog = Catalog::from_yaml(SAMPLE_YAML).unwrap();
        let names: Vec<&str> = catalog.tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let tools = vec![
            Tool::new("A", "x").with_categories(["LLM"]),
            Tool::new("A", "y").with_categories(["Vision"]),
        ];
        let err = Catalog::new(tools).unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateTool(name) if name == "A"));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let tools = vec![Tool::new("A", "x")];
        assert!(Catalog::new(tools).is_err());
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(matches!(
            Catalog::from_yaml("tools: [{name: A}]"),
            Err(DashboardError::Yaml(_))
        ));
    }

    #[test]
    fn test_category_options_appends_extras() {
        let catalog = Catalog::from_yaml(SAMPLE_YAML).unwrap();
        let options = catalog.category_options();
        assert_eq!(&options[..CATEGORY_OPTIONS.len()], CATEGORY_OPTIONS);
        assert_eq!(options.last().map(String::as_str), Some("Robotics"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.yml");
        std::fs::write(&path, SAMPLE_YAML).unwrap();

        let catalog = Catalog::load(Some(path.as_path())).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_missing_file() {
        let err = Catalog::from_file("/definitely/not/here.yml").unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
