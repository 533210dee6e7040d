use colored::*;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::display::ViewMode;
use crate::logo::DEFAULT_TIMEOUT;
use crate::query::{DEFAULT_MIN_RATING, Query, SortKey};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub catalog: CatalogConfig,
    pub defaults: DefaultsConfig,
    pub logos: LogoConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// YAML catalog replacing the built-in one
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub min_rating: f64,
    pub sort: String,
    pub view: ViewMode,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min_rating: DEFAULT_MIN_RATING,
            sort: SortKey::Popularity.label().to_string(),
            view: ViewMode::Cards,
        }
    }
}

impl DefaultsConfig {
    /// Sort key from the configured label; unknown labels keep catalog order
    pub fn sort_key(&self) -> Option<SortKey> {
        let key = SortKey::from_label(&self.sort);
        if key.is_none() {
            log::warn!("Unknown sort '{}' in config, keeping catalog order", self.sort);
        }
        key
    }

    /// Starting query for a new session
    pub fn initial_query(&self) -> Query {
        Query::default()
            .with_min_rating(self.min_rating)
            .with_sort(self.sort_key())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub enabled: bool,
    pub timeout_ms: u64,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            catalog: CatalogConfig::default(),
            defaults: DefaultsConfig::default(),
            logos: LogoConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let (config, skipped) = Self::load_first(&Self::fallback_paths());
        for problem in &skipped {
            log::warn!("{}", problem);
            eprintln!("{} {}", "warning:".yellow(), problem);
        }
        Ok(config)
    }

    /// Fallback locations in lookup order: ~/.config/<project>/<project>.yml, then ./<project>.yml
    fn fallback_paths() -> Vec<PathBuf> {
        let project_name = env!("CARGO_PKG_NAME");
        let file_name = format!("{}.yml", project_name);
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(project_name).join(&file_name));
        }
        paths.push(PathBuf::from(file_name));
        paths
    }

    /// Load the first existing candidate that parses.
    ///
    /// Candidates that exist but fail to load are skipped and described in
    /// the returned list; defaults are used when none loads.
    fn load_first(candidates: &[PathBuf]) -> (Self, Vec<String>) {
        let mut skipped = Vec::new();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return (config, skipped),
                Err(e) => skipped.push(format!("Failed to load config from {}: {:#}", path.display(), e)),
            }
        }

        if skipped.is_empty() {
            log::info!("No config file found, using defaults");
        } else {
            log::info!("No usable config file, using defaults");
        }
        (Self::default(), skipped)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
