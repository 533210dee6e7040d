//! Application state for the TUI.
//!
//! This module defines the core state types that drive the TUI:
//! - `AppState`: All mutable application state
//! - `View`: Which view is currently active
//! - `InteractionMode`: Current input mode (normal, search, categories, help)
//!
//! The filter controls live here as plain widget state. They only reach the
//! query engine through [`AppState::query`].

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Local};

use super::input::SearchInput;
use crate::catalog::CATEGORY_OPTIONS;
use crate::display::ViewMode;
use crate::logo::LogoStatus;
use crate::query::{Query, RATING_STEP, SortKey, clamp_rating};

/// Timestamp format for the "Last updated" line
const LAST_UPDATED_FORMAT: &str = "%B %d, %Y %H:%M";

/// The primary application state.
#[derive(Debug)]
pub struct AppState {
    // View state
    /// Currently active view
    pub current_view: View,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,

    // Filter controls
    /// Search box
    pub search: SearchInput,
    /// Categories offered in the picker
    pub category_options: Vec<String>,
    /// Categories currently ticked
    pub selected_categories: BTreeSet<String>,
    /// Highlighted row in the category picker
    pub category_cursor: usize,
    /// Minimum rating slider
    pub min_rating: f64,
    /// Sort choice; `None` keeps catalog order
    pub sort_key: Option<SortKey>,
    /// Result layout
    pub view_mode: ViewMode,

    // Navigation
    /// Highlighted tool in the result list
    pub tool_cursor: usize,
    /// Active trending tab
    pub trending_tab: TrendingTab,
    /// Highlighted paper
    pub paper_cursor: usize,
    /// Indices of expanded papers
    pub expanded_papers: BTreeSet<usize>,

    // Logos, keyed by tool name
    pub logos: HashMap<String, LogoStatus>,

    /// When the results were last refreshed
    pub last_refreshed: DateTime<Local>,
    /// One-line status message for the footer
    pub status_message: Option<String>,

    // Control flags
    /// Whether the application should quit
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let options = CATEGORY_OPTIONS.iter().map(|c| c.to_string()).collect();
        Self::new(options, &Query::default(), ViewMode::default())
    }
}

impl AppState {
    /// Create state whose controls start at `initial`
    pub fn new(category_options: Vec<String>, initial: &Query, view_mode: ViewMode) -> Self {
        Self {
            current_view: View::default(),
            interaction_mode: InteractionMode::default(),
            search: SearchInput::with_content(&initial.search_text),
            category_options,
            selected_categories: initial.categories.clone(),
            category_cursor: 0,
            min_rating: clamp_rating(initial.min_rating),
            sort_key: initial.sort_key,
            view_mode,
            tool_cursor: 0,
            trending_tab: TrendingTab::default(),
            paper_cursor: 0,
            expanded_papers: BTreeSet::new(),
            logos: HashMap::new(),
            last_refreshed: Local::now(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Build the query described by the current controls
    pub fn query(&self) -> Query {
        Query {
            search_text: self.search.content().to_string(),
            categories: self.selected_categories.clone(),
            min_rating: self.min_rating,
            sort_key: self.sort_key,
        }
    }

    /// Tick or untick the category under the picker cursor
    pub fn toggle_category_at_cursor(&mut self) {
        let Some(category) = self.category_options.get(self.category_cursor) else {
            return;
        };
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.clone());
        }
        self.tool_cursor = 0;
    }

    /// Move the picker cursor, wrapping at both ends
    pub fn move_category_cursor(&mut self, down: bool) {
        let len = self.category_options.len();
        if len == 0 {
            return;
        }
        self.category_cursor = if down {
            (self.category_cursor + 1) % len
        } else {
            (self.category_cursor + len - 1) % len
        };
    }

    /// Nudge the rating slider by `steps` increments of 0.1
    pub fn adjust_min_rating(&mut self, steps: i32) {
        self.min_rating = clamp_rating(self.min_rating + f64::from(steps) * RATING_STEP);
        self.tool_cursor = 0;
    }

    /// Advance the sort choice
    pub fn cycle_sort(&mut self) {
        self.sort_key = Some(self.sort_key.map_or(SortKey::Popularity, SortKey::next));
        self.tool_cursor = 0;
    }

    /// Advance the result layout
    pub fn cycle_view_mode(&mut self) {
        self.view_mode = self.view_mode.next();
    }

    /// Reset search and categories, keeping rating and sort
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.selected_categories.clear();
        self.tool_cursor = 0;
    }

    /// Show or hide the details of a paper
    pub fn toggle_paper(&mut self, index: usize) {
        if !self.expanded_papers.remove(&index) {
            self.expanded_papers.insert(index);
        }
    }

    /// Logo state for a tool
    pub fn logo_status(&self, tool_name: &str) -> LogoStatus {
        self.logos.get(tool_name).cloned().unwrap_or(LogoStatus::Pending)
    }

    /// Mark results as freshly refreshed
    pub fn mark_refreshed(&mut self) {
        self.last_refreshed = Local::now();
    }

    /// Formatted "Last updated" timestamp
    pub fn last_updated(&self) -> String {
        self.last_refreshed.format(LAST_UPDATED_FORMAT).to_string()
    }
}

/// Which view is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Catalog with filters, metrics and chart
    #[default]
    Tools,
    /// Trending models and repositories
    Trending,
    /// Recent research papers
    Papers,
}

impl View {
    /// All views in tab order
    pub const ALL: [View; 3] = [View::Tools, View::Trending, View::Papers];

    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Tools => View::Trending,
            View::Trending => View::Papers,
            View::Papers => View::Tools,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Tools => View::Papers,
            View::Trending => View::Tools,
            View::Papers => View::Trending,
        }
    }

    /// Get the view name for display.
    pub fn name(self) -> &'static str {
        match self {
            View::Tools => "Tools",
            View::Trending => "Trending",
            View::Papers => "Papers",
        }
    }

    /// Position in tab order
    pub fn index(self) -> usize {
        match self {
            View::Tools => 0,
            View::Trending => 1,
            View::Papers => 2,
        }
    }
}

/// Tabs inside the trending view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingTab {
    #[default]
    Models,
    Repos,
}

impl TrendingTab {
    /// Switch to the other tab
    pub fn toggle(self) -> Self {
        match self {
            TrendingTab::Models => TrendingTab::Repos,
            TrendingTab::Repos => TrendingTab::Models,
        }
    }

    /// Position in tab order
    pub fn index(self) -> usize {
        match self {
            TrendingTab::Models => 0,
            TrendingTab::Repos => 1,
        }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation
    #[default]
    Normal,
    /// Typing in the search box
    Search,
    /// Category picker open
    Categories,
    /// Help overlay visible
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle() {
        assert_eq!(View::Tools.next(), View::Trending);
        assert_eq!(View::Trending.next(), View::Papers);
        assert_eq!(View::Papers.next(), View::Tools);
        assert_eq!(View::Tools.prev(), View::Papers);
        for (i, view) in View::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Tools);
        assert_eq!(state.interaction_mode, InteractionMode::Normal);
        assert_eq!(state.category_options.len(), CATEGORY_OPTIONS.len());
        assert_eq!(state.query(), Query::default());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_query_reflects_controls() {
        let mut state = AppState::default();
        state.search = SearchInput::with_content("code");
        state.category_cursor = 3; // LLM
        state.toggle_category_at_cursor();
        state.adjust_min_rating(5);
        state.cycle_sort();

        let query = state.query();
        assert_eq!(query.search_text, "code");
        assert!(query.categories.contains("LLM"));
        assert_eq!(query.min_rating, 4.0);
        assert_eq!(query.sort_key, Some(SortKey::Rating));
    }

    #[test]
    fn test_toggle_category_twice_unselects() {
        let mut state = AppState::default();
        state.toggle_category_at_cursor();
        assert_eq!(state.selected_categories.len(), 1);
        state.toggle_category_at_cursor();
        assert!(state.selected_categories.is_empty());
    }

    #[test]
    fn test_category_cursor_wraps() {
        let mut state = AppState::default();
        state.move_category_cursor(false);
        assert_eq!(state.category_cursor, CATEGORY_OPTIONS.len() - 1);
        state.move_category_cursor(true);
        assert_eq!(state.category_cursor, 0);
    }

    #[test]
    fn test_rating_slider_is_clamped() {
        let mut state = AppState::default();
        state.adjust_min_rating(100);
        assert_eq!(state.min_rating, 5.0);
        state.adjust_min_rating(-100);
        assert_eq!(state.min_rating, 1.0);
        state.adjust_min_rating(1);
        assert_eq!(state.min_rating, 1.1);
    }

    #[test]
    fn test_cycle_sort_from_none() {
        let mut state = AppState::default();
        state.sort_key = None;
        state.cycle_sort();
        assert_eq!(state.sort_key, Some(SortKey::Popularity));
    }

    #[test]
    fn test_clear_filters() {
        let mut state = AppState::default();
        state.search = SearchInput::with_content("ai");
        state.toggle_category_at_cursor();
        state.clear_filters();
        assert!(state.search.is_empty());
        assert!(state.selected_categories.is_empty());
        assert_eq!(state.min_rating, 3.5);
    }

    #[test]
    fn test_toggle_paper() {
        let mut state = AppState::default();
        state.toggle_paper(1);
        assert!(state.expanded_papers.contains(&1));
        state.toggle_paper(1);
        assert!(state.expanded_papers.is_empty());
    }

    #[test]
    fn test_logo_status_defaults_to_pending() {
        let mut state = AppState::default();
        assert_eq!(state.logo_status("Uizard"), LogoStatus::Pending);
        state.logos.insert("Uizard".to_string(), LogoStatus::Placeholder);
        assert_eq!(state.logo_status("Uizard"), LogoStatus::Placeholder);
    }

    #[test]
    fn test_trending_tab_toggle() {
        assert_eq!(TrendingTab::Models.toggle(), TrendingTab::Repos);
        assert_eq!(TrendingTab::Repos.toggle(), TrendingTab::Models);
    }
}
