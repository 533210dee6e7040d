//! TUI Application
//!
//! Owns the catalog, the feed provider and the widget state, and maps key
//! presses onto state changes. Results are re-derived from the state on every
//! call to [`App::evaluate`]; nothing is cached.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InteractionMode, View};
use crate::catalog::Catalog;
use crate::display::ViewMode;
use crate::feeds::FeedProvider;
use crate::logo::LogoStatus;
use crate::query::{Evaluation, Query, evaluate};

/// Main TUI application
pub struct App {
    state: AppState,
    catalog: Catalog,
    feeds: Box<dyn FeedProvider>,
}

impl App {
    /// Create an app whose controls start at `initial`
    pub fn new(catalog: Catalog, feeds: Box<dyn FeedProvider>, initial: &Query, view_mode: ViewMode) -> Self {
        let state = AppState::new(catalog.category_options(), initial, view_mode);
        Self { state, catalog, feeds }
    }

    /// Get a reference to the state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a mutable reference to the state.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// The loaded catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The trending feed source
    pub fn feeds(&self) -> &dyn FeedProvider {
        self.feeds.as_ref()
    }

    /// Run the current query against the catalog
    pub fn evaluate(&self) -> Evaluation<'_> {
        evaluate(&self.catalog, &self.state.query())
    }

    /// Record fetched logo statuses
    pub fn apply_logos(&mut self, statuses: Vec<(String, LogoStatus)>) {
        let loaded = statuses
            .iter()
            .filter(|(_, s)| matches!(s, LogoStatus::Loaded(_)))
            .count();
        self.state.logos.extend(statuses);
        log::info!("Logo fetch finished: {} of {} loaded", loaded, self.catalog.len());
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return true;
        }

        match self.state.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::Search => self.handle_search_key(key),
            InteractionMode::Categories => self.handle_category_key(key),
            InteractionMode::Help => self.state.interaction_mode = InteractionMode::Normal,
        }

        self.state.should_quit
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Tab => self.state.current_view = self.state.current_view.next(),
            KeyCode::BackTab => self.state.current_view = self.state.current_view.prev(),
            KeyCode::Char('1') => self.state.current_view = View::Tools,
            KeyCode::Char('2') => self.state.current_view = View::Trending,
            KeyCode::Char('3') => self.state.current_view = View::Papers,
            KeyCode::Char('?') => self.state.interaction_mode = InteractionMode::Help,
            KeyCode::Char('/') => {
                self.state.current_view = View::Tools;
                self.state.interaction_mode = InteractionMode::Search;
            }
            KeyCode::Char('c') => {
                self.state.current_view = View::Tools;
                self.state.interaction_mode = InteractionMode::Categories;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.state.adjust_min_rating(1),
            KeyCode::Char('-') => self.state.adjust_min_rating(-1),
            KeyCode::Char('s') => self.state.cycle_sort(),
            KeyCode::Char('v') => self.state.cycle_view_mode(),
            KeyCode::Char('x') => self.state.clear_filters(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l')
                if self.state.current_view == View::Trending =>
            {
                self.state.trending_tab = self.state.trending_tab.toggle();
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.state.current_view == View::Papers => {
                let index = self.state.paper_cursor;
                self.state.toggle_paper(index);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.state.interaction_mode = InteractionMode::Normal,
            _ => {
                if self.state.search.handle_key(&key) {
                    self.state.tool_cursor = 0;
                }
            }
        }
    }

    fn handle_category_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
                self.state.interaction_mode = InteractionMode::Normal
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.move_category_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_category_cursor(true),
            KeyCode::Char(' ') | KeyCode::Enter => self.state.toggle_category_at_cursor(),
            _ => {}
        }
    }

    /// Re-run the query and stamp the refresh time
    fn refresh(&mut self) {
        let count = self.evaluate().summary.count;
        self.state.mark_refreshed();
        self.state.status_message = Some(format!("Refreshed: {} tools match", count));
        log::info!("Manual refresh, {} tools match", count);
    }

    fn move_cursor(&mut self, down: bool) {
        let (cursor, len) = match self.state.current_view {
            View::Tools => {
                let len = self.evaluate().tools.len();
                (&mut self.state.tool_cursor, len)
            }
            View::Papers => {
                let len = self.feeds.papers().len();
                (&mut self.state.paper_cursor, len)
            }
            View::Trending => return,
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = if down {
            (*cursor + 1).min(len - 1)
        } else {
            cursor.saturating_sub(1)
        };
    }
}
