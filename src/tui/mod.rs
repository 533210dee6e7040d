//! Terminal User Interface for aitrend.
//!
//! A tabbed dashboard with three views:
//! - **Tools**: catalog browser with filter controls, metrics and category chart
//! - **Trending**: trending models and repositories
//! - **Papers**: recent research papers
//!
//! The TUI runs on the main tokio runtime; logos are fetched in a background
//! task and handed over through a channel.

mod app;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use input::SearchInput;
pub use runner::{LogoReceiver, TuiRunner};
pub use state::{AppState, InteractionMode, TrendingTab, View};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enable raw mode and switch to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

/// Leave the alternate screen and disable raw mode.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Dashboard palette
pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255);
    pub const HIGHLIGHT: Color = Color::Rgb(255, 75, 75); // Coral
    pub const PENDING: Color = Color::Rgb(255, 215, 0); // Gold
    pub const BAR: Color = Color::Rgb(100, 149, 237); // Cornflower
    pub const BADGE: Color = Color::Rgb(176, 196, 222); // Light steel
    pub const DIM: Color = Color::DarkGray;
}
