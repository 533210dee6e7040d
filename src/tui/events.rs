//! Terminal events for the dashboard loop.
//!
//! Key presses come from crossterm; a `Tick` is produced whenever the poll
//! interval passes without input, which is when background logo results are
//! picked up.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;

use crate::config::TuiConfig;

/// Unified event type for the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Poll interval elapsed
    Tick,
    /// Terminal resized; the next draw picks up the new size
    Resize(u16, u16),
}

/// Polls crossterm on a blocking thread so the runtime stays free for fetches.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Handler using the configured tick rate, floored at 10ms
    pub fn from_config(config: &TuiConfig) -> Self {
        Self::new(Duration::from_millis(config.tick_rate_ms.max(10)))
    }

    /// Wait for the next event or the end of the tick interval
    pub async fn next(&self) -> Result<Event> {
        let tick_rate = self.tick_rate;
        tokio::task::spawn_blocking(move || -> Result<Event> {
            if !event::poll(tick_rate)? {
                return Ok(Event::Tick);
            }
            let event = match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                _ => Event::Tick,
            };
            Ok(event)
        })
        .await?
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::from_config(&TuiConfig::default())
    }
}
