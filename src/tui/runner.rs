//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. It runs the
//! main loop: render → handle events → drain logo results → repeat.

use eyre::Result;
use log::info;
use tokio::sync::mpsc;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use crate::logo::LogoStatus;

/// Logo statuses delivered by the background fetch
pub type LogoReceiver = mpsc::Receiver<Vec<(String, LogoStatus)>>;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
    /// Background logo fetch, if one was started
    logos: Option<LogoReceiver>,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, event_handler: EventHandler) -> Self {
        Self {
            terminal,
            app,
            event_handler,
            logos: None,
        }
    }

    /// Attach the receiving end of a logo fetch
    pub fn with_logos(mut self, logos: LogoReceiver) -> Self {
        self.logos = Some(logos);
        self
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            self.terminal.draw(|f| render(&self.app, f))?;

            match self.event_handler.next().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Tick => self.drain_logos(),
                Event::Resize(_, _) => {}
            }

            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }

    fn drain_logos(&mut self) {
        let Some(rx) = self.logos.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(statuses) => {
                self.app.apply_logos(statuses);
                self.logos = None;
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                log::warn!("Logo fetch ended without results");
                self.logos = None;
            }
        }
    }
}
