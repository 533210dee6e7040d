//! Search box input
//!
//! Append-only line editing: type to extend, Backspace to drop a character,
//! Ctrl+W to drop a word, Ctrl+U to clear.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Text buffer behind the search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    content: String,
}

impl SearchInput {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial content
    pub fn with_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Get the content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Remove the trailing word and any whitespace after it
    pub fn delete_word(&mut self) {
        let trimmed = self.content.trim_end().len();
        self.content.truncate(trimmed);
        let cut = self.content.rfind(char::is_whitespace).map(|i| i + 1).unwrap_or(0);
        self.content.truncate(cut);
    }

    /// Apply a key. Returns true if the content changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let before = self.content.len();
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.clear(),
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => self.delete_word(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.content.push(c);
            }
            KeyCode::Backspace => {
                self.content.pop();
            }
            _ => return false,
        }
        self.content.len() != before
    }
}
