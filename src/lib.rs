//! aitrend - an AI tools catalog dashboard
//!
//! A fixed catalog of AI tools is filtered by text, category and minimum
//! rating, optionally sorted, and summarized into overview metrics and a
//! per-category histogram. The same query engine backs the terminal
//! dashboard and the one-shot CLI commands.

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod feeds;
pub mod logo;
pub mod query;
pub mod tui;

pub use error::{DashboardError, Result};
