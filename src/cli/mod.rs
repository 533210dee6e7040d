//! CLI module for aitrend - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for the dashboard and the
//! one-shot catalog queries.

pub mod commands;

pub use commands::Cli;
