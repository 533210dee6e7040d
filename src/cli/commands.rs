//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - dashboard: interactive TUI (the default)
//! - list: one-shot query over the catalog
//! - categories: tools per category
//! - trending: trending models or repositories
//! - papers: recent research papers

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use aitrend::display::ViewMode;

/// aitrend - browse, filter and rank a catalog of AI tools
#[derive(Parser, Debug)]
#[command(name = "aitrend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// YAML catalog to use instead of the configured or built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive dashboard
    Dashboard,

    /// Print the tools matching a query
    List {
        /// Case-insensitive text matched against name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Category to include; repeat for several (any match passes)
        #[arg(short = 'C', long = "category")]
        categories: Vec<String>,

        /// Minimum rating, 1.0 to 5.0 [default: from config]
        #[arg(short, long)]
        min_rating: Option<f64>,

        /// Popularity, Rating, Name or "Recently Added" [default: from config]
        #[arg(long)]
        sort: Option<String>,

        /// Output layout [default: from config]
        #[arg(long, value_enum)]
        view: Option<ViewMode>,

        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how many tools carry each category
    Categories,

    /// Show trending models or repositories
    Trending {
        #[arg(value_enum, default_value_t = TrendingKind::Models)]
        kind: TrendingKind,
    },

    /// Show recent research papers
    Papers,
}

/// Which trending feed to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrendingKind {
    Models,
    Repos,
}
