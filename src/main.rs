use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

mod cli;

use aitrend::catalog::{Catalog, DATE_FORMAT, Tool};
use aitrend::config::Config;
use aitrend::display::{
    DISCLAIMER, NO_MATCHES, TABLE_HEADERS, ViewMode, compact_detail, compact_headline, format_users,
    overview_metrics, star_bar, table_row,
};
use aitrend::feeds::{FeedProvider, StaticFeeds};
use aitrend::logo::{HttpImageFetcher, fetch_all};
use aitrend::query::{Query, SortKey, evaluate, histogram, ranked};
use aitrend::tui::{self, App, EventHandler, LogoReceiver, TuiRunner};
use cli::Cli;
use cli::commands::{Commands, TrendingKind};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aitrend")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("aitrend.log");

    // Setup env_logger with file output; RUST_LOG replaces the catch-all filter
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();
    if !rust_log_set() {
        log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
    }

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn rust_log_set() -> bool {
    std::env::var_os("RUST_LOG").is_some()
}

/// Level requested by the config file, unless `-v` or RUST_LOG already decided
fn config_log_level(cli: &Cli, config: &Config) -> Option<LevelFilter> {
    if cli.is_verbose() || rust_log_set() {
        return None;
    }
    let level = config.log_level.as_deref()?;
    match level.parse() {
        Ok(filter) => Some(filter),
        Err(_) => {
            log::warn!("Unknown log_level '{}' in config, keeping info", level);
            None
        }
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    let catalog_path = cli.catalog.as_ref().or(config.catalog.path.as_ref());
    let catalog = Catalog::load(catalog_path.map(PathBuf::as_path)).context("Failed to load catalog")?;

    match &cli.command {
        None | Some(Commands::Dashboard) => run_dashboard(catalog, config),
        Some(Commands::List {
            search,
            categories,
            min_rating,
            sort,
            view,
            json,
        }) => {
            let query = build_query(config, search.as_deref(), categories, *min_rating, sort.as_deref());
            handle_list_command(&catalog, &query, view.unwrap_or(config.defaults.view), *json)
        }
        Some(Commands::Categories) => handle_categories_command(&catalog),
        Some(Commands::Trending { kind }) => handle_trending_command(&StaticFeeds::new(), *kind),
        Some(Commands::Papers) => handle_papers_command(&StaticFeeds::new()),
    }
}

/// Start from the configured defaults and apply any flags given
fn build_query(
    config: &Config,
    search: Option<&str>,
    categories: &[String],
    min_rating: Option<f64>,
    sort: Option<&str>,
) -> Query {
    let mut query = config.defaults.initial_query().with_categories(categories.iter().cloned());
    if let Some(text) = search {
        query = query.with_search(text);
    }
    if let Some(rating) = min_rating {
        query = query.with_min_rating(rating);
    }
    if let Some(label) = sort {
        let key = SortKey::from_label(label);
        if key.is_none() {
            eprintln!("{} unknown sort '{}', keeping catalog order", "warning:".yellow(), label);
        }
        query = query.with_sort(key);
    }
    query
}

fn run_dashboard(catalog: Catalog, config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(run_tui(catalog, config))
}

async fn run_tui(catalog: Catalog, config: &Config) -> Result<()> {
    let logos = if config.logos.enabled {
        spawn_logo_fetch(catalog.tools().to_vec(), Duration::from_millis(config.logos.timeout_ms))
    } else {
        info!("Logo fetching disabled");
        None
    };

    let query = config.defaults.initial_query();
    let app = App::new(catalog, Box::new(StaticFeeds::new()), &query, config.defaults.view);

    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, app, EventHandler::from_config(&config.tui));
    if let Some(rx) = logos {
        runner = runner.with_logos(rx);
    }

    let result = runner.run().await;
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

/// Fetch all logos in the background; failures only ever become placeholders
fn spawn_logo_fetch(tools: Vec<Tool>, timeout: Duration) -> Option<LogoReceiver> {
    let fetcher = match HttpImageFetcher::new(timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            log::warn!("Logo fetching unavailable: {}", e);
            return None;
        }
    };

    let (tx, rx) = tokio::sync::mpsc::channel(1);
    tokio::spawn(async move {
        let statuses = fetch_all(&fetcher, &tools).await;
        if tx.send(statuses).await.is_err() {
            log::debug!("Dashboard closed before logos arrived");
        }
    });
    Some(rx)
}

fn handle_list_command(catalog: &Catalog, query: &Query, view: ViewMode, json: bool) -> Result<()> {
    info!("Listing tools for {:?} as {}", query, view.label());
    let eval = evaluate(catalog, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&eval).context("Failed to serialize results")?);
        return Ok(());
    }

    for (label, value) in overview_metrics(eval.total_tools, &eval.summary) {
        print!("{} {}   ", format!("{}:", label).cyan(), value.bold());
    }
    println!();
    println!();

    if eval.tools.is_empty() {
        println!("{}", NO_MATCHES.yellow());
        return Ok(());
    }

    match view {
        ViewMode::Table => print_table(&eval.tools),
        ViewMode::Compact => {
            for tool in &eval.tools {
                println!("{}", compact_headline(tool).bold());
                println!("  {}", compact_detail(tool).dimmed());
            }
        }
        ViewMode::Cards => {
            for tool in &eval.tools {
                print_card(tool);
            }
        }
    }

    println!();
    println!("{}", DISCLAIMER.italic().dimmed());
    Ok(())
}

fn print_table(tools: &[&Tool]) {
    let rows: Vec<[String; 5]> = tools.iter().map(|t| table_row(t)).collect();
    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = TABLE_HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{:<w$}", h, w = w))
        .collect();
    println!("{}", header.join("  ").bold());
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{:<w$}", c, w = w))
            .collect();
        println!("{}", cells.join("  "));
    }
}

fn print_card(tool: &Tool) {
    println!("{}", tool.name.bold());
    println!("  {} {:.1}", star_bar(tool.rating), tool.rating);
    println!("  {}", tool.categories.join(" | ").magenta());
    println!("  {}", tool.description);
    println!(
        "  {}",
        format!(
            "👥 {} users   💰 {}   🗓️ Updated: {}",
            format_users(tool.users),
            tool.pricing,
            tool.updated.format(DATE_FORMAT)
        )
        .dimmed()
    );
    println!("  {}", tool.link.blue());
    println!();
}

fn handle_categories_command(catalog: &Catalog) -> Result<()> {
    let counts = histogram(catalog.tools());
    for (label, count) in category_rows(&ranked(&counts)) {
        println!("{}  {} {}", label, "█".repeat(count).blue(), count);
    }
    Ok(())
}

/// Category names padded to a common display width
fn category_rows(ranked: &[(&str, usize)]) -> Vec<(String, usize)> {
    let width = ranked.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
    ranked
        .iter()
        .map(|(name, count)| (format!("{:<width$}", name, width = width), *count))
        .collect()
}

fn handle_trending_command(feeds: &dyn FeedProvider, kind: TrendingKind) -> Result<()> {
    match kind {
        TrendingKind::Models => {
            println!("{}", "🤗 Trending Hugging Face Models".bold());
            for model in feeds.trending_models() {
                println!(
                    "  {}  ⬇ {}  ⭐ {}  {}",
                    model.model_id.bold(),
                    format_users(model.downloads),
                    format_users(model.stars),
                    model.url.dimmed()
                );
            }
        }
        TrendingKind::Repos => {
            println!("{}", "🐙 Trending GitHub Repositories".bold());
            for repo in feeds.trending_repos() {
                println!("  {}  ⭐ {}", repo.name.bold(), format_users(repo.stars));
                println!("    {}", repo.description);
                println!("    {}", repo.url().dimmed());
            }
        }
    }
    Ok(())
}

fn handle_papers_command(feeds: &dyn FeedProvider) -> Result<()> {
    println!("{}", "📄 Latest Research Papers".bold());
    for paper in feeds.papers() {
        println!();
        println!("{}", paper.heading().bold());
        println!("  {} {}", "Authors:".cyan(), paper.authors);
        println!("  {} {}", "Conference:".cyan(), paper.conference);
        println!("  {} {}", "Link:".cyan(), paper.link.blue());
        println!("  {}", paper.abstract_text().italic());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging first so config lookup problems are recorded
    setup_logging(cli.is_verbose()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(level) = config_log_level(&cli, &config) {
        log::set_max_level(level);
    }

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
