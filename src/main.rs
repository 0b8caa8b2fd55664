//! Techboard - tech leaderboard tracker.
//!
//! A CLI tool that collects ranking data for LLMs, IDEs and AI agents,
//! persists it as a JSON document, and renders a Markdown leaderboard
//! from that document. The two steps run as independent batch
//! invocations, typically on a schedule.
//!
//! Exit codes:
//!   0 - Success, including expected no-op conditions (missing or
//!       empty document, every source down)
//!   1 - Runtime error (unparsable config, unwritable output, etc.)

mod cli;
mod collector;
mod config;
mod models;
mod report;
mod sources;
mod store;

use anyhow::{Context, Result};
use cli::{Args, Command};
use collector::Collector;
use config::Config;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Techboard v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    let result = match args.command {
        Some(Command::Collect) => run_collect(&args).await,
        Some(Command::Render) => run_render(&args),
        None => unreachable!("validated above"),
    };

    if let Err(e) = result {
        error!("Run failed: {}", e);
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .techboard.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".techboard.toml");

    if path.exists() {
        eprintln!("⚠️  .techboard.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .techboard.toml")?;

    println!("✅ Created .techboard.toml with default settings.");
    println!("   Edit it to customize paths, timeouts and tracked agent projects.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load configuration from file or use defaults, then apply CLI overrides.
fn load_config(args: &Args) -> Result<Config> {
    let mut config = if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        Config::load(config_path)?
    } else {
        match Config::load_default() {
            Ok(Some(config)) => {
                info!("Loaded default config from .techboard.toml");
                config
            }
            Ok(None) => {
                debug!("No config file found, using defaults");
                Config::default()
            }
            Err(e) => {
                warn!("Failed to load config: {}", e);
                Config::default()
            }
        }
    };

    config.merge_with_args(args);
    Ok(config)
}

/// Run the collection step: fetch every category and persist the document.
async fn run_collect(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let data_path = config.paths.data_file.clone();

    println!("📡 Collecting leaderboard data...");

    let collector = Collector::new(config)?;
    let document = collector.collect().await;

    store::save_document(&document, Path::new(&data_path))?;

    println!("\n📊 Collection Summary:");
    println!("   LLMs: {}", document.models.len());
    println!("   IDEs: {}", document.ides.len());
    println!("   AI Agents: {}", document.agents.len());
    println!("\n✅ Data saved to: {}", data_path);

    Ok(())
}

/// Run the render step: project the persisted document into the report.
fn run_render(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let data_path = Path::new(&config.paths.data_file);

    println!("📝 Generating leaderboard report...");

    let Some(document) = store::load_document(data_path)? else {
        // Expected when the collector has not run yet; not a failure.
        warn!("No document at {}, nothing to render", data_path.display());
        println!("   No leaderboard data found. Run 'techboard collect' first.");
        return Ok(());
    };

    let Some(content) = report::render_markdown(&document) else {
        warn!("Document has no records in any category, declining to render");
        println!("   Leaderboard document is empty. No report written.");
        return Ok(());
    };

    store::save_report(&content, Path::new(&config.paths.report_file))?;

    println!("\n✅ Report saved to: {}", config.paths.report_file);

    Ok(())
}
