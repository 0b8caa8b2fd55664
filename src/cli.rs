//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Techboard - tech leaderboard tracker for LLMs, IDEs and AI agents
///
/// Collects ranking data from public leaderboards (with hardcoded
/// fallbacks when the network is down), persists it as JSON, and
/// renders a Markdown leaderboard document from that JSON.
///
/// Examples:
///   techboard collect
///   techboard render
///   techboard render --output LEADERBOARD.md
///   techboard --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Which pipeline step to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .techboard.toml in the current directory
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Path of the persisted leaderboard document
    ///
    /// Written by `collect`, read by `render`. Defaults to data/leaderboard.json.
    #[arg(long, value_name = "FILE", global = true)]
    pub data_file: Option<PathBuf>,

    /// Output file path for the rendered Markdown report
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Fetch timeout in seconds for leaderboard page probes
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Generate a default .techboard.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Pipeline steps, run independently by an external scheduler.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetch ranking data for every category and persist the document
    Collect,
    /// Render the Markdown report from the persisted document
    Render,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.command.is_none() {
            return Err("Specify a subcommand: 'collect' or 'render'".to_string());
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
