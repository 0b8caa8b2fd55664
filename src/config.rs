//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.techboard.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output path settings.
    #[serde(default)]
    pub paths: PathsConfig,

    /// HTTP fetch settings.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Tracked agent projects.
    #[serde(default)]
    pub agents: AgentsConfig,
}

/// Well-known output paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Where the collector persists the leaderboard document.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Where the renderer writes the Markdown report.
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            report_file: default_report_file(),
        }
    }
}

fn default_data_file() -> String {
    "data/leaderboard.json".to_string()
}

fn default_report_file() -> String {
    "README.md".to_string()
}

/// HTTP fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Timeout for leaderboard page probes, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Timeout for per-project GitHub API calls, in seconds.
    #[serde(default = "default_github_timeout")]
    pub github_timeout_seconds: u64,

    /// User-Agent header sent with page probes.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            github_timeout_seconds: default_github_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_github_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

/// Tracked AI agent projects queried against the GitHub API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsConfig {
    /// Projects to rank by star count.
    #[serde(default = "default_projects")]
    pub projects: Vec<AgentProject>,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            projects: default_projects(),
        }
    }
}

/// One tracked agent project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProject {
    /// Display name.
    pub name: String,
    /// GitHub `owner/repo` slug.
    pub repo: String,
    /// Distribution kind shown in the report.
    #[serde(default = "default_project_kind")]
    pub kind: String,
}

fn default_project_kind() -> String {
    "Open Source".to_string()
}

fn default_projects() -> Vec<AgentProject> {
    [
        ("Auto-GPT", "Significant-Gravitas/Auto-GPT", "Open Source"),
        (
            "Open Interpreter",
            "OpenInterpreter/OpenInterpreter",
            "Open Source",
        ),
        ("MetaGPT", "geekan/MetaGPT", "Open Source"),
        ("AgentGPT", "reworkd/AgentGPT", "Web"),
        ("BabyAGI", "yoheinakajima/babyagi", "Open Source"),
        ("CrewAI", "CrewAI/CrewAI", "Open Source"),
        ("AutoGen", "microsoft/autogen", "Open Source"),
    ]
    .into_iter()
    .map(|(name, repo, kind)| AgentProject {
        name: name.to_string(),
        repo: repo.to_string(),
        kind: kind.to_string(),
    })
    .collect()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".techboard.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref data_file) = args.data_file {
            self.paths.data_file = data_file.display().to_string();
        }
        if let Some(ref output) = args.output {
            self.paths.report_file = output.display().to_string();
        }
        if let Some(timeout) = args.timeout {
            self.fetch.timeout_seconds = timeout;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
