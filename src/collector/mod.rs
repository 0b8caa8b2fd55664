//! Leaderboard collection.
//!
//! Runs the per-category fetch strategies, applies the fallback policy
//! to each source result, assigns ranks, and assembles the persisted
//! document. No source is retried within a run; fetches happen
//! sequentially.

use crate::config::Config;
use crate::models::{assign_ranks, Category, LeaderboardDocument, ScoredRecord};
use crate::sources::{arena, github, huggingface, stackoverflow, SourceResult};
use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{info, warn};

/// Human-readable provenance, in query order.
const SOURCE_DESCRIPTIONS: [&str; 4] = [
    "Hugging Face Open LLM Leaderboard",
    "Chatbot Arena by LMSYS",
    "Stack Overflow Developer Survey",
    "GitHub AI Agent Projects",
];

/// Merge policy for multi-source categories: each failed source
/// degrades to an empty contribution, successes are concatenated in
/// source order.
pub fn merge_sources(results: Vec<(&str, SourceResult)>) -> Vec<ScoredRecord> {
    let mut merged = Vec::new();

    for (source, result) in results {
        match result {
            Ok(records) => {
                info!("{}: {} records", source, records.len());
                merged.extend(records);
            }
            Err(e) => {
                warn!("{} unavailable, contributing no records: {}", source, e);
            }
        }
    }

    merged
}

/// Fallback policy for single-source categories: a failed source is
/// replaced wholesale by the fixed fallback set.
pub fn or_fallback(
    source: &str,
    result: SourceResult,
    fallback: Vec<ScoredRecord>,
) -> Vec<ScoredRecord> {
    match result {
        Ok(records) => {
            info!("{}: {} records", source, records.len());
            records
        }
        Err(e) => {
            warn!("{} unavailable, using fallback data: {}", source, e);
            fallback
        }
    }
}

/// The collector. Owns the HTTP clients and the run configuration.
pub struct Collector {
    /// Client for leaderboard page probes (browser-like User-Agent).
    page_client: reqwest::Client,
    /// Client for GitHub API calls (shorter per-request timeout).
    github_client: reqwest::Client,
    config: Config,
}

impl Collector {
    /// Build a collector from the run configuration.
    pub fn new(config: Config) -> Result<Self> {
        let page_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch.timeout_seconds))
            .user_agent(config.fetch.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        let github_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch.github_timeout_seconds))
            .user_agent(concat!("techboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create GitHub API client")?;

        Ok(Self {
            page_client,
            github_client,
            config,
        })
    }

    /// Run one full collection: fetch, rank and assemble the document.
    pub async fn collect(&self) -> LeaderboardDocument {
        let mut models = self.collect_models().await;
        assign_ranks(&mut models);

        let mut ides = self.collect_ides().await;
        assign_ranks(&mut ides);

        let mut agents = self.collect_agents().await;
        assign_ranks(&mut agents);

        LeaderboardDocument {
            generated_at: Utc::now().to_rfc3339(),
            sources: SOURCE_DESCRIPTIONS.iter().map(|s| s.to_string()).collect(),
            models,
            ides,
            agents,
        }
    }

    /// Models: concatenate the primary and secondary sources, any of
    /// which may legitimately contribute nothing.
    async fn collect_models(&self) -> Vec<ScoredRecord> {
        info!("Collecting {} rankings", Category::Models);

        let hf = huggingface::fetch(&self.page_client).await;
        let arena = arena::fetch(&self.page_client).await;

        merge_sources(vec![
            ("Hugging Face Open LLM Leaderboard", hf),
            ("Chatbot Arena", arena),
        ])
    }

    /// IDEs: a single source with a fixed fallback, never empty.
    async fn collect_ides(&self) -> Vec<ScoredRecord> {
        info!("Collecting {} rankings", Category::Ides);

        let result = stackoverflow::fetch(&self.page_client).await;
        or_fallback(
            "Stack Overflow Developer Survey",
            result,
            stackoverflow::fallback_ides(),
        )
    }

    /// Agents: one GitHub API call per tracked project. A failed
    /// project is omitted; if every project fails, the fixed fallback
    /// stands in.
    async fn collect_agents(&self) -> Vec<ScoredRecord> {
        info!("Collecting {} rankings", Category::Agents);

        let projects = &self.config.agents.projects;
        let pb = ProgressBar::new(projects.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut records = Vec::new();
        for project in projects {
            pb.set_message(project.repo.clone());
            match github::fetch_stars(&self.github_client, project).await {
                Ok(record) => records.push(record),
                Err(e) => warn!("Failed to fetch {}, skipping: {}", project.repo, e),
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        if records.is_empty() {
            warn!("No agent project fetch succeeded, using fallback data");
            return github::fallback_agents();
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SourceError;
    use reqwest::StatusCode;

    fn record(name: &str, score: f64) -> ScoredRecord {
        ScoredRecord::new(name, score, "Org", None, None)
    }

    fn failed() -> SourceResult {
        Err(SourceError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            url: "https://example.com".to_string(),
        })
    }

    #[test]
    fn test_merge_sources_concatenates_in_order() {
        let merged = merge_sources(vec![
            ("primary", Ok(vec![record("a", 10.0), record("b", 20.0)])),
            ("secondary", Ok(vec![record("c", 15.0)])),
        ]);

        let names: Vec<_> = merged.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_sources_failed_source_contributes_nothing() {
        let merged = merge_sources(vec![
            ("primary", failed()),
            ("secondary", Ok(vec![record("c", 15.0)])),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "c");
    }

    #[test]
    fn test_merge_sources_all_failed_is_empty() {
        let merged = merge_sources(vec![("primary", failed()), ("secondary", failed())]);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_or_fallback_keeps_success() {
        let records = or_fallback("survey", Ok(vec![record("x", 1.0)]), vec![record("f", 9.0)]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "x");
    }

    #[test]
    fn test_or_fallback_substitutes_on_failure() {
        let fallback = crate::sources::stackoverflow::fallback_ides();
        let expected = fallback.clone();

        let mut records = or_fallback("survey", failed(), fallback);
        assert_eq!(records, expected);

        // Ranked fallback is never empty and keeps its own order.
        assign_ranks(&mut records);
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[0].name, "VS Code");
        assert_eq!(records.last().unwrap().rank, 3);
    }
}
