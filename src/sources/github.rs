//! GitHub API source for AI agent popularity.
//!
//! Ranks a configured set of agent projects by stargazer count. Each
//! project is fetched independently; a single failure omits only that
//! project from the run.

use crate::config::AgentProject;
use crate::models::ScoredRecord;
use crate::sources::SourceError;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

/// Repository metadata returned by the GitHub API.
#[derive(Debug, Deserialize)]
struct RepoInfo {
    #[serde(default)]
    stargazers_count: u64,
}

/// Fetch the star count for one tracked project.
pub async fn fetch_stars(
    client: &Client,
    project: &AgentProject,
) -> Result<ScoredRecord, SourceError> {
    let url = format!("https://api.github.com/repos/{}", project.repo);
    debug!("Fetching stars for {}", project.repo);

    let response = client
        .get(&url)
        .header(ACCEPT, "application/vnd.github+json")
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        return Err(SourceError::Status {
            status: response.status(),
            url,
        });
    }

    let info: RepoInfo = response.json().await?;

    let organization = project
        .repo
        .split('/')
        .next()
        .unwrap_or(&project.repo)
        .to_string();

    Ok(ScoredRecord::new(
        &project.name,
        info.stargazers_count as f64,
        organization,
        Some(&project.kind),
        None,
    ))
}

/// Fixed fallback used when no project fetch succeeds.
pub fn fallback_agents() -> Vec<ScoredRecord> {
    vec![
        ScoredRecord::new(
            "Auto-GPT",
            88_700.0,
            "Significant Gravitas",
            Some("Open Source"),
            Some("v2.0"),
        ),
        ScoredRecord::new(
            "Open Interpreter",
            65_300.0,
            "Open Interpreter",
            Some("Open Source"),
            Some("v0.3.11"),
        ),
        ScoredRecord::new("AgentGPT", 47_000.0, "AgentGPT", Some("Web"), Some("2025.06")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_info_deserializes() {
        let info: RepoInfo =
            serde_json::from_str(r#"{"stargazers_count": 12345, "updated_at": "x"}"#).unwrap();
        assert_eq!(info.stargazers_count, 12345);

        // Missing count defaults to zero rather than failing the project.
        let info: RepoInfo = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(info.stargazers_count, 0);
    }

    #[test]
    fn test_fallback_agents_shape() {
        let agents = fallback_agents();

        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0].name, "Auto-GPT");
        assert!(agents.iter().all(|a| a.detail.is_some()));
        assert!(agents.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
