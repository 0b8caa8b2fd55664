//! External data sources.
//!
//! One module per upstream leaderboard. Every fetch returns an explicit
//! `Result` so the collector's fallback policy can pattern-match on it
//! instead of swallowing failures; no source retries within a run.

pub mod arena;
pub mod github;
pub mod huggingface;
pub mod stackoverflow;

use thiserror::Error;

/// Why a source fetch failed. All variants are recovered locally by the
/// collector's fallback policy and never abort a run.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Connection, timeout or body decode failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Convenience alias for source fetch results.
pub type SourceResult = Result<Vec<crate::models::ScoredRecord>, SourceError>;
