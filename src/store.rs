//! Document and report persistence.
//!
//! The JSON document at the configured data path is the sole hand-off
//! between the collector and the renderer. Both outputs are fully
//! overwritten on every run.

use crate::models::LeaderboardDocument;
use anyhow::{Context, Result};
use std::path::Path;

/// Persist the leaderboard document as pretty JSON, replacing any
/// prior document.
pub fn save_document(document: &LeaderboardDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(document).context("Failed to serialize document")?;

    std::fs::write(path, json)
        .with_context(|| format!("Failed to write document to {}", path.display()))?;

    Ok(())
}

/// Load the persisted document.
///
/// Returns `Ok(None)` when no document exists yet (the renderer treats
/// this as an expected no-op), `Err` when the file exists but cannot be
/// read or parsed.
pub fn load_document(path: &Path) -> Result<Option<LeaderboardDocument>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document from {}", path.display()))?;

    let document: LeaderboardDocument = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse document at {}", path.display()))?;

    Ok(Some(document))
}

/// Write the rendered report, replacing any prior content.
pub fn save_report(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(())
}
