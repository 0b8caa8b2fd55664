//! Chatbot Arena source.
//!
//! Secondary source for the models category. The probe confirms the
//! upstream is reachable but contributes no records yet; the merge
//! policy concatenates whatever it returns with the primary source.

use crate::sources::SourceResult;
use reqwest::Client;
use tracing::debug;

/// Arena leaderboard page.
pub const ARENA_URL: &str = "https://chat.lmsys.org/leaderboard";

/// Probe the Arena leaderboard.
pub async fn fetch(client: &Client) -> SourceResult {
    debug!("Probing Chatbot Arena leaderboard");

    let response = client.get(ARENA_URL).send().await?;
    response.error_for_status()?;

    // TODO: extract Elo ratings once the Arena publishes a stable JSON feed.
    Ok(Vec::new())
}
