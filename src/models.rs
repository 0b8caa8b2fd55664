//! Data models for the leaderboard tracker.
//!
//! This module contains the core data structures shared by the
//! collector and the renderer: scored records, the persisted
//! leaderboard document, and the ranking logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three tracked leaderboard categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Large language models.
    Models,
    /// Development environments.
    Ides,
    /// AI agent projects.
    Agents,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Models => write!(f, "LLMs"),
            Category::Ides => write!(f, "IDEs"),
            Category::Agents => write!(f, "AI Agents"),
        }
    }
}

impl Category {
    /// Column header for the category-specific attribute.
    pub fn detail_header(&self) -> &'static str {
        match self {
            Category::Models => "Parameters",
            Category::Ides | Category::Agents => "Version",
        }
    }
}

/// One ranked entity on a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// Display name of the entity.
    pub name: String,
    /// Benchmark score, usage percentage or star count. Higher is better.
    pub score: f64,
    /// Organization behind the entity.
    pub organization: String,
    /// Distribution kind, e.g. "Commercial", "Open Source", "Web".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Category-specific attribute: parameter count for models,
    /// version for IDEs and agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Dense 1-based rank within the category. Assigned by
    /// [`assign_ranks`], never supplied by a source.
    #[serde(default)]
    pub rank: u32,
}

impl ScoredRecord {
    /// Create an unranked record. Rank stays 0 until [`assign_ranks`] runs.
    pub fn new(
        name: impl Into<String>,
        score: f64,
        organization: impl Into<String>,
        kind: Option<&str>,
        detail: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            score,
            organization: organization.into(),
            kind: kind.map(String::from),
            detail: detail.map(String::from),
            rank: 0,
        }
    }
}

/// Sort records by score descending and assign dense 1-based ranks.
///
/// The sort is stable, so records with exactly equal scores keep
/// their pre-sort relative order.
pub fn assign_ranks(records: &mut [ScoredRecord]) {
    records.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (i, record) in records.iter_mut().enumerate() {
        record.rank = (i + 1) as u32;
    }
}

/// The aggregate document persisted between collector and renderer runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardDocument {
    /// RFC 3339 timestamp of the collection run. Stored as a string so
    /// the renderer can fall back to the raw value if parsing fails.
    #[serde(default)]
    pub generated_at: String,
    /// Human-readable names of the data sources, in query order.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Ranked language models.
    #[serde(default)]
    pub models: Vec<ScoredRecord>,
    /// Ranked development environments.
    #[serde(default)]
    pub ides: Vec<ScoredRecord>,
    /// Ranked agent projects.
    #[serde(default)]
    pub agents: Vec<ScoredRecord>,
}

impl LeaderboardDocument {
    /// Get the ranked records for a category.
    pub fn category(&self, category: Category) -> &[ScoredRecord] {
        match category {
            Category::Models => &self.models,
            Category::Ides => &self.ides,
            Category::Agents => &self.agents,
        }
    }

    /// True when all three categories are empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.ides.is_empty() && self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: f64) -> ScoredRecord {
        ScoredRecord::new(name, score, "Org", None, None)
    }

    #[test]
    fn test_assign_ranks_distinct_scores() {
        let mut records = vec![record("c", 10.0), record("a", 30.0), record("b", 20.0)];

        assign_ranks(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        let ranks: Vec<_> = records.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_assign_ranks_is_stable_on_ties() {
        let mut records = vec![
            record("first", 50.0),
            record("second", 50.0),
            record("third", 50.0),
            record("top", 90.0),
        ];

        assign_ranks(&mut records);

        assert_eq!(records[0].name, "top");
        assert_eq!(records[1].name, "first");
        assert_eq!(records[2].name, "second");
        assert_eq!(records[3].name, "third");
        assert_eq!(
            records.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_assign_ranks_empty() {
        let mut records: Vec<ScoredRecord> = Vec::new();
        assign_ranks(&mut records);
        assert!(records.is_empty());
    }

    #[test]
    fn test_document_missing_categories_default_empty() {
        let json = r#"{"generated_at": "2025-06-01T00:00:00Z", "sources": []}"#;
        let doc: LeaderboardDocument = serde_json::from_str(json).unwrap();

        assert!(doc.models.is_empty());
        assert!(doc.ides.is_empty());
        assert!(doc.agents.is_empty());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_document_is_empty() {
        let mut doc = LeaderboardDocument::default();
        assert!(doc.is_empty());

        doc.ides.push(record("VS Code", 73.71));
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_category_display_and_detail_header() {
        assert_eq!(Category::Models.to_string(), "LLMs");
        assert_eq!(Category::Models.detail_header(), "Parameters");
        assert_eq!(Category::Ides.detail_header(), "Version");
        assert_eq!(Category::Agents.detail_header(), "Version");
    }
}
