//! Markdown leaderboard rendering.
//!
//! This module projects a persisted leaderboard document into the
//! Markdown report: one top-10 table per category plus summary
//! statistics. Rendering is pure; the caller persists the result.

use crate::models::{Category, LeaderboardDocument, ScoredRecord};
use chrono::{DateTime, Utc};

/// Rows rendered per category table.
const TOP_N: usize = 10;

/// Render the complete Markdown report.
///
/// Returns `None` when all three categories are empty, so a run with
/// no data never produces an empty report.
pub fn render_markdown(document: &LeaderboardDocument) -> Option<String> {
    if document.is_empty() {
        return None;
    }

    let mut output = String::new();

    output.push_str(&generate_header(&document.generated_at));
    output.push_str(&generate_category_section(Category::Models, &document.models));
    output.push_str(&generate_category_section(Category::Ides, &document.ides));
    output.push_str(&generate_category_section(Category::Agents, &document.agents));
    output.push_str(&generate_statistics_section(document));
    output.push_str(&generate_how_it_works_section());
    output.push_str(&generate_sources_section(&document.sources));
    output.push_str(&generate_footer());

    Some(output)
}

/// Format the stored timestamp for display.
///
/// Falls back to the raw stored string when it isn't valid RFC 3339;
/// a malformed timestamp never blocks report generation.
fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Medal marker for the top three ranks, numeral from rank 4 on.
fn rank_marker(rank: u32) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => n.to_string(),
    }
}

/// Format a score for display. Model scores are benchmark percentages.
fn format_score(category: Category, score: f64) -> String {
    match category {
        Category::Models => format!("{}%", score),
        Category::Ides | Category::Agents => score.to_string(),
    }
}

/// Generate the report header.
fn generate_header(generated_at: &str) -> String {
    let mut section = String::new();

    section.push_str("# 🤖 Tech Leaderboard Tracker\n\n");
    section.push_str(&format!(
        "*Last updated: {}*\n\n",
        format_timestamp(generated_at)
    ));
    section.push_str(
        "This repository automatically tracks and displays the latest performance \
         rankings for LLMs, IDEs, and AI Agents. The leaderboards are refreshed \
         on a fixed schedule.\n\n",
    );

    section
}

/// Generate one category's leaderboard table.
fn generate_category_section(category: Category, records: &[ScoredRecord]) -> String {
    let mut section = String::new();

    let (emoji, title, name_header) = match category {
        Category::Models => ("📊", "LLM", "Model"),
        Category::Ides => ("🖥️", "IDE", "Name"),
        Category::Agents => ("🤖", "AI Agent", "Name"),
    };

    section.push_str(&format!("## {} {} Leaderboard\n\n", emoji, title));

    if category == Category::Ides {
        section.push_str(
            "> **Note:** IDE data is sourced from the latest available Stack Overflow \
             Developer Survey and is updated annually. It does **not** reflect \
             real-time changes and only updates when a new survey is published.\n\n",
        );
    }

    section.push_str(&format!(
        "| Rank | {} | Score | Organization | Type | {} |\n",
        name_header,
        category.detail_header()
    ));
    section.push_str("|------|------|-------|--------------|------|---------|\n");

    for record in records.iter().take(TOP_N) {
        section.push_str(&generate_record_row(category, record));
    }

    section.push('\n');

    section
}

/// Generate one table row.
fn generate_record_row(category: Category, record: &ScoredRecord) -> String {
    format!(
        "| {} | **{}** | {} | {} | {} | {} |\n",
        rank_marker(record.rank),
        record.name,
        format_score(category, record.score),
        record.organization,
        record.kind.as_deref().unwrap_or(""),
        record.detail.as_deref().unwrap_or("Unknown"),
    )
}

/// Generate the key-statistics section.
///
/// Top-entry lines only appear for non-empty categories, so an empty
/// collection is never indexed.
fn generate_statistics_section(document: &LeaderboardDocument) -> String {
    let mut section = String::new();

    section.push_str("## 📈 Key Statistics\n\n");
    section.push_str(&format!("- **LLMs Tracked**: {}\n", document.models.len()));
    section.push_str(&format!("- **IDEs Tracked**: {}\n", document.ides.len()));
    section.push_str(&format!(
        "- **AI Agents Tracked**: {}\n",
        document.agents.len()
    ));

    for (label, category) in [
        ("Top LLM", Category::Models),
        ("Top IDE", Category::Ides),
        ("Top Agent", Category::Agents),
    ] {
        if let Some(top) = document.category(category).first() {
            section.push_str(&format!(
                "- **{}**: {} ({})\n",
                label,
                top.name,
                format_score(category, top.score)
            ));
        }
    }

    section.push('\n');

    section
}

/// Generate the how-it-works section.
fn generate_how_it_works_section() -> String {
    let mut section = String::new();

    section.push_str("## 🔄 How This Works\n\n");
    section.push_str("This leaderboard is maintained by two scheduled batch steps:\n\n");
    section.push_str("1. `techboard collect` fetches the latest data for each category\n");
    section.push_str("2. Rankings fall back to curated tables when a source is unreachable\n");
    section.push_str("3. `techboard render` regenerates this document from the stored data\n\n");

    section
}

/// Generate the data-sources section.
fn generate_sources_section(sources: &[String]) -> String {
    if sources.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## 📊 Data Sources\n\n");
    for source in sources {
        section.push_str(&format!("- {}\n", source));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("⭐ Star this repository to stay updated with the latest rankings!\n\n");
    footer.push_str("*Generated automatically by techboard*\n");

    footer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assign_ranks;

    fn record(name: &str, score: f64) -> ScoredRecord {
        ScoredRecord::new(name, score, "Org", Some("Open Source"), Some("v1"))
    }

    fn document_with_ides(count: usize) -> LeaderboardDocument {
        let mut ides: Vec<ScoredRecord> = (0..count)
            .map(|i| record(&format!("ide-{}", i), (100 - i) as f64))
            .collect();
        assign_ranks(&mut ides);

        LeaderboardDocument {
            generated_at: "2025-06-01T12:30:00+00:00".to_string(),
            sources: vec!["Stack Overflow Developer Survey".to_string()],
            ides,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        let document = LeaderboardDocument::default();
        assert!(render_markdown(&document).is_none());
    }

    #[test]
    fn test_fifteen_records_render_ten_rows() {
        let document = document_with_ides(15);
        let report = render_markdown(&document).unwrap();

        for i in 0..10 {
            assert!(report.contains(&format!("**ide-{}**", i)), "missing row {}", i);
        }
        for i in 10..15 {
            assert!(!report.contains(&format!("**ide-{}**", i)), "extra row {}", i);
        }
    }

    #[test]
    fn test_medals_then_numerals() {
        let document = document_with_ides(15);
        let report = render_markdown(&document).unwrap();

        assert!(report.contains("| 🥇 | **ide-0**"));
        assert!(report.contains("| 🥈 | **ide-1**"));
        assert!(report.contains("| 🥉 | **ide-2**"));
        for rank in 4..=10 {
            assert!(
                report.contains(&format!("| {} | **ide-{}**", rank, rank - 1)),
                "missing numeral rank {}",
                rank
            );
        }
    }

    #[test]
    fn test_missing_detail_shows_unknown() {
        let mut document = LeaderboardDocument {
            generated_at: "2025-06-01T12:30:00+00:00".to_string(),
            ..Default::default()
        };
        let mut agent = record("Auto-GPT", 88_700.0);
        agent.detail = None;
        document.agents.push(agent);
        assign_ranks(&mut document.agents);

        let report = render_markdown(&document).unwrap();
        assert!(report.contains("| 🥇 | **Auto-GPT** | 88700 | Org | Open Source | Unknown |"));
    }

    #[test]
    fn test_model_scores_render_as_percentages() {
        let mut document = LeaderboardDocument::default();
        document.models.push(record("GPT-4 Turbo", 87.3));
        assign_ranks(&mut document.models);

        let report = render_markdown(&document).unwrap();
        assert!(report.contains("| 🥇 | **GPT-4 Turbo** | 87.3% |"));
    }

    #[test]
    fn test_statistics_skip_empty_categories() {
        let document = document_with_ides(2);
        let report = render_markdown(&document).unwrap();

        assert!(report.contains("- **LLMs Tracked**: 0"));
        assert!(report.contains("- **IDEs Tracked**: 2"));
        assert!(report.contains("- **Top IDE**: ide-0 (100)"));
        assert!(!report.contains("Top LLM"));
        assert!(!report.contains("Top Agent"));
    }

    #[test]
    fn test_timestamp_parses_and_formats() {
        assert_eq!(
            format_timestamp("2025-06-01T12:30:00+00:00"),
            "2025-06-01 12:30 UTC"
        );
        assert_eq!(format_timestamp("2025-06-01T12:30:00Z"), "2025-06-01 12:30 UTC");
    }

    #[test]
    fn test_malformed_timestamp_falls_back_to_raw() {
        let mut document = document_with_ides(1);
        document.generated_at = "not-a-timestamp".to_string();

        let report = render_markdown(&document).unwrap();
        assert!(report.contains("*Last updated: not-a-timestamp*"));
    }

    #[test]
    fn test_sources_section_lists_provenance() {
        let document = document_with_ides(1);
        let report = render_markdown(&document).unwrap();

        assert!(report.contains("## 📊 Data Sources"));
        assert!(report.contains("- Stack Overflow Developer Survey"));
    }

    #[test]
    fn test_rank_marker() {
        assert_eq!(rank_marker(1), "🥇");
        assert_eq!(rank_marker(2), "🥈");
        assert_eq!(rank_marker(3), "🥉");
        assert_eq!(rank_marker(4), "4");
        assert_eq!(rank_marker(10), "10");
    }
}
