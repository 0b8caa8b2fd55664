//! Markdown report generation.

pub mod generator;

pub use generator::render_markdown;
