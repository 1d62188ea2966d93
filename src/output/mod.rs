//! Output module for presenting reports outside the HTTP API
//!
//! This module handles:
//! - Rendering a report as markdown for the terminal
//! - Saving a rendered report to disk
//! - Serializing a report as JSON

mod markdown;

pub use markdown::{format_markdown_report, write_markdown_report};

use crate::analysis::Report;

/// Serializes a report in the same JSON shape the HTTP API returns
pub fn format_json_report(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
