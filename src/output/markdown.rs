//! Markdown report rendering
//!
//! Used by the command line to print a report, or to save it next to other
//! audit notes.

use crate::analysis::Report;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a report as markdown to a file
///
/// # Arguments
///
/// * `report` - The report to render
/// * `output_path` - Path where the markdown file should be written
pub fn write_markdown_report(report: &Report, output_path: &Path) -> std::io::Result<()> {
    let markdown = format_markdown_report(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a report as markdown
pub fn format_markdown_report(report: &Report) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Site Audit: {}\n\n", report.url));

    md.push_str(&format!(
        "- **Status**: {}\n",
        report.status.as_str().to_uppercase()
    ));
    md.push_str(&format!(
        "- **Status Code**: {}\n",
        display_or_dash(report.status_code)
    ));
    md.push_str(&format!(
        "- **Response Time**: {}\n",
        report
            .response_time
            .map(|ms| format!("{} ms", ms))
            .unwrap_or_else(|| "-".to_string())
    ));
    md.push_str(&format!("- **Checked At**: {}\n\n", report.timestamp));

    if report.seo_score.is_some()
        || report.performance_score.is_some()
        || report.security_score.is_some()
    {
        md.push_str("## Scores\n\n");
        md.push_str("| Category | Score |\n");
        md.push_str("|----------|-------|\n");
        md.push_str(&format!("| SEO | {} |\n", display_or_dash(report.seo_score)));
        md.push_str(&format!(
            "| Performance | {} |\n",
            display_or_dash(report.performance_score)
        ));
        md.push_str(&format!(
            "| Security | {} |\n\n",
            display_or_dash(report.security_score)
        ));
    }

    md.push_str(&format!("## Issues ({})\n\n", report.issues.len()));
    push_list(&mut md, &report.issues);

    md.push_str(&format!(
        "## Recommendations ({})\n\n",
        report.recommendations.len()
    ));
    push_list(&mut md, &report.recommendations);

    md
}

fn push_list(md: &mut String, items: &[String]) {
    if items.is_empty() {
        md.push_str("_None_\n\n");
        return;
    }

    for item in items {
        md.push_str(&format!("- {}\n", item));
    }
    md.push('\n');
}

fn display_or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}
