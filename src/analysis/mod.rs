//! Analysis module: turns a fetched page into a scored report
//!
//! This module contains:
//! - The document view used by rules to query parsed HTML
//! - The rule table primitives and scorecard
//! - The response, SEO, security and performance rule blocks
//! - The report model and status derivation
//!
//! Rules run in a fixed order: response, SEO, security, performance. Each
//! block lists its rules in table order.

mod document;
pub mod performance;
mod report;
pub mod response;
mod rules;
pub mod security;
pub mod seo;

pub use document::{DocumentView, HtmlDocument};
pub use report::{Report, ReportStatus, ALL_CLEAR};
pub use rules::{Category, Finding, PageContext, Rule, Score, Scorecard};

use crate::fetcher::PageSnapshot;

/// The full checklist in execution order
pub fn rule_table() -> impl Iterator<Item = &'static Rule> {
    response::RULES
        .iter()
        .chain(seo::RULES)
        .chain(security::RULES)
        .chain(performance::RULES)
}

/// Parses the page body and runs the full checklist
///
/// # Arguments
///
/// * `url` - The normalized target URL (its scheme drives the HTTPS rule)
/// * `page` - The fetched response
///
/// # Example
///
/// ```
/// use site_audit::analysis::analyze_page;
/// use site_audit::fetcher::PageSnapshot;
///
/// let page = PageSnapshot {
///     final_url: "https://example.com/".to_string(),
///     status_code: 200,
///     response_time_ms: 80,
///     headers: Default::default(),
///     body: "<title>Home</title>".to_string(),
/// };
/// let report = analyze_page("https://example.com", &page);
/// assert_eq!(report.status_code, Some(200));
/// ```
pub fn analyze_page(url: &str, page: &PageSnapshot) -> Report {
    let document = HtmlDocument::parse(&page.body);
    analyze_document(url, page, &document)
}

/// Runs the full checklist against an already-parsed document
pub fn analyze_document(url: &str, page: &PageSnapshot, document: &dyn DocumentView) -> Report {
    let ctx = PageContext {
        url,
        page,
        document,
    };

    let mut card = Scorecard::new();
    card.run(rule_table(), &ctx);

    Report::from_scorecard(url, page, card)
}
