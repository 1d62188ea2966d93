//! Reachability rules: status code and latency classification
//!
//! These run before the scored blocks and never affect a score.

use crate::analysis::rules::{Category, Finding, PageContext, Rule};

/// Latency above which the response counts as slow
pub const SLOW_RESPONSE_MS: u64 = 3000;

/// Latency above which a moderate-speed recommendation is made
pub const MODERATE_RESPONSE_MS: u64 = 1000;

pub const RULES: &[Rule] = &[
    Rule {
        name: "status-code",
        category: Category::Response,
        evaluate: status_code,
    },
    Rule {
        name: "response-time",
        category: Category::Response,
        evaluate: response_time,
    },
];

fn status_code(ctx: &PageContext<'_>) -> Option<Finding> {
    let code = ctx.page.status_code;

    match code {
        500..=u16::MAX => Some(Finding::issue(format!("Server error ({})", code))),
        400..=499 => Some(Finding::issue(format!("Client error ({})", code))),
        300..=399 => Some(Finding::issue(format!("Redirect detected ({})", code))),
        _ => None,
    }
}

fn response_time(ctx: &PageContext<'_>) -> Option<Finding> {
    let elapsed = ctx.page.response_time_ms;

    if elapsed > SLOW_RESPONSE_MS {
        Some(
            Finding::issue("Slow response time (>3 seconds)")
                .and_recommend("Optimize server response time or use a CDN"),
        )
    } else if elapsed > MODERATE_RESPONSE_MS {
        Some(Finding::recommendation(format!(
            "Response time is moderate ({}ms); consider caching or a CDN",
            elapsed
        )))
    } else {
        None
    }
}
