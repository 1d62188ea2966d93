//! Security rules: transport scheme and hardening headers

use crate::analysis::rules::{Category, Finding, PageContext, Rule};
use crate::url::is_https;

const HTTPS_POINTS: u32 = 30;
const HEADER_POINTS: u32 = 10;

/// Hardening headers checked, in report order
pub const SECURITY_HEADERS: [&str; 4] = [
    "Strict-Transport-Security",
    "X-Frame-Options",
    "X-Content-Type-Options",
    "Content-Security-Policy",
];

pub const RULES: &[Rule] = &[
    Rule {
        name: "https",
        category: Category::Security,
        evaluate: https,
    },
    Rule {
        name: "header-strict-transport-security",
        category: Category::Security,
        evaluate: strict_transport_security,
    },
    Rule {
        name: "header-x-frame-options",
        category: Category::Security,
        evaluate: x_frame_options,
    },
    Rule {
        name: "header-x-content-type-options",
        category: Category::Security,
        evaluate: x_content_type_options,
    },
    Rule {
        name: "header-content-security-policy",
        category: Category::Security,
        evaluate: content_security_policy,
    },
];

fn https(ctx: &PageContext<'_>) -> Option<Finding> {
    if is_https(ctx.url) {
        return None;
    }

    Some(
        Finding::issue("Website is not using HTTPS")
            .and_recommend("Enable HTTPS to protect data in transit")
            .deduct(HTTPS_POINTS),
    )
}

fn missing_header(ctx: &PageContext<'_>, name: &str) -> Option<Finding> {
    if ctx.page.has_header(name) {
        return None;
    }

    Some(Finding::recommendation(format!("Consider adding {} header", name)).deduct(HEADER_POINTS))
}

fn strict_transport_security(ctx: &PageContext<'_>) -> Option<Finding> {
    missing_header(ctx, SECURITY_HEADERS[0])
}

fn x_frame_options(ctx: &PageContext<'_>) -> Option<Finding> {
    missing_header(ctx, SECURITY_HEADERS[1])
}

fn x_content_type_options(ctx: &PageContext<'_>) -> Option<Finding> {
    missing_header(ctx, SECURITY_HEADERS[2])
}

fn content_security_policy(ctx: &PageContext<'_>) -> Option<Finding> {
    missing_header(ctx, SECURITY_HEADERS[3])
}
