//! Performance rules: script and stylesheet counts, whitespace heuristic

use crate::analysis::rules::{Category, Finding, PageContext, Rule};

const INLINE_SCRIPTS: &str = "script:not([src])";
const EXTERNAL_SCRIPTS: &str = "script[src]";
const STYLESHEETS: &str = r#"link[rel="stylesheet"]"#;

pub const MAX_INLINE_SCRIPTS: usize = 5;
pub const MAX_EXTERNAL_SCRIPTS: usize = 15;
pub const MAX_STYLESHEETS: usize = 10;

pub const RULES: &[Rule] = &[
    Rule {
        name: "inline-scripts",
        category: Category::Performance,
        evaluate: inline_scripts,
    },
    Rule {
        name: "external-scripts",
        category: Category::Performance,
        evaluate: external_scripts,
    },
    Rule {
        name: "stylesheets",
        category: Category::Performance,
        evaluate: stylesheets,
    },
    Rule {
        name: "unminified-html",
        category: Category::Performance,
        evaluate: unminified_html,
    },
];

fn inline_scripts(ctx: &PageContext<'_>) -> Option<Finding> {
    let count = ctx.document.count(INLINE_SCRIPTS);

    (count > MAX_INLINE_SCRIPTS).then(|| {
        Finding::recommendation(format!(
            "Reduce inline scripts ({} found); move them to external files",
            count
        ))
        .deduct(10)
    })
}

fn external_scripts(ctx: &PageContext<'_>) -> Option<Finding> {
    let count = ctx.document.count(EXTERNAL_SCRIPTS);

    (count > MAX_EXTERNAL_SCRIPTS).then(|| {
        Finding::recommendation(format!(
            "Reduce external scripts ({} found); bundle or defer them",
            count
        ))
        .deduct(10)
    })
}

fn stylesheets(ctx: &PageContext<'_>) -> Option<Finding> {
    let count = ctx.document.count(STYLESHEETS);

    (count > MAX_STYLESHEETS).then(|| {
        Finding::recommendation(format!(
            "Reduce stylesheets ({} found); combine them",
            count
        ))
        .deduct(10)
    })
}

// Raw-text heuristic: four spaces or three newlines in a row anywhere in the body.
fn unminified_html(ctx: &PageContext<'_>) -> Option<Finding> {
    let body = &ctx.page.body;

    (body.contains("    ") || body.contains("\n\n\n"))
        .then(|| Finding::recommendation("Minify HTML to reduce page size").deduct(5))
}
