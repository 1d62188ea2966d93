//! SEO rules
//!
//! | Rule | Fires when | Output | Deduction |
//! |------|------------|--------|-----------|
//! | title-missing | no non-empty `<title>` | issue | 15 |
//! | title-length | title over 60 characters | recommendation | 5 |
//! | meta-description-missing | no non-empty description `content` | issue | 15 |
//! | meta-description-length | description over 160 characters | recommendation | 5 |
//! | h1-missing | no `<h1>` | issue | 10 |
//! | h1-multiple | more than one `<h1>` | recommendation | 5 |
//! | image-alt | `<img>` without `alt` | issue | 2 each, at most 10 |
//! | viewport-missing | no non-empty viewport `content` | issue | 10 |

use crate::analysis::rules::{Category, Finding, PageContext, Rule};

const TITLE: &str = "title";
const META_DESCRIPTION: &str = r#"meta[name="description"]"#;
const META_VIEWPORT: &str = r#"meta[name="viewport"]"#;
const H1: &str = "h1";
const IMG_WITHOUT_ALT: &str = "img:not([alt])";

pub const MAX_TITLE_CHARS: usize = 60;
pub const MAX_DESCRIPTION_CHARS: usize = 160;

const IMAGE_ALT_POINTS_EACH: u32 = 2;
const IMAGE_ALT_POINTS_CAP: u32 = 10;

pub const RULES: &[Rule] = &[
    Rule {
        name: "title-missing",
        category: Category::Seo,
        evaluate: title_missing,
    },
    Rule {
        name: "title-length",
        category: Category::Seo,
        evaluate: title_length,
    },
    Rule {
        name: "meta-description-missing",
        category: Category::Seo,
        evaluate: description_missing,
    },
    Rule {
        name: "meta-description-length",
        category: Category::Seo,
        evaluate: description_length,
    },
    Rule {
        name: "h1-missing",
        category: Category::Seo,
        evaluate: h1_missing,
    },
    Rule {
        name: "h1-multiple",
        category: Category::Seo,
        evaluate: h1_multiple,
    },
    Rule {
        name: "image-alt",
        category: Category::Seo,
        evaluate: image_alt,
    },
    Rule {
        name: "viewport-missing",
        category: Category::Seo,
        evaluate: viewport_missing,
    },
];

fn title(ctx: &PageContext<'_>) -> Option<String> {
    ctx.document.first_text(TITLE).filter(|t| !t.is_empty())
}

/// `content` of the first matching meta tag; empty counts as absent
fn meta_content(ctx: &PageContext<'_>, selector: &str) -> Option<String> {
    ctx.document
        .first_attr(selector, "content")
        .filter(|c| !c.is_empty())
}

fn title_missing(ctx: &PageContext<'_>) -> Option<Finding> {
    match title(ctx) {
        Some(_) => None,
        None => Some(Finding::issue("Missing page title").deduct(15)),
    }
}

fn title_length(ctx: &PageContext<'_>) -> Option<Finding> {
    let length = title(ctx)?.chars().count();

    (length > MAX_TITLE_CHARS).then(|| {
        Finding::recommendation(format!(
            "Title is too long ({} characters); keep it under {}",
            length, MAX_TITLE_CHARS
        ))
        .deduct(5)
    })
}

fn description_missing(ctx: &PageContext<'_>) -> Option<Finding> {
    match meta_content(ctx, META_DESCRIPTION) {
        Some(_) => None,
        None => Some(Finding::issue("Missing meta description").deduct(15)),
    }
}

fn description_length(ctx: &PageContext<'_>) -> Option<Finding> {
    let length = meta_content(ctx, META_DESCRIPTION)?.chars().count();

    (length > MAX_DESCRIPTION_CHARS).then(|| {
        Finding::recommendation(format!(
            "Meta description is too long ({} characters); keep it under {}",
            length, MAX_DESCRIPTION_CHARS
        ))
        .deduct(5)
    })
}

fn h1_missing(ctx: &PageContext<'_>) -> Option<Finding> {
    (ctx.document.count(H1) == 0).then(|| Finding::issue("No H1 heading found").deduct(10))
}

fn h1_multiple(ctx: &PageContext<'_>) -> Option<Finding> {
    let count = ctx.document.count(H1);

    (count > 1).then(|| {
        Finding::recommendation(format!(
            "Multiple H1 headings found ({}); use a single H1 per page",
            count
        ))
        .deduct(5)
    })
}

fn image_alt(ctx: &PageContext<'_>) -> Option<Finding> {
    let missing = ctx.document.count(IMG_WITHOUT_ALT);
    if missing == 0 {
        return None;
    }

    let points = u32::try_from(missing)
        .unwrap_or(u32::MAX)
        .saturating_mul(IMAGE_ALT_POINTS_EACH)
        .min(IMAGE_ALT_POINTS_CAP);

    Some(Finding::issue(format!("{} images missing alt text", missing)).deduct(points))
}

fn viewport_missing(ctx: &PageContext<'_>) -> Option<Finding> {
    match meta_content(ctx, META_VIEWPORT) {
        Some(_) => None,
        None => Some(Finding::issue("Missing viewport meta tag").deduct(10)),
    }
}
