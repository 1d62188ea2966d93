//! Rule table primitives
//!
//! A check is an ordered list of [`Rule`]s. Each rule is a pure function of
//! the immutable [`PageContext`] that may produce one [`Finding`]; the
//! [`Scorecard`] applies findings in rule order, so the order of issues and
//! recommendations is exactly the order of the table.

use crate::analysis::document::DocumentView;
use crate::fetcher::PageSnapshot;

/// Everything a rule may look at
pub struct PageContext<'a> {
    /// The normalized target URL
    pub url: &'a str,

    /// The fetched response
    pub page: &'a PageSnapshot,

    /// The parsed body
    pub document: &'a dyn DocumentView,
}

/// The score a rule's deduction applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Reachability and latency; never scored
    Response,
    Seo,
    Security,
    Performance,
}

/// Output of a rule that fired
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finding {
    pub issue: Option<String>,
    pub recommendation: Option<String>,
    pub deduction: u32,
}

impl Finding {
    /// A finding that reports a problem
    pub fn issue(message: impl Into<String>) -> Self {
        Self {
            issue: Some(message.into()),
            ..Self::default()
        }
    }

    /// A finding that only suggests an improvement
    pub fn recommendation(message: impl Into<String>) -> Self {
        Self {
            recommendation: Some(message.into()),
            ..Self::default()
        }
    }

    /// Adds a recommendation to an issue finding
    pub fn and_recommend(mut self, message: impl Into<String>) -> Self {
        self.recommendation = Some(message.into());
        self
    }

    /// Sets the points deducted from the rule's category
    pub fn deduct(mut self, points: u32) -> Self {
        self.deduction = points;
        self
    }
}

/// One row of the checklist
pub struct Rule {
    /// Stable identifier used in logs
    pub name: &'static str,
    pub category: Category,
    pub evaluate: fn(&PageContext<'_>) -> Option<Finding>,
}

/// A category score: starts at 100, only decreases, floors at 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 100;

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn deduct(&mut self, points: u32) {
        let remaining = u32::from(self.0).saturating_sub(points);
        self.0 = remaining as u8;
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

/// Accumulated results of running rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub seo: Score,
    pub security: Score,
    pub performance: Score,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one rule and applies its finding, if any
    pub fn apply(&mut self, rule: &Rule, ctx: &PageContext<'_>) {
        let Some(finding) = (rule.evaluate)(ctx) else {
            return;
        };

        tracing::debug!(
            "Rule {} fired: issue={:?} recommendation={:?} deduction={}",
            rule.name,
            finding.issue,
            finding.recommendation,
            finding.deduction
        );

        if let Some(issue) = finding.issue {
            self.issues.push(issue);
        }
        if let Some(recommendation) = finding.recommendation {
            self.recommendations.push(recommendation);
        }

        if let Some(score) = self.score_mut(rule.category) {
            score.deduct(finding.deduction);
        }
    }

    /// Applies every rule in order
    pub fn run<'r>(&mut self, rules: impl IntoIterator<Item = &'r Rule>, ctx: &PageContext<'_>) {
        for rule in rules {
            self.apply(rule, ctx);
        }
    }

    fn score_mut(&mut self, category: Category) -> Option<&mut Score> {
        match category {
            Category::Response => None,
            Category::Seo => Some(&mut self.seo),
            Category::Security => Some(&mut self.security),
            Category::Performance => Some(&mut self.performance),
        }
    }
}
