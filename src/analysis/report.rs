//! The report produced by one check

use crate::analysis::rules::Scorecard;
use crate::fetcher::PageSnapshot;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue count above which a report is an error regardless of status code
pub const MAX_ISSUES_BEFORE_ERROR: usize = 5;

/// Recommendation count above which an issue-free report is still a warning
pub const MAX_RECOMMENDATIONS_BEFORE_WARNING: usize = 3;

pub const ALL_CLEAR: &str = "Great job! No critical issues detected";
const FETCH_FAILED_PREFIX: &str = "Failed to fetch website: ";
const FETCH_FAILED_ADVICE: &str = "Ensure the website is accessible and not blocking requests";

/// Overall verdict of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Warning,
    Error,
}

impl ReportStatus {
    /// Derives the verdict from the collected findings
    ///
    /// | Condition | Status |
    /// |-----------|--------|
    /// | more than 5 issues, or status code >= 500 | `Error` |
    /// | any issue, or more than 3 recommendations | `Warning` |
    /// | otherwise | `Success` |
    pub fn derive(issues: usize, recommendations: usize, status_code: Option<u16>) -> Self {
        if issues > MAX_ISSUES_BEFORE_ERROR || status_code.is_some_and(|code| code >= 500) {
            Self::Error
        } else if issues > 0 || recommendations > MAX_RECOMMENDATIONS_BEFORE_WARNING {
            Self::Warning
        } else {
            Self::Success
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of checking one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The normalized target
    pub url: String,

    pub status: ReportStatus,

    /// Absent when no response was received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    /// Milliseconds, absent when no response was received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u64>,

    pub issues: Vec<String>,

    pub recommendations: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_score: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_score: Option<u8>,

    /// RFC 3339 instant (UTC, millisecond precision)
    pub timestamp: String,
}

impl Report {
    /// Terminal report for a target that could not be fetched
    pub fn fetch_failed(url: impl Into<String>, message: &str) -> Self {
        Self {
            url: url.into(),
            status: ReportStatus::Error,
            status_code: None,
            response_time: None,
            issues: vec![format!("{}{}", FETCH_FAILED_PREFIX, message)],
            recommendations: vec![FETCH_FAILED_ADVICE.to_string()],
            seo_score: None,
            performance_score: None,
            security_score: None,
            timestamp: now(),
        }
    }

    /// Assembles a report from a completed scorecard
    ///
    /// The status is derived before the all-clear recommendation is added,
    /// so that message never affects it.
    pub fn from_scorecard(url: impl Into<String>, page: &PageSnapshot, card: Scorecard) -> Self {
        let Scorecard {
            issues,
            mut recommendations,
            seo,
            security,
            performance,
        } = card;

        let status = ReportStatus::derive(
            issues.len(),
            recommendations.len(),
            Some(page.status_code),
        );

        if issues.is_empty() {
            recommendations.push(ALL_CLEAR.to_string());
        }

        Self {
            url: url.into(),
            status,
            status_code: Some(page.status_code),
            response_time: Some(page.response_time_ms),
            issues,
            recommendations,
            seo_score: Some(seo.value()),
            performance_score: Some(performance.value()),
            security_score: Some(security.value()),
            timestamp: now(),
        }
    }

    /// Returns true if this report came from a failed fetch
    pub fn is_fetch_failure(&self) -> bool {
        self.status_code.is_none()
            && self
                .issues
                .first()
                .is_some_and(|issue| issue.starts_with(FETCH_FAILED_PREFIX))
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
