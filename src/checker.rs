//! End-to-end website check
//!
//! normalize URL → fetch → (failure: terminal report) → parse → rules → report

use crate::analysis::{analyze_page, Report};
use crate::config::FetcherConfig;
use crate::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::url::normalize_target;
use reqwest::Client;

/// Runs checks with one reusable HTTP client
///
/// Cheap to clone; every call to [`Checker::check`] is independent, so a
/// single checker can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Checker {
    client: Client,
    config: FetcherConfig,
}

impl Checker {
    /// Creates a checker with a client built from `config`
    pub fn new(config: FetcherConfig) -> crate::Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    /// Checks one target and produces its report
    ///
    /// Never fails: an unreachable target yields an error-status report.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use site_audit::config::FetcherConfig;
    /// use site_audit::Checker;
    ///
    /// # async fn example() -> site_audit::Result<()> {
    /// let checker = Checker::new(FetcherConfig::default())?;
    /// let report = checker.check("example.com").await;
    /// println!("{}: {}", report.url, report.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check(&self, raw_url: &str) -> Report {
        let url = normalize_target(raw_url);
        tracing::info!("Checking {}", url);

        let report = match fetch_page(&self.client, &self.config, &url).await {
            FetchOutcome::Success(page) => analyze_page(&url, &page),
            FetchOutcome::Failed { message } => {
                tracing::warn!("Failed to fetch {}: {}", url, message);
                Report::fetch_failed(&url, &message)
            }
        };

        tracing::info!(
            "Checked {}: status={} issues={} recommendations={} seo={:?} performance={:?} security={:?}",
            report.url,
            report.status,
            report.issues.len(),
            report.recommendations.len(),
            report.seo_score,
            report.performance_score,
            report.security_score
        );

        report
    }
}
