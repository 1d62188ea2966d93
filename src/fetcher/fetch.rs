//! HTTP fetcher implementation
//!
//! This module handles the single outbound request of a check:
//! - Building an HTTP client with the configured timeout and redirect cap
//! - One GET request, any status code accepted
//! - Wall-clock latency measurement
//! - Converting transport failures into a reportable outcome

use crate::config::FetcherConfig;
use reqwest::{redirect::Policy, Client};
use std::collections::BTreeMap;
use std::time::Instant;

/// Immutable view of one HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Final URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Milliseconds from just before the request to the end of the body
    pub response_time_ms: u64,

    /// Response headers keyed by lower-cased name
    pub headers: BTreeMap<String, String>,

    /// Page body content
    pub body: String,
}

impl PageSnapshot {
    /// Looks up a response header, ignoring the case of `name`
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns true if the response carries the header
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }
}

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// A response was received (whatever its status code)
    Success(PageSnapshot),

    /// No response: DNS, connect, TLS, timeout, redirect cap, or body read failure
    Failed {
        /// Error description
        message: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use site_audit::config::FetcherConfig;
/// use site_audit::fetcher::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .redirect(redirect_policy(config.max_redirects))
        .use_rustls_tls()
        .gzip(true)
        .brotli(true)
        .build()
}

/// Follows at most `max_redirects` hops; one more is a failed fetch
///
/// `attempt.previous()` includes the originally requested URL, so the
/// n-th redirect sees n previous URLs.
fn redirect_policy(max_redirects: usize) -> Policy {
    Policy::custom(move |attempt| {
        if attempt.previous().len() > max_redirects {
            attempt.error(TooManyRedirects {
                limit: max_redirects,
            })
        } else {
            attempt.follow()
        }
    })
}

/// Redirect chain longer than the configured cap
#[derive(Debug, thiserror::Error)]
#[error("too many redirects (limit {limit})")]
struct TooManyRedirects {
    limit: usize,
}

/// Fetches a URL once and captures the response envelope
///
/// # Outcome Mapping
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | Any HTTP status (2xx-5xx) | `Success` |
/// | Timeout | `Failed` ("Request timed out after Ns") |
/// | Connect / DNS / TLS error | `Failed` (client error text) |
/// | Redirect chain over the cap | `Failed` (client error text) |
/// | Body could not be read | `Failed` (client error text) |
///
/// There is no retry.
pub async fn fetch_page(client: &Client, config: &FetcherConfig, url: &str) -> FetchOutcome {
    let started = Instant::now();

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return failure(config, e),
    };

    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();
    let headers = collect_headers(response.headers());

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return failure(config, e),
    };

    let response_time_ms = started.elapsed().as_millis() as u64;

    tracing::debug!(
        "Fetched {} -> {} ({}) in {}ms, {} bytes",
        url,
        final_url,
        status_code,
        response_time_ms,
        body.len()
    );

    FetchOutcome::Success(PageSnapshot {
        final_url,
        status_code,
        response_time_ms,
        headers,
        body,
    })
}

/// Flattens a header map, joining repeated headers with ", "
fn collect_headers(headers: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    collected
}

/// Classifies a transport error into a failure message
fn failure(config: &FetcherConfig, error: reqwest::Error) -> FetchOutcome {
    let message = if error.is_timeout() {
        format!("Request timed out after {}s", config.timeout_secs)
    } else {
        describe_error(&error)
    };

    FetchOutcome::Failed { message }
}

/// Renders an error followed by its source chain, skipping causes already
/// contained in the message
fn describe_error(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }

    message
}
