//! Fetcher module for the single outbound request of a check
//!
//! This module contains:
//! - HTTP client construction from configuration
//! - The one-shot GET with latency measurement
//! - The response snapshot handed to the analyzer

mod fetch;

pub use fetch::{build_http_client, fetch_page, FetchOutcome, PageSnapshot};
