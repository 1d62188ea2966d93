//! Site-Audit: a single-page website health checker
//!
//! This crate fetches one web page, parses its HTML, and scores it against a
//! fixed checklist of SEO, security and performance rules.

pub mod analysis;
pub mod checker;
pub mod config;
pub mod fetcher;
pub mod output;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Audit operations
///
/// Fetch failures are deliberately absent: an unreachable site is a
/// reportable outcome, not an error.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Site-Audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

// Re-export commonly used types
pub use analysis::{Report, ReportStatus};
pub use checker::Checker;
pub use config::Config;
pub use url::normalize_target;
