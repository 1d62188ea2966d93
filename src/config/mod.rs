//! Configuration module for Site-Audit
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All keys are optional; the defaults match the documented fetch contract
//! (10 second timeout, at most 5 redirects).
//!
//! # Example
//!
//! ```no_run
//! use site_audit::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("site-audit.toml")).unwrap();
//! println!("Listening on {}", config.server.bind);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, ServerConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
