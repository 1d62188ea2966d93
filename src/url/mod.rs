//! URL handling module for Site-Audit
//!
//! Targets typed by users often omit the scheme; this module turns them into
//! something the fetcher can request.

mod normalize;

pub use normalize::{is_https, normalize_target};
