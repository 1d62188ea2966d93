//! Integration tests for Site-Audit
//!
//! These tests use wiremock to stand in for the target website and drive
//! both the checker directly and the HTTP API end-to-end.

mod check_tests;
mod server_tests;
