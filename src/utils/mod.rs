//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Fingerprint-based short code generation
//! - [`url_validator`] - Acceptance check for URLs to shorten
//! - [`base_url`] - Public base URL resolution from configuration or headers

pub mod base_url;
pub mod code_generator;
pub mod url_validator;
