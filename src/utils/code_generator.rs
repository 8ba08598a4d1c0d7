//! Short code generation.
//!
//! Codes are fingerprints: the first [`CODE_LENGTH`] hex characters of the
//! SHA-256 digest of the input. The same URL therefore always yields the same
//! first candidate, and a collision is resolved by fingerprinting the URL again
//! with a nonce appended (see [`salted_input`]).

use sha2::{Digest, Sha256};

/// Number of characters in a short code.
pub const CODE_LENGTH: usize = 8;

/// Produces candidate short codes from an input string.
///
/// Implemented by [`HashCodeGenerator`] and by any `Fn(&str) -> String`, which
/// lets tests plug in a generator that collides on purpose.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, input: &str) -> String;
}

/// Default generator backed by [`generate_code`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HashCodeGenerator;

impl CodeGenerator for HashCodeGenerator {
    fn generate(&self, input: &str) -> String {
        generate_code(input)
    }
}

impl<F> CodeGenerator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn generate(&self, input: &str) -> String {
        self(input)
    }
}

/// Fingerprints `input` into an 8-character lowercase hex code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code("https://example.com");
/// assert_eq!(code.len(), 8);
/// assert_eq!(code, generate_code("https://example.com"));
/// ```
pub fn generate_code(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut code = hex::encode(digest);
    code.truncate(CODE_LENGTH);
    code
}

/// Builds the input for a retry after a collision.
///
/// The URL is suffixed with a nanosecond timestamp and the attempt number, so
/// consecutive retries within the same clock tick still differ.
pub fn salted_input(url: &str, attempt: usize) -> String {
    let nonce = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{url}{nonce}-{attempt}")
}
