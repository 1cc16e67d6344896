//! Transport contract and the reqwest-backed adapter.
//!
//! The SDK core talks to a [`Transport`]: send a request and get body plus
//! status back, or download a file to a path. This module defines that
//! contract, the error taxonomy, the shared failure-status interpreter,
//! and the one concrete implementation over `reqwest`.

pub mod client;
pub mod config;
pub mod error;
pub mod status;

pub use client::ReqwestTransport;
pub use config::TransportConfig;
pub use error::TransportError;
pub use status::interpret_failure_status;

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::models::ApiResponse;

/// The transport contract consumed by the SDK core.
///
/// Implementations perform exactly one HTTP call per invocation, with no
/// retries and no status interpretation on the ordinary request path.
pub trait Transport {
    /// Sends an HTTP request and returns its body and status code.
    ///
    /// Non-2xx statuses are returned as data; classifying them is the
    /// caller's job. The call only fails when it cannot be attempted
    /// (unknown verb, malformed URL) or when the connection itself fails.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method name; must resolve to a known verb
    /// * `url` - Absolute http(s) URL
    /// * `payload` - Optional structured body, encoded per the fixed
    ///   verb-based content-type rule
    fn send_request<P: Serialize>(
        &self,
        method: &str,
        url: &str,
        payload: Option<&P>,
    ) -> Result<ApiResponse, TransportError>;

    /// Issues a GET request and stores the response body at `file_path`.
    ///
    /// On a success status the body is streamed straight to the file and
    /// the path is returned. On a failure status the error body is read
    /// as text and routed through [`interpret_failure_status`].
    fn download_file(&self, url: &str, file_path: &Path) -> Result<PathBuf, TransportError>;

    /// Opens a raw connection to the given URL.
    ///
    /// Part of the capability surface required by the SDK core. Adapters
    /// that only support structured requests fail this immediately.
    fn open_raw_connection(&self, url: &str) -> Result<Box<dyn Read>, TransportError>;
}

/// Validates that the URL is well-formed, absolute, and http(s).
///
/// # Returns
///
/// `Ok(())` if the URL is usable, or `Err(TransportError::InvalidUrl)`
/// if it cannot be parsed or uses another scheme.
pub(crate) fn validate_url(url: &str) -> Result<(), TransportError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(TransportError::InvalidUrl(format!(
            "only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_valid_http() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("http://example.com/messages").is_ok());
        assert!(validate_url("http://example.com:8080").is_ok());
    }

    #[test]
    fn test_validate_url_valid_https() {
        assert!(validate_url("https://rest.example.com").is_ok());
        assert!(validate_url("https://rest.example.com/v1/messages?limit=10").is_ok());
    }

    #[test]
    fn test_validate_url_invalid() {
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("").is_err());
        assert!(validate_url("/messages").is_err());
        assert!(validate_url("://missing-scheme").is_err());
    }

    #[test]
    fn test_validate_url_unsupported_scheme() {
        let result = validate_url("ftp://example.com");
        match result {
            Err(TransportError::InvalidUrl(msg)) => assert!(msg.contains("ftp")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }
}
