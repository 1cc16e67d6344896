//! Transport error types.
//!
//! This module defines the error taxonomy of the transport layer:
//! invalid input that prevents a call from being attempted, typed
//! failure-status errors raised by the file-download path, and the
//! catch-all general failure for connection-level problems.
//!
//! HTTP-level non-2xx statuses are deliberately NOT part of this taxonomy
//! for the ordinary request path; they are passed through as response data
//! for the SDK core to classify.

use std::fmt;

/// Errors that can occur in the transport layer.
#[derive(Debug)]
pub enum TransportError {
    /// The method string does not resolve to a known HTTP verb.
    InvalidMethod(String),

    /// The URL could not be parsed or is not an absolute http(s) URI.
    InvalidUrl(String),

    /// The requested resource does not exist (HTTP 404, download path).
    ///
    /// Carries the error body text returned by the server.
    NotFound(String),

    /// The access key was rejected (HTTP 401, download path).
    ///
    /// Carries the error body text returned by the server.
    Unauthorized(String),

    /// The call could not be attempted or completed.
    ///
    /// This covers connection failures, DNS resolution errors, client
    /// construction failures, stream-write failures, and any failure
    /// status the download path cannot classify more precisely.
    General(String),

    /// The requested capability is not provided by this transport.
    ///
    /// Raised by the raw-connection surface, which this adapter
    /// intentionally opts out of.
    Unsupported(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::InvalidMethod(method) => write!(f, "Invalid HTTP method: {}", method),
            TransportError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            TransportError::NotFound(body) => write!(f, "Not found: {}", body),
            TransportError::Unauthorized(body) => write!(f, "Unauthorized: {}", body),
            TransportError::General(msg) => write!(f, "Transport failure: {}", msg),
            TransportError::Unsupported(msg) => write!(f, "Unsupported operation: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

/// Convert reqwest errors to TransportError.
///
/// Everything reqwest can raise on its own is a failure to perform the
/// call, so it maps to the general variant; non-2xx statuses never reach
/// this conversion because the client is configured to hand them back as
/// ordinary responses.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::General(format!("request timed out: {}", err))
        } else if err.is_connect() {
            TransportError::General(format!("connection failed: {}", err))
        } else if err.is_builder() {
            TransportError::General(format!("failed to build request: {}", err))
        } else {
            TransportError::General(err.to_string())
        }
    }
}

/// Convert URL parsing errors to TransportError.
impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidUrl(err.to_string())
    }
}

/// Convert I/O errors (file-download stream writes) to TransportError.
impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::General(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let method_err = TransportError::InvalidMethod("FROBNICATE".to_string());
        assert_eq!(
            format!("{}", method_err),
            "Invalid HTTP method: FROBNICATE"
        );

        let url_err = TransportError::InvalidUrl("not a url".to_string());
        assert_eq!(format!("{}", url_err), "Invalid URL: not a url");

        let not_found = TransportError::NotFound("no such message".to_string());
        assert_eq!(format!("{}", not_found), "Not found: no such message");

        let unauthorized = TransportError::Unauthorized("bad key".to_string());
        assert_eq!(format!("{}", unauthorized), "Unauthorized: bad key");

        let general = TransportError::General("connection refused".to_string());
        assert_eq!(format!("{}", general), "Transport failure: connection refused");
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: &dyn std::error::Error = &TransportError::Unsupported("raw".to_string());
        assert_eq!(format!("{}", err), "Unsupported operation: raw");
    }

    #[test]
    fn test_from_url_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: TransportError = parse_err.into();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let err: TransportError = io_err.into();
        match err {
            TransportError::General(msg) => assert!(msg.contains("disk full")),
            _ => panic!("Expected General error"),
        }
    }
}
