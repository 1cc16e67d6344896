//! HTTP response data models.
//!
//! This module defines the response structure handed back to the SDK core:
//! the raw body text and the numeric status code, nothing else. Status
//! interpretation belongs to the SDK core, not the transport.

use serde::{Deserialize, Serialize};

/// Represents an HTTP response received from the messaging API.
///
/// Both fields are always present; a response with no body carries the
/// empty string. The body is returned exactly as the server sent it
/// (content compression is disabled at the client), so callers can rely
/// on byte-for-byte fidelity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Response body as text.
    pub body: String,

    /// HTTP status code (e.g., 200, 404, 500).
    ///
    /// Non-2xx codes are data at this layer, not errors.
    pub status_code: u16,
}

impl ApiResponse {
    /// Creates a new ApiResponse from a body and status code.
    pub fn new(body: String, status_code: u16) -> Self {
        Self { body, status_code }
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

impl std::fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status_code, self.body)
    }
}
