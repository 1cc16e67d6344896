//! Failure-status interpretation shared with the SDK core.
//!
//! When the file-download path receives a non-success status it cannot
//! return the body as data; it maps status code plus error body to one of
//! the typed transport errors instead. The mapping is intentionally small:
//! 404 and 401 get their own variants, everything else is a general
//! failure carrying the body text.

use crate::transport::error::TransportError;

/// HTTP status codes with a dedicated error variant.
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_UNAUTHORIZED: u16 = 401;

/// Maps a failure status code and error body to a typed transport error.
///
/// # Arguments
///
/// * `status_code` - The non-success HTTP status code
/// * `body` - The textual error body returned by the server
pub fn interpret_failure_status(status_code: u16, body: &str) -> TransportError {
    match status_code {
        STATUS_NOT_FOUND => TransportError::NotFound(body.to_string()),
        STATUS_UNAUTHORIZED => TransportError::Unauthorized(body.to_string()),
        _ => TransportError::General(format!("status {}: {}", status_code, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let err = interpret_failure_status(404, "message not found");
        match err {
            TransportError::NotFound(body) => assert_eq!(body, "message not found"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_unauthorized() {
        let err = interpret_failure_status(401, "incorrect access key");
        match err {
            TransportError::Unauthorized(body) => assert_eq!(body, "incorrect access key"),
            _ => panic!("Expected Unauthorized error"),
        }
    }

    #[test]
    fn test_other_statuses_are_general() {
        for status in [400, 403, 405, 422, 429, 500, 502, 503] {
            let err = interpret_failure_status(status, "something went wrong");
            match err {
                TransportError::General(msg) => {
                    assert!(msg.contains(&status.to_string()));
                    assert!(msg.contains("something went wrong"));
                }
                _ => panic!("Expected General error for status {}", status),
            }
        }
    }

    #[test]
    fn test_empty_body_is_carried() {
        let err = interpret_failure_status(404, "");
        match err {
            TransportError::NotFound(body) => assert!(body.is_empty()),
            _ => panic!("Expected NotFound error"),
        }
    }
}
