//! HTTP-specific error types for the DeepMap SDK.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use deepmap_sdk::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.body);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::InvalidBody(e)) => println!("Unexpected body: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The decoded error body is kept as-is so callers can branch on whatever the
/// server reported. Bodies that are not JSON are wrapped as
/// `{"raw_body": "<text>"}`.
///
/// # Example
///
/// ```rust
/// use deepmap_sdk::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: json!({"error": "Not found"}),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), r#"Request failed with status 404: {"error":"Not found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("Request failed with status {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST requests
/// - Body provided without `body_type`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A successful response carried a body of an unexpected shape.
    #[error("Failed to decode response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Network or connection error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if the server answered with a non-2xx status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_includes_status_and_body() {
        let error = HttpResponseError {
            code: 403,
            body: json!({"error": "Forbidden"}),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("Forbidden"));
    }

    #[test]
    fn test_http_response_error_keeps_request_id() {
        let error = HttpResponseError {
            code: 500,
            body: json!({"raw_body": "oops"}),
            error_reference: Some("abc-123".to_string()),
        };
        assert_eq!(error.error_reference, Some("abc-123".to_string()));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use post without specifying data."
        );
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_status_is_only_reported_for_response_errors() {
        let error = HttpError::from(HttpResponseError {
            code: 404,
            body: json!({}),
            error_reference: None,
        });
        assert_eq!(error.status(), Some(404));

        let error = HttpError::from(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(error.status(), None);
    }
}
