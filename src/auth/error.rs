//! Authentication error types for the DeepMap SDK.
//!
//! - [`AuthError::LoginFailed`]: The session endpoint answered with a non-2xx status
//! - [`AuthError::InvalidSessionToken`]: The returned JWT could not be decoded
//! - [`AuthError::Validation`]: The session request could not be built
//! - [`AuthError::Http`]: Wrapped HTTP client error (network, timeout, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use deepmap_sdk::{AuthError, Credential, DeepmapClient, DeepmapConfig};
//!
//! match DeepmapClient::login(DeepmapConfig::default(), credential).await {
//!     Ok(client) => println!("expires at {}", client.expiration()),
//!     Err(AuthError::LoginFailed { status, body }) => {
//!         eprintln!("Failed to login ({status}): {body}");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ValidationError;
use thiserror::Error;

/// Errors that can occur while authenticating against the DeepMap API.
///
/// `AuthError` is `Send + Sync`.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The session endpoint rejected the credential.
    #[error("Failed to login: status {status}: {body}")]
    LoginFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The decoded error body.
        body: serde_json::Value,
    },

    /// The session token returned by the server could not be decoded.
    #[error("Invalid session token: {reason}")]
    InvalidSessionToken {
        /// Why the token was rejected.
        reason: String,
    },

    /// The session request could not be built.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wrapped HTTP client error.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl AuthError {
    /// Converts an HTTP error raised by a session endpoint, turning non-2xx
    /// responses into [`AuthError::LoginFailed`].
    pub(crate) fn from_login(error: HttpError) -> Self {
        match error {
            HttpError::Response(e) => Self::LoginFailed {
                status: e.code,
                body: e.body,
            },
            other => Self::Http(other),
        }
    }
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};
    use serde_json::json;

    #[test]
    fn test_login_failed_includes_status_and_body() {
        let error = AuthError::LoginFailed {
            status: 401,
            body: json!({"error": "invalid token"}),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid token"));
    }

    #[test]
    fn test_from_login_maps_response_errors_to_login_failed() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 403,
            body: json!({"error": "forbidden"}),
            error_reference: None,
        });

        match AuthError::from_login(http_error) {
            AuthError::LoginFailed { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body["error"], "forbidden");
            }
            other => panic!("Expected LoginFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_from_login_keeps_other_http_errors() {
        let http_error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType);
        assert!(matches!(
            AuthError::from_login(http_error),
            AuthError::Http(HttpError::InvalidRequest(_))
        ));
    }
}
