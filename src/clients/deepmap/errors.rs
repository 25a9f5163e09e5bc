//! Error type of the DeepMap session client.
//!
//! Every [`DeepmapClient`](crate::DeepmapClient) operation returns
//! [`DeepmapError`]:
//!
//! - [`DeepmapError::Validation`]: The arguments were rejected before any network call
//! - [`DeepmapError::Http`]: The request failed, the server answered with a
//!   non-2xx status, or a success body did not decode
//!
//! # Example
//!
//! ```rust,ignore
//! use deepmap_sdk::{DeepmapError, HttpError, UserUpdate};
//!
//! match client.edit_user("42", &UserUpdate::new()).await {
//!     Err(DeepmapError::Validation(e)) => println!("not sent: {e}"),
//!     Err(DeepmapError::Http(HttpError::Response(e))) => println!("status {}", e.code),
//!     Err(e) => println!("{e}"),
//!     Ok(body) => println!("{body}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ValidationError;
use thiserror::Error;

/// Error returned by [`DeepmapClient`](crate::DeepmapClient) operations.
#[derive(Debug, Error)]
pub enum DeepmapError {
    /// The request arguments are invalid; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl DeepmapError {
    /// Returns the HTTP status code if the server answered with a non-2xx status.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Validation(_) => None,
        }
    }
}

// Verify DeepmapError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeepmapError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    #[test]
    fn test_validation_error_is_transparent() {
        let error: DeepmapError = ValidationError::NothingToUpdate.into();
        assert_eq!(error.to_string(), ValidationError::NothingToUpdate.to_string());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_status_of_response_error() {
        let error: DeepmapError = HttpError::Response(HttpResponseError {
            code: 404,
            body: json!({"error": "not found"}),
            error_reference: None,
        })
        .into();

        assert_eq!(error.status(), Some(404));
        assert!(error.to_string().contains("404"));
    }
}
