//! Error types for the DeepMap SDK.
//!
//! This module contains the error types raised before any request reaches the
//! network: configuration errors and request-argument validation errors.
//!
//! # Example
//!
//! ```rust
//! use deepmap_sdk::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

use crate::clients::InvalidHttpRequestError;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid DeepMap API access token.")]
    EmptyApiToken,

    /// Vehicle token cannot be empty.
    #[error("Vehicle token cannot be empty. Please provide a valid DeepMap vehicle access token.")]
    EmptyVehicleToken,

    /// Server URL is invalid.
    #[error("Invalid server URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.deepmap.com').")]
    InvalidServerUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Request timeout must be greater than zero.
    #[error("Invalid timeout: a request timeout must be greater than zero.")]
    ZeroTimeout,
}

/// Errors raised while building a request from caller-supplied arguments.
///
/// These are always returned before any network call is made.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required identifier (user id, map id, token id, ...) was empty.
    #[error("Missing required identifier '{field}'.")]
    MissingIdentifier {
        /// The name of the missing identifier.
        field: &'static str,
    },

    /// A partial update was requested without any field to change.
    #[error("Nothing to be changed. Supply at least one field to update.")]
    NothingToUpdate,

    /// A coordinate was NaN or infinite.
    #[error("Invalid coordinate '{field}': {value} is not a finite number.")]
    InvalidCoordinate {
        /// The name of the coordinate parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The assembled request failed its shape checks.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_token_error_message() {
        let error = ConfigError::EmptyApiToken;
        let message = error.to_string();
        assert!(message.contains("API token cannot be empty"));
    }

    #[test]
    fn test_invalid_server_url_error_message() {
        let error = ConfigError::InvalidServerUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("absolute http(s) URL"));
    }

    #[test]
    fn test_zero_timeout_error_message() {
        let error = ConfigError::ZeroTimeout;
        assert!(error.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_validation_error_messages() {
        let error = ValidationError::MissingIdentifier { field: "user_id" };
        assert_eq!(error.to_string(), "Missing required identifier 'user_id'.");

        let error = ValidationError::NothingToUpdate;
        assert!(error.to_string().contains("Nothing to be changed"));

        let error = ValidationError::InvalidCoordinate {
            field: "lat1",
            value: f64::NAN,
        };
        assert!(error.to_string().contains("lat1"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &ConfigError::EmptyApiToken;
        let _: &dyn std::error::Error = &ValidationError::NothingToUpdate;
    }
}
