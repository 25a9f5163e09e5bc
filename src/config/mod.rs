//! Configuration types for the DeepMap SDK.
//!
//! This module provides the core configuration types used to point the SDK
//! at a DeepMap API server.
//!
//! # Overview
//!
//! - [`DeepmapConfig`]: The configuration struct holding all SDK settings
//! - [`DeepmapConfigBuilder`]: A builder for constructing [`DeepmapConfig`] instances
//! - [`ServerUrl`]: A validated base URL of the API server
//! - [`ApiToken`]: A validated API access token with masked debug output
//! - [`VehicleToken`]: A validated vehicle access token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use deepmap_sdk::{DeepmapConfig, ServerUrl};
//!
//! let config = DeepmapConfig::builder()
//!     .server_url(ServerUrl::new("https://api.deepmap.com").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, ServerUrl, VehicleToken};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the DeepMap SDK.
///
/// `DeepmapConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Timeouts
///
/// No timeout is applied unless one is configured. The SDK never retries a
/// request, so a configured timeout bounds the whole call.
#[derive(Clone, Debug)]
pub struct DeepmapConfig {
    server_url: ServerUrl,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DeepmapConfig {
    /// Creates a new builder for constructing a `DeepmapConfig`.
    #[must_use]
    pub fn builder() -> DeepmapConfigBuilder {
        DeepmapConfigBuilder::new()
    }

    /// Returns the base server URL.
    #[must_use]
    pub const fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for DeepmapConfig {
    fn default() -> Self {
        Self {
            server_url: ServerUrl::default(),
            timeout: None,
            user_agent_prefix: None,
        }
    }
}

// Verify DeepmapConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeepmapConfig>();
};

/// Builder for constructing [`DeepmapConfig`] instances.
///
/// # Defaults
///
/// - `server_url`: `https://api.deepmap.com`
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct DeepmapConfigBuilder {
    server_url: Option<ServerUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DeepmapConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base server URL.
    #[must_use]
    pub fn server_url(mut self, url: ServerUrl) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Sets the timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DeepmapConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<DeepmapConfig, ConfigError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(DeepmapConfig {
            server_url: self.server_url.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
