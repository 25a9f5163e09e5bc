//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated DeepMap API access token.
///
/// API tokens are long-lived credentials that are exchanged for a short-lived
/// session JWT. This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use deepmap_sdk::ApiToken;
///
/// let token = ApiToken::new("my-api-token").unwrap();
/// assert_eq!(token.as_ref(), "my-api-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated DeepMap vehicle access token.
///
/// Vehicle tokens identify a single vehicle and are exchanged for a vehicle
/// session JWT. Like [`ApiToken`], the value is masked in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct VehicleToken(String);

impl VehicleToken {
    /// Creates a new validated vehicle token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyVehicleToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyVehicleToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for VehicleToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VehicleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VehicleToken(*****)")
    }
}

/// A validated base URL of the DeepMap API server.
///
/// The URL must be absolute, use the `http` or `https` scheme and carry a
/// host. Endpoint paths are always joined as absolute paths, so any path on
/// the base URL is replaced while scheme, host and port are kept.
///
/// # Example
///
/// ```rust
/// use deepmap_sdk::ServerUrl;
///
/// let url = ServerUrl::new("https://api.deepmap.com").unwrap();
/// assert_eq!(url.host_name(), Some("api.deepmap.com"));
///
/// let joined = url.join("/api/maps/v1/maps");
/// assert_eq!(joined.as_str(), "https://api.deepmap.com/api/maps/v1/maps");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// The production API server.
    pub const DEFAULT: &'static str = "https://api.deepmap.com";

    /// Creates a new validated server URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServerUrl`] if the URL cannot be parsed,
    /// is not http(s), or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let parsed = Url::parse(&url).map_err(|_| ConfigError::InvalidServerUrl { url: url.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidServerUrl { url });
        }

        Ok(Self(parsed))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Joins an absolute endpoint path onto this server URL.
    ///
    /// `path` must start with `/`; the result keeps this URL's scheme, host
    /// and port and has no query string.
    #[must_use]
    pub fn join(&self, path: &str) -> Url {
        let mut url = self.0.clone();
        url.set_path(path);
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}

impl Default for ServerUrl {
    fn default() -> Self {
        Self(Url::parse(Self::DEFAULT).expect("default server URL is valid"))
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Serialize for ServerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
