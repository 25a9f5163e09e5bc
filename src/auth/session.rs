//! Session state for DeepMap API authentication.
//!
//! This module provides the [`Session`] type: the bearer token obtained from a
//! session endpoint together with its decoded expiration.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::auth::{AuthError, SessionClaims};
use crate::config::ServerUrl;

/// An authenticated session against one DeepMap API server.
///
/// Sessions are immutable. There is no refresh flow: once
/// [`is_expired`](Self::is_expired) returns `true`, log in again.
///
/// The `Debug` implementation masks the bearer token.
///
/// # Example
///
/// ```rust
/// use deepmap_sdk::{ServerUrl, Session};
///
/// let session = Session::new(ServerUrl::default(), "jwt".to_string(), 4_102_444_800);
/// assert!(!session.is_expired());
/// assert!(session.is_active());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    base_url: ServerUrl,
    bearer_token: String,
    expiration: i64,
}

impl Session {
    /// Creates a session from its parts.
    #[must_use]
    pub const fn new(base_url: ServerUrl, bearer_token: String, expiration: i64) -> Self {
        Self {
            base_url,
            bearer_token,
            expiration,
        }
    }

    /// Creates a session from a session JWT, reading its `exp` claim.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidSessionToken`] if the token cannot be decoded.
    pub fn from_token(base_url: ServerUrl, bearer_token: String) -> Result<Self, AuthError> {
        let claims = SessionClaims::decode_unverified(&bearer_token)?;
        Ok(Self::new(base_url, bearer_token, claims.exp))
    }

    /// Returns the server this session was issued by.
    #[must_use]
    pub const fn base_url(&self) -> &ServerUrl {
        &self.base_url
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    /// Returns the expiration as Unix seconds.
    #[must_use]
    pub const fn expiration(&self) -> i64 {
        self.expiration
    }

    /// Returns the expiration as a UTC timestamp, if it is representable.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expiration, 0)
    }

    /// Returns `true` once the wall clock has reached the expiration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    /// Returns `true` if the session is expired at the given Unix time.
    #[must_use]
    pub const fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expiration
    }

    /// Returns `true` if this session has a token and is not expired.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.bearer_token.is_empty() && !self.is_expired()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_ref())
            .field("bearer_token", &"*****")
            .field("expiration", &self.expiration)
            .finish()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "url: {}", self.base_url)?;
        writeln!(f, "exp: {}", self.expiration)
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde_json::json;

    fn session_expiring_at(expiration: i64) -> Session {
        Session::new(ServerUrl::default(), "token".to_string(), expiration)
    }

    #[test]
    fn test_session_expired() {
        let now = Utc::now();

        let expired = session_expiring_at((now - Duration::hours(1)).timestamp());
        assert!(expired.is_expired());

        let valid = session_expiring_at((now + Duration::hours(1)).timestamp());
        assert!(!valid.is_expired());
    }

    #[test]
    fn test_is_expired_at_boundaries() {
        let session = session_expiring_at(1_000);

        for now in [i64::MIN, 0, 500, 999] {
            assert!(!session.is_expired_at(now), "not expired at {now}");
        }
        for now in [1_000, 1_001, i64::MAX] {
            assert!(session.is_expired_at(now), "expired at {now}");
        }
    }

    #[test]
    fn test_session_is_active() {
        let future = (Utc::now() + Duration::hours(1)).timestamp();

        assert!(session_expiring_at(future).is_active());

        let no_token = Session::new(ServerUrl::default(), String::new(), future);
        assert!(!no_token.is_active());

        assert!(!session_expiring_at(0).is_active());
    }

    #[test]
    fn test_from_token_reads_exp_claim() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({"exp": 1_900_000_000_i64}),
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let session = Session::from_token(ServerUrl::default(), token.clone()).unwrap();
        assert_eq!(session.expiration(), 1_900_000_000);
        assert_eq!(session.bearer_token(), token);
        assert_eq!(
            session.expires_at().map(|t| t.timestamp()),
            Some(1_900_000_000)
        );
    }

    #[test]
    fn test_debug_masks_token() {
        let session = Session::new(ServerUrl::default(), "secret-jwt".to_string(), 1);
        let debug = format!("{session:?}");
        assert!(!debug.contains("secret-jwt"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_display_shows_url_and_expiration() {
        let session = session_expiring_at(42);
        assert_eq!(
            session.to_string(),
            "url: https://api.deepmap.com/\nexp: 42\n"
        );
    }

    #[test]
    fn test_session_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}
