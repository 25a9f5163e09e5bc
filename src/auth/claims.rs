//! Session token (JWT) claim decoding.
//!
//! The session endpoints return a JWT signed by the server. The SDK trusts
//! the server it logged in to and only needs the expiration, so the token is
//! decoded without verifying its signature. Expired tokens still decode; the
//! expiry is checked separately through [`Session::is_expired`].
//!
//! [`Session::is_expired`]: crate::auth::Session::is_expired

use std::collections::HashSet;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::auth::AuthError;

/// Claims read from a DeepMap session token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionClaims {
    /// Expiration timestamp (Unix seconds).
    pub exp: i64,

    /// Issued at timestamp (Unix seconds), if present.
    #[serde(default)]
    pub iat: Option<i64>,

    /// Subject of the token, if present.
    #[serde(default)]
    pub sub: Option<String>,
}

impl SessionClaims {
    /// Decodes the claims of `token` without verifying its signature.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidSessionToken`] if the token is malformed
    /// or has no `exp` claim.
    pub fn decode_unverified(token: &str) -> Result<Self, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::from(["exp".to_string()]);

        let key = DecodingKey::from_secret(&[]);
        decode::<Self>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidSessionToken {
                reason: format!("Error decoding session token: {e}"),
            })
    }
}
