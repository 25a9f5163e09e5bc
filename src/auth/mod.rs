//! Authentication types for the DeepMap SDK.
//!
//! # Overview
//!
//! - [`Credential`]: An API or vehicle access token to log in with
//! - [`Session`]: The bearer token and expiration obtained from a login
//! - [`SessionClaims`]: Claims decoded from a session JWT
//! - [`AuthError`]: Errors raised while logging in
//!
//! Session tokens are decoded without signature verification: the SDK only
//! reads the expiration of a token it just received from the server.
//!
//! # Example
//!
//! ```rust
//! use deepmap_sdk::{ServerUrl, Session};
//!
//! let session = Session::new(ServerUrl::default(), "jwt".to_string(), 0);
//! assert!(session.is_expired());
//! ```

mod claims;
mod credential;
mod error;
pub mod session;

pub use claims::SessionClaims;
pub use credential::Credential;
pub use error::AuthError;
pub use session::Session;
