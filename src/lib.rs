//! # DeepMap API Rust SDK
//!
//! A thin Rust client for the DeepMap mapping platform API, providing
//! type-safe configuration, request builders for every endpoint and an
//! authenticated session client.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`DeepmapConfig`] and [`DeepmapConfigBuilder`]
//! - Validated newtypes for access tokens and the server URL
//! - Pure request builders for the auth, users, maps and tiles endpoints via [`endpoints`]
//! - Login with an API or vehicle token and session expiry tracking
//! - An async session client, [`DeepmapClient`], with one method per endpoint
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use deepmap_sdk::{ApiToken, DeepmapConfig, ServerUrl};
//!
//! let config = DeepmapConfig::builder()
//!     .server_url(ServerUrl::new("https://api.deepmap.com").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! let token = ApiToken::new("your-api-token").unwrap();
//! # let _ = (config, token);
//! ```
//!
//! ## Logging In
//!
//! ```rust,ignore
//! use deepmap_sdk::{ApiToken, DeepmapClient, DeepmapConfig, UserUpdate};
//!
//! let token = ApiToken::new("your-api-token")?;
//! let client = DeepmapClient::login(DeepmapConfig::default(), token).await?;
//!
//! if !client.is_expired() {
//!     for user in client.list_users().await? {
//!         println!("{} {}", user.id, user.email);
//!     }
//!     client.edit_user("42", &UserUpdate::new().admin(true)).await?;
//! }
//! ```
//!
//! ## Building Requests Without Sending Them
//!
//! ```rust
//! use deepmap_sdk::endpoints::tiles::{self, BboxSearchQuery, BoundingBox};
//! use deepmap_sdk::ServerUrl;
//!
//! let query = BboxSearchQuery::new("mvt", 5, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
//! let request = tiles::search_tiles_bbox(&ServerUrl::default(), "map-1", &query).unwrap();
//!
//! assert_eq!(request.url.path(), "/api/tiles/v2/map-1/tiles/search/bbox");
//! assert_eq!(request.query_value("lat1").as_deref(), Some("1"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and sessions are passed explicitly
//! - **Fail-fast validation**: Newtypes and builders validate before any I/O
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No retries**: Every call sends at most one request

pub mod auth;
pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, Credential, Session, SessionClaims};
pub use config::{ApiToken, DeepmapConfig, DeepmapConfigBuilder, ServerUrl, VehicleToken};
pub use error::{ConfigError, ValidationError};

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export session client types
pub use clients::{DeepmapClient, DeepmapError};

pub use models::{IssuedApiToken, IssuedVehicleToken, SessionToken, User, UserUpdate};
