//! Authenticated session client for the DeepMap API.
//!
//! This module provides the [`DeepmapClient`] type, which logs in once with
//! a [`Credential`] and then sends every endpoint request through a single
//! long-lived [`HttpClient`] carrying the session's bearer token.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::auth::{AuthError, Credential, Session};
use crate::clients::deepmap::DeepmapError;
use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::{ApiToken, DeepmapConfig, ServerUrl, VehicleToken};
use crate::endpoints::maps::DistributionQuery;
use crate::endpoints::tiles::{BboxSearchQuery, TileDiffQuery, TileQuery};
use crate::endpoints::{auth, maps, tiles, users};
use crate::models::{IssuedApiToken, IssuedVehicleToken, SessionToken, User, UserUpdate};

/// Session client for the DeepMap API.
///
/// A client is created by [`login`](Self::login) and owns its session and
/// HTTP client. Each operation validates its arguments, sends exactly one
/// request and waits for the response; nothing is retried and nothing runs
/// in the background.
///
/// # Thread Safety
///
/// `DeepmapClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use deepmap_sdk::{ApiToken, DeepmapClient, DeepmapConfig};
/// use deepmap_sdk::endpoints::tiles::TileDiffQuery;
///
/// let token = ApiToken::new(std::env::var("DEEPMAP_API_TOKEN")?)?;
/// let client = DeepmapClient::login(DeepmapConfig::default(), token).await?;
///
/// let maps = client.list_maps().await?;
/// let diff = client.tile_diff("map-1", &TileDiffQuery::new("mvt", 12).after(1_600_000_000)).await?;
/// ```
#[derive(Debug)]
pub struct DeepmapClient {
    config: DeepmapConfig,
    http_client: HttpClient,
    session: Session,
}

// Verify DeepmapClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeepmapClient>();
};

impl DeepmapClient {
    /// Exchanges `credential` for a session and returns a client using it.
    ///
    /// API tokens are posted to the API session endpoint, vehicle tokens to
    /// the vehicle session endpoint. The returned JWT is decoded without
    /// signature verification to read its expiration.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::LoginFailed`] if the server rejects the credential,
    /// [`AuthError::InvalidSessionToken`] if the returned token has no readable
    /// `exp` claim, or [`AuthError::Http`] on network and decoding failures.
    pub async fn login(
        config: DeepmapConfig,
        credential: impl Into<Credential>,
    ) -> Result<Self, AuthError> {
        let credential = credential.into();
        let server = config.server_url().clone();

        let request = match &credential {
            Credential::Api(token) => auth::create_api_session(&server, token),
            Credential::Vehicle(token) => auth::create_vehicle_session(&server, token),
        }?;

        let mut http_client = HttpClient::new(&config)?;
        let response = http_client
            .request(request)
            .await
            .map_err(AuthError::from_login)?;
        let SessionToken { token } = response
            .json::<SessionToken>()
            .map_err(HttpError::InvalidBody)?;

        let session = Session::from_token(server, token)?;
        http_client.set_bearer_token(session.bearer_token());

        tracing::debug!(
            "Logged in with {} token, session expires at {}",
            credential.kind(),
            session.expiration()
        );

        Ok(Self {
            config,
            http_client,
            session,
        })
    }

    /// Creates a client from a previously obtained session.
    ///
    /// Requests are sent to the session's base URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn with_session(config: DeepmapConfig, session: Session) -> Result<Self, HttpError> {
        let mut http_client = HttpClient::new(&config)?;
        http_client.set_bearer_token(session.bearer_token());
        Ok(Self {
            config,
            http_client,
            session,
        })
    }

    /// Returns the configuration this client was created with.
    #[must_use]
    pub const fn config(&self) -> &DeepmapConfig {
        &self.config
    }

    /// Returns the current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the server all requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &ServerUrl {
        self.session.base_url()
    }

    /// Returns the session expiration as a Unix timestamp in seconds.
    #[must_use]
    pub const fn expiration(&self) -> i64 {
        self.session.expiration()
    }

    /// Returns `true` once the session's expiration time has been reached.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.session.is_expired()
    }

    // Maps

    /// Lists the maps the caller can access.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Http`] if the request fails.
    pub async fn list_maps(&self) -> Result<serde_json::Value, DeepmapError> {
        self.send_json(maps::list_maps(self.base_url())?).await
    }

    /// Downloads a map distribution.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `map_id` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn download_distribution(
        &self,
        map_id: &str,
        query: &DistributionQuery,
    ) -> Result<Vec<u8>, DeepmapError> {
        let request = maps::download_distribution(self.base_url(), map_id, query)?;
        self.send_bytes(request).await
    }

    // Tiles

    /// Lists the feature tiles of a map.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `map_id` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn list_feature_tiles(&self, map_id: &str) -> Result<serde_json::Value, DeepmapError> {
        self.send_json(tiles::list_feature_tiles(self.base_url(), map_id)?)
            .await
    }

    /// Downloads one feature tile.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `tile_id` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn download_feature_tile(&self, tile_id: &str) -> Result<Vec<u8>, DeepmapError> {
        self.send_bytes(tiles::download_feature_tile(self.base_url(), tile_id)?)
            .await
    }

    /// Queries the tiles of a map that changed in a time range.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `map_id` or format and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn tile_diff(
        &self,
        map_id: &str,
        query: &TileDiffQuery,
    ) -> Result<serde_json::Value, DeepmapError> {
        self.send_json(tiles::tile_diff(self.base_url(), map_id, query)?)
            .await
    }

    /// Searches the tiles of a map inside a bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `map_id` or format or
    /// a non-finite coordinate, and [`DeepmapError::Http`] if the request fails.
    pub async fn search_tiles_bbox(
        &self,
        map_id: &str,
        query: &BboxSearchQuery,
    ) -> Result<serde_json::Value, DeepmapError> {
        self.send_json(tiles::search_tiles_bbox(self.base_url(), map_id, query)?)
            .await
    }

    /// Fetches a single tile by its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `map_id` or format and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn get_tile(&self, map_id: &str, query: &TileQuery) -> Result<Vec<u8>, DeepmapError> {
        self.send_bytes(tiles::get_tile(self.base_url(), map_id, query)?)
            .await
    }

    // Users

    /// Lists all users visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Http`] if the request fails or the body is not a
    /// list of users.
    pub async fn list_users(&self) -> Result<Vec<User>, DeepmapError> {
        self.send_list(users::list_users(self.base_url())?).await
    }

    /// Fetches a single user.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `user_id` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn get_user(&self, user_id: &str) -> Result<User, DeepmapError> {
        self.send_json(users::get_user(self.base_url(), user_id)?)
            .await
    }

    /// Invites a new user and returns the created user.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `email` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn invite_user(&self, email: &str, admin: bool) -> Result<User, DeepmapError> {
        self.send_json(users::invite_user(self.base_url(), email, admin)?)
            .await
    }

    /// Applies `update` to a user.
    ///
    /// An update that sets no field is rejected without sending anything.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty update or `user_id`
    /// and [`DeepmapError::Http`] if the request fails.
    pub async fn edit_user(
        &self,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<serde_json::Value, DeepmapError> {
        self.send_json(users::edit_user(self.base_url(), user_id, update)?)
            .await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `user_id` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), DeepmapError> {
        self.send(users::delete_user(self.base_url(), user_id)?)
            .await?;
        Ok(())
    }

    // Auth

    /// Exchanges an API token for a new session token.
    ///
    /// The client's own session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Http`] if the request fails.
    pub async fn create_api_session(
        &self,
        api_token: &ApiToken,
    ) -> Result<SessionToken, DeepmapError> {
        self.send_json(auth::create_api_session(self.base_url(), api_token)?)
            .await
    }

    /// Exchanges a vehicle token for a new vehicle session token.
    ///
    /// The client's own session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Http`] if the request fails.
    pub async fn create_vehicle_session(
        &self,
        vehicle_token: &VehicleToken,
    ) -> Result<SessionToken, DeepmapError> {
        self.send_json(auth::create_vehicle_session(self.base_url(), vehicle_token)?)
            .await
    }

    /// Requests a password reset e-mail.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `email` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn reset_password(&self, email: &str) -> Result<serde_json::Value, DeepmapError> {
        self.send_json(auth::reset_password(self.base_url(), email)?)
            .await
    }

    /// Issues a new API access token.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Http`] if the request fails.
    pub async fn create_api_token(
        &self,
        description: &str,
    ) -> Result<IssuedApiToken, DeepmapError> {
        self.send_json(auth::create_api_token(self.base_url(), description)?)
            .await
    }

    /// Issues a new vehicle access token.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `vehicle_id` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn create_vehicle_token(
        &self,
        vehicle_id: &str,
        description: &str,
    ) -> Result<IssuedVehicleToken, DeepmapError> {
        let request = auth::create_vehicle_token(self.base_url(), vehicle_id, description)?;
        self.send_json(request).await
    }

    /// Lists the API tokens issued by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Http`] if the request fails.
    pub async fn list_api_tokens(&self) -> Result<Vec<IssuedApiToken>, DeepmapError> {
        self.send_list(auth::list_api_tokens(self.base_url())?)
            .await
    }

    /// Lists the vehicle tokens issued by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Http`] if the request fails.
    pub async fn list_vehicle_tokens(&self) -> Result<Vec<IssuedVehicleToken>, DeepmapError> {
        self.send_list(auth::list_vehicle_tokens(self.base_url())?)
            .await
    }

    /// Revokes an API token.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `token_id` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn delete_api_token(&self, token_id: &str) -> Result<(), DeepmapError> {
        self.send(auth::delete_api_token(self.base_url(), token_id)?)
            .await?;
        Ok(())
    }

    /// Revokes a vehicle token.
    ///
    /// # Errors
    ///
    /// Returns [`DeepmapError::Validation`] for an empty `token_id` and
    /// [`DeepmapError::Http`] if the request fails.
    pub async fn delete_vehicle_token(&self, token_id: &str) -> Result<(), DeepmapError> {
        self.send(auth::delete_vehicle_token(self.base_url(), token_id)?)
            .await?;
        Ok(())
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, DeepmapError> {
        Ok(self.http_client.request(request).await?)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, DeepmapError> {
        let response = self.send(request).await?;
        response
            .json()
            .map_err(|e| DeepmapError::Http(HttpError::InvalidBody(e)))
    }

    /// A `null` or empty body means the list is empty.
    async fn send_list<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<Vec<T>, DeepmapError> {
        let items: Option<Vec<T>> = self.send_json(request).await?;
        Ok(items.unwrap_or_default())
    }

    async fn send_bytes(&self, request: HttpRequest) -> Result<Vec<u8>, DeepmapError> {
        Ok(self.send(request).await?.body)
    }
}

impl fmt::Display for DeepmapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.session)
    }
}
