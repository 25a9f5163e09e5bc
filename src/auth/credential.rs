//! Long-lived credentials that can be exchanged for a session.

use crate::config::{ApiToken, VehicleToken};

/// A credential accepted by the session endpoints.
///
/// - [`Credential::Api`] logs in as the user that issued the API token.
/// - [`Credential::Vehicle`] logs in as a vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credential {
    /// An API access token.
    Api(ApiToken),
    /// A vehicle access token.
    Vehicle(VehicleToken),
}

impl Credential {
    /// Returns a short name of the credential kind, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Api(_) => "api",
            Self::Vehicle(_) => "vehicle",
        }
    }
}

impl From<ApiToken> for Credential {
    fn from(token: ApiToken) -> Self {
        Self::Api(token)
    }
}

impl From<VehicleToken> for Credential {
    fn from(token: VehicleToken) -> Self {
        Self::Vehicle(token)
    }
}
