//! Typed request and response bodies of the DeepMap API.
//!
//! Identifiers may come back from the server as JSON strings or numbers;
//! both are accepted and kept as `String`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A user of the DeepMap platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's id.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// The user's e-mail address.
    pub email: String,
    /// Whether the user is an administrator.
    #[serde(default)]
    pub admin: bool,
}

/// A partial update of a [`User`].
///
/// Only the fields that are set are sent to the server. Setting an empty
/// e-mail address leaves the e-mail unchanged.
///
/// # Example
///
/// ```rust
/// use deepmap_sdk::UserUpdate;
///
/// let update = UserUpdate::new().admin(true);
/// assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({"admin": true}));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin: Option<bool>,
}

impl UserUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the e-mail address. An empty string is ignored.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.email = if email.is_empty() { None } else { Some(email) };
        self
    }

    /// Changes the administrator flag.
    #[must_use]
    pub const fn admin(mut self, admin: bool) -> Self {
        self.admin = Some(admin);
        self
    }

    /// Returns `true` if no field would be changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.admin.is_none()
    }

    /// Returns the JSON body holding exactly the fields that are set.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        if let Some(email) = &self.email {
            body.insert("email".to_string(), email.clone().into());
        }
        if let Some(admin) = self.admin {
            body.insert("admin".to_string(), admin.into());
        }
        serde_json::Value::Object(body)
    }
}

/// An API access token as returned by the token endpoints.
///
/// `api_token` holds the secret value and is only present in the response
/// to its creation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedApiToken {
    /// The token's id, used to delete it.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// The secret token value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// The description given on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A vehicle access token as returned by the token endpoints.
///
/// `vehicle_token` holds the secret value and is only present in the
/// response to its creation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedVehicleToken {
    /// The token's id, used to delete it.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// The secret token value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_token: Option<String>,
    /// The vehicle this token was issued for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    /// The description given on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The body returned by the session endpoints.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// The session JWT.
    pub token: String,
}

impl fmt::Debug for IssuedApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedApiToken")
            .field("id", &self.id)
            .field("api_token", &self.api_token.as_ref().map(|_| "*****"))
            .field("description", &self.description)
            .finish()
    }
}

impl fmt::Debug for IssuedVehicleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedVehicleToken")
            .field("id", &self.id)
            .field("vehicle_token", &self.vehicle_token.as_ref().map(|_| "*****"))
            .field("vehicle_id", &self.vehicle_id)
            .field("description", &self.description)
            .finish()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(*****)")
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
