//! Request builders for the users API (`/api/users/v1`).

use serde_json::json;

use crate::clients::{DataType, HttpMethod, HttpRequest};
use crate::config::ServerUrl;
use crate::endpoints::{path_segment, required};
use crate::error::ValidationError;
use crate::models::UserUpdate;

const USERS_PATH: &str = "/api/users/v1/users";
const INVITE_PATH: &str = "/api/users/v1/invite";

/// Builds a GET listing all users visible to the caller.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidRequest`] only if the request shape is invalid.
pub fn list_users(server: &ServerUrl) -> Result<HttpRequest, ValidationError> {
    Ok(HttpRequest::builder(HttpMethod::Get, server.join(USERS_PATH)).build()?)
}

/// Builds a GET for a single user.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `user_id` is empty.
pub fn get_user(server: &ServerUrl, user_id: &str) -> Result<HttpRequest, ValidationError> {
    Ok(HttpRequest::builder(HttpMethod::Get, user_url(server, user_id)?).build()?)
}

/// Builds a POST inviting a new user.
///
/// The `admin` flag is always part of the body.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `email` is empty.
pub fn invite_user(
    server: &ServerUrl,
    email: &str,
    admin: bool,
) -> Result<HttpRequest, ValidationError> {
    required("email", email)?;
    Ok(HttpRequest::builder(HttpMethod::Post, server.join(INVITE_PATH))
        .body(json!({ "email": email, "admin": admin }))
        .body_type(DataType::Json)
        .build()?)
}

/// Builds a POST applying `update` to a user.
///
/// # Errors
///
/// Returns [`ValidationError::NothingToUpdate`] if `update` sets no field, or
/// [`ValidationError::MissingIdentifier`] if `user_id` is empty.
pub fn edit_user(
    server: &ServerUrl,
    user_id: &str,
    update: &UserUpdate,
) -> Result<HttpRequest, ValidationError> {
    if update.is_empty() {
        return Err(ValidationError::NothingToUpdate);
    }

    Ok(HttpRequest::builder(HttpMethod::Post, user_url(server, user_id)?)
        .body(update.to_body())
        .body_type(DataType::Json)
        .build()?)
}

/// Builds a DELETE removing a user.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `user_id` is empty.
pub fn delete_user(server: &ServerUrl, user_id: &str) -> Result<HttpRequest, ValidationError> {
    Ok(HttpRequest::builder(HttpMethod::Delete, user_url(server, user_id)?).build()?)
}

fn user_url(server: &ServerUrl, user_id: &str) -> Result<reqwest::Url, ValidationError> {
    let id = path_segment("user_id", user_id)?;
    Ok(server.join(&format!("{USERS_PATH}/{id}")))
}
