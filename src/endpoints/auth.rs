//! Request builders for the auth API (`/api/auth/v1`).

use serde_json::json;

use crate::clients::{DataType, HttpMethod, HttpRequest};
use crate::config::{ApiToken, ServerUrl, VehicleToken};
use crate::endpoints::{path_segment, required};
use crate::error::ValidationError;

const API_SESSION_PATH: &str = "/api/auth/v1/token/api/session";
const VEHICLE_SESSION_PATH: &str = "/api/auth/v1/token/vehicle/session";
const RESET_PASSWORD_PATH: &str = "/api/auth/v1/reset_password";
const API_TOKENS_PATH: &str = "/api/auth/v1/token/api";
const VEHICLE_TOKENS_PATH: &str = "/api/auth/v1/token/vehicle";

/// Builds a POST that exchanges an API token for a session JWT.
///
/// # Errors
///
/// Never fails for a valid [`ApiToken`]; the `Result` matches the other builders.
pub fn create_api_session(
    server: &ServerUrl,
    api_token: &ApiToken,
) -> Result<HttpRequest, ValidationError> {
    session_request(
        server,
        API_SESSION_PATH,
        json!({ "api_token": api_token.as_ref() }),
    )
}

/// Builds a POST that exchanges a vehicle token for a vehicle session JWT.
///
/// # Errors
///
/// Never fails for a valid [`VehicleToken`]; the `Result` matches the other builders.
pub fn create_vehicle_session(
    server: &ServerUrl,
    vehicle_token: &VehicleToken,
) -> Result<HttpRequest, ValidationError> {
    session_request(
        server,
        VEHICLE_SESSION_PATH,
        json!({ "vehicle_token": vehicle_token.as_ref() }),
    )
}

/// Builds a POST requesting a password reset e-mail.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `email` is empty.
pub fn reset_password(server: &ServerUrl, email: &str) -> Result<HttpRequest, ValidationError> {
    required("email", email)?;
    session_request(server, RESET_PASSWORD_PATH, json!({ "email": email }))
}

/// Builds a POST creating an API access token.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidRequest`] only if the request shape is invalid.
pub fn create_api_token(
    server: &ServerUrl,
    description: &str,
) -> Result<HttpRequest, ValidationError> {
    Ok(HttpRequest::builder(HttpMethod::Post, server.join(API_TOKENS_PATH))
        .body(json!({ "description": description }))
        .body_type(DataType::Json)
        .build()?)
}

/// Builds a POST creating a vehicle access token.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `vehicle_id` is empty.
pub fn create_vehicle_token(
    server: &ServerUrl,
    vehicle_id: &str,
    description: &str,
) -> Result<HttpRequest, ValidationError> {
    required("vehicle_id", vehicle_id)?;
    Ok(
        HttpRequest::builder(HttpMethod::Post, server.join(VEHICLE_TOKENS_PATH))
            .body(json!({ "vehicle_id": vehicle_id, "description": description }))
            .body_type(DataType::Json)
            .build()?,
    )
}

/// Builds a GET listing the API tokens issued by the current user.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidRequest`] only if the request shape is invalid.
pub fn list_api_tokens(server: &ServerUrl) -> Result<HttpRequest, ValidationError> {
    Ok(HttpRequest::builder(HttpMethod::Get, server.join(API_TOKENS_PATH)).build()?)
}

/// Builds a GET listing the vehicle tokens issued by the current user.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidRequest`] only if the request shape is invalid.
pub fn list_vehicle_tokens(server: &ServerUrl) -> Result<HttpRequest, ValidationError> {
    Ok(HttpRequest::builder(HttpMethod::Get, server.join(VEHICLE_TOKENS_PATH)).build()?)
}

/// Builds a DELETE revoking an API token.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `token_id` is empty.
pub fn delete_api_token(server: &ServerUrl, token_id: &str) -> Result<HttpRequest, ValidationError> {
    let id = path_segment("token_id", token_id)?;
    let url = server.join(&format!("{API_TOKENS_PATH}/{id}"));
    Ok(HttpRequest::builder(HttpMethod::Delete, url).build()?)
}

/// Builds a DELETE revoking a vehicle token.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `token_id` is empty.
pub fn delete_vehicle_token(
    server: &ServerUrl,
    token_id: &str,
) -> Result<HttpRequest, ValidationError> {
    let id = path_segment("token_id", token_id)?;
    let url = server.join(&format!("{VEHICLE_TOKENS_PATH}/{id}"));
    Ok(HttpRequest::builder(HttpMethod::Delete, url).build()?)
}

/// Unauthenticated auth endpoints send an explicit JSON content type header.
fn session_request(
    server: &ServerUrl,
    path: &str,
    body: serde_json::Value,
) -> Result<HttpRequest, ValidationError> {
    Ok(HttpRequest::builder(HttpMethod::Post, server.join(path))
        .body(body)
        .body_type(DataType::Json)
        .header("Content-Type", DataType::Json.as_content_type())
        .build()?)
}
