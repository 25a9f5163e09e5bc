//! HTTP client types for DeepMap API communication.
//!
//! This module provides the HTTP layer every endpoint call goes through.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`deepmap::DeepmapClient`]: Authenticated session client
//! - [`deepmap::DeepmapError`]: Error type of the session client
//!
//! # Example
//!
//! ```rust,ignore
//! use deepmap_sdk::{DeepmapConfig, HttpClient};
//! use deepmap_sdk::endpoints::maps;
//!
//! let config = DeepmapConfig::default();
//! let mut client = HttpClient::new(&config)?;
//! client.set_bearer_token(&session_token);
//!
//! let request = maps::list_maps(config.server_url())?;
//! let response = client.request(request).await?;
//! ```
//!
//! # Error Responses
//!
//! Requests are sent once. Any non-2xx status becomes
//! [`HttpError::Response`] carrying the status code and the decoded body.

mod errors;
pub mod deepmap;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export session client types at the clients module level
pub use deepmap::{DeepmapClient, DeepmapError};
