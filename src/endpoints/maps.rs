//! Request builders for the maps API (`/api/maps/v1`).

use crate::clients::{HttpMethod, HttpRequest};
use crate::config::ServerUrl;
use crate::endpoints::path_segment;
use crate::error::ValidationError;

const MAPS_PATH: &str = "/api/maps/v1";

/// Optional parameters of a map distribution download.
///
/// Parameters left unset are omitted from the query string and the server
/// picks its defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistributionQuery {
    format: Option<String>,
    version: Option<String>,
}

impl DistributionQuery {
    /// Creates a query with no parameters set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distribution format.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the distribution version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Builds a GET listing the maps the caller can access.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidRequest`] only if the request shape is invalid.
pub fn list_maps(server: &ServerUrl) -> Result<HttpRequest, ValidationError> {
    let url = server.join(&format!("{MAPS_PATH}/maps"));
    Ok(HttpRequest::builder(HttpMethod::Get, url).build()?)
}

/// Builds a GET downloading a map distribution.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `map_id` is empty.
pub fn download_distribution(
    server: &ServerUrl,
    map_id: &str,
    query: &DistributionQuery,
) -> Result<HttpRequest, ValidationError> {
    let id = path_segment("map_id", map_id)?;
    let url = server.join(&format!("{MAPS_PATH}/{id}/distribution"));
    Ok(HttpRequest::builder(HttpMethod::Get, url)
        .optional_query_param("format", query.format.as_deref())
        .optional_query_param("version", query.version.as_deref())
        .build()?)
}
