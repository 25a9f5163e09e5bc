//! Request builders for the DeepMap API endpoints.
//!
//! Every function in this module is pure: it maps a base [`ServerUrl`] and
//! endpoint arguments to a ready-to-send [`HttpRequest`] and never performs
//! I/O. Endpoint paths are absolute, so they replace any path on the base
//! URL while its scheme, host and port are kept.
//!
//! - [`auth`]: sessions, password reset, API and vehicle tokens
//! - [`users`]: listing, inviting, editing and deleting users
//! - [`maps`]: map listing and distribution downloads
//! - [`tiles`]: feature tiles and the v2 tile queries
//!
//! Optional arguments that are absent never show up in the query string or
//! the JSON body. Builders fail with [`ValidationError`] only when a required
//! identifier is empty, a coordinate is not finite, or an update has nothing
//! to change.
//!
//! # Example
//!
//! ```rust
//! use deepmap_sdk::endpoints::tiles::{self, TileDiffQuery};
//! use deepmap_sdk::ServerUrl;
//!
//! let server = ServerUrl::default();
//! let request = tiles::tile_diff(&server, "map-1", &TileDiffQuery::new("mvt", 12)).unwrap();
//!
//! assert_eq!(request.url.path(), "/api/tiles/v2/map-1/diff");
//! assert_eq!(request.url.query(), Some("format=mvt&z=12"));
//! ```
//!
//! [`ServerUrl`]: crate::ServerUrl
//! [`HttpRequest`]: crate::clients::HttpRequest

pub mod auth;
pub mod maps;
pub mod tiles;
pub mod users;

use crate::error::ValidationError;

/// Rejects a blank required value.
pub(crate) fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingIdentifier { field });
    }
    Ok(value)
}

/// Rejects an empty identifier and percent-encodes it as one path segment.
pub(crate) fn path_segment(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = required(field, value)?;
    Ok(urlencoding::encode(value).into_owned())
}

/// Rejects a NaN or infinite coordinate.
pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::InvalidCoordinate { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment_encodes_reserved_characters() {
        assert_eq!(path_segment("map_id", "abc").unwrap(), "abc");
        assert_eq!(path_segment("map_id", "a/b c").unwrap(), "a%2Fb%20c");
    }

    #[test]
    fn test_path_segment_rejects_blank_identifiers() {
        assert_eq!(
            path_segment("user_id", ""),
            Err(ValidationError::MissingIdentifier { field: "user_id" })
        );
        assert_eq!(
            path_segment("user_id", "   "),
            Err(ValidationError::MissingIdentifier { field: "user_id" })
        );
    }

    #[test]
    fn test_finite_rejects_nan_and_infinity() {
        assert_eq!(finite("lat1", 1.5), Ok(1.5));
        assert!(matches!(
            finite("lat1", f64::NAN),
            Err(ValidationError::InvalidCoordinate { field: "lat1", .. })
        ));
        assert!(finite("lng2", f64::INFINITY).is_err());
    }
}
