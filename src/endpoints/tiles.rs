//! Request builders for feature tiles and the v2 tile queries.
//!
//! The v2 queries share a `format` and zoom level `z` and may be narrowed to
//! a time range with `before` and `after`, both Unix-second timestamps and
//! both inclusive: `before` selects tiles older than or equal to the given
//! time, `after` tiles newer than or equal to it. Unset bounds are left out
//! of the query string.

use crate::clients::{HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::config::ServerUrl;
use crate::endpoints::{finite, path_segment, required};
use crate::error::ValidationError;

const TILES_V2_PATH: &str = "/api/tiles/v2";

/// Inclusive time bounds shared by the v2 tile queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TimeRange {
    before: Option<i64>,
    after: Option<i64>,
}

impl TimeRange {
    fn apply(self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        builder
            .optional_query_param("before", self.before)
            .optional_query_param("after", self.after)
    }
}

/// Parameters of a tile diff query.
///
/// # Example
///
/// ```rust
/// use deepmap_sdk::endpoints::tiles::TileDiffQuery;
///
/// let query = TileDiffQuery::new("mvt", 12).after(1_600_000_000);
/// # let _ = query;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDiffQuery {
    format: String,
    z: u8,
    range: TimeRange,
}

impl TileDiffQuery {
    /// Creates a diff query for the given format and zoom level.
    #[must_use]
    pub fn new(format: impl Into<String>, z: u8) -> Self {
        Self {
            format: format.into(),
            z,
            range: TimeRange::default(),
        }
    }

    /// Only include changes at or before this Unix time.
    #[must_use]
    pub const fn before(mut self, timestamp: i64) -> Self {
        self.range.before = Some(timestamp);
        self
    }

    /// Only include changes at or after this Unix time.
    #[must_use]
    pub const fn after(mut self, timestamp: i64) -> Self {
        self.range.after = Some(timestamp);
        self
    }
}

/// A latitude/longitude rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// First latitude.
    pub lat1: f64,
    /// Second latitude.
    pub lat2: f64,
    /// First longitude.
    pub lng1: f64,
    /// Second longitude.
    pub lng2: f64,
}

impl BoundingBox {
    /// Creates a bounding box from two latitudes and two longitudes.
    #[must_use]
    pub const fn new(lat1: f64, lat2: f64, lng1: f64, lng2: f64) -> Self {
        Self {
            lat1,
            lat2,
            lng1,
            lng2,
        }
    }
}

/// Parameters of a bounding-box tile search.
#[derive(Clone, Debug, PartialEq)]
pub struct BboxSearchQuery {
    format: String,
    z: u8,
    bbox: BoundingBox,
    range: TimeRange,
}

impl BboxSearchQuery {
    /// Creates a search over `bbox` at the given format and zoom level.
    #[must_use]
    pub fn new(format: impl Into<String>, z: u8, bbox: BoundingBox) -> Self {
        Self {
            format: format.into(),
            z,
            bbox,
            range: TimeRange::default(),
        }
    }

    /// Only match tiles at or before this Unix time.
    #[must_use]
    pub const fn before(mut self, timestamp: i64) -> Self {
        self.range.before = Some(timestamp);
        self
    }

    /// Only match tiles at or after this Unix time.
    #[must_use]
    pub const fn after(mut self, timestamp: i64) -> Self {
        self.range.after = Some(timestamp);
        self
    }
}

/// Parameters of a single tile fetch by tile coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileQuery {
    format: String,
    z: u8,
    x: u32,
    y: u32,
    range: TimeRange,
}

impl TileQuery {
    /// Creates a query for tile (`x`, `y`) at zoom level `z`.
    #[must_use]
    pub fn new(format: impl Into<String>, z: u8, x: u32, y: u32) -> Self {
        Self {
            format: format.into(),
            z,
            x,
            y,
            range: TimeRange::default(),
        }
    }

    /// Fetch the tile as of at most this Unix time.
    #[must_use]
    pub const fn before(mut self, timestamp: i64) -> Self {
        self.range.before = Some(timestamp);
        self
    }

    /// Fetch the tile as of at least this Unix time.
    #[must_use]
    pub const fn after(mut self, timestamp: i64) -> Self {
        self.range.after = Some(timestamp);
        self
    }
}

/// Builds a GET listing the feature tiles of a map.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `map_id` is empty.
pub fn list_feature_tiles(server: &ServerUrl, map_id: &str) -> Result<HttpRequest, ValidationError> {
    let id = path_segment("map_id", map_id)?;
    let url = server.join(&format!("/api/maps/v1/{id}/feature_tiles"));
    Ok(HttpRequest::builder(HttpMethod::Get, url).build()?)
}

/// Builds a GET downloading one feature tile.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `tile_id` is empty.
pub fn download_feature_tile(
    server: &ServerUrl,
    tile_id: &str,
) -> Result<HttpRequest, ValidationError> {
    let id = path_segment("tile_id", tile_id)?;
    let url = server.join(&format!("/api/tiles/v1/feature_tiles/{id}"));
    Ok(HttpRequest::builder(HttpMethod::Get, url).build()?)
}

/// Builds a GET for the tiles of a map that changed in a time range.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `map_id` or the format is empty.
pub fn tile_diff(
    server: &ServerUrl,
    map_id: &str,
    query: &TileDiffQuery,
) -> Result<HttpRequest, ValidationError> {
    let builder = v2_request(server, map_id, "diff", &query.format, query.z)?;
    Ok(query.range.apply(builder).build()?)
}

/// Builds a GET searching the tiles of a map inside a bounding box.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `map_id` or the format is
/// empty, or [`ValidationError::InvalidCoordinate`] if a coordinate is NaN or
/// infinite.
pub fn search_tiles_bbox(
    server: &ServerUrl,
    map_id: &str,
    query: &BboxSearchQuery,
) -> Result<HttpRequest, ValidationError> {
    let bbox = &query.bbox;
    let lat1 = finite("lat1", bbox.lat1)?;
    let lat2 = finite("lat2", bbox.lat2)?;
    let lng1 = finite("lng1", bbox.lng1)?;
    let lng2 = finite("lng2", bbox.lng2)?;

    let builder = v2_request(server, map_id, "tiles/search/bbox", &query.format, query.z)?
        .query_param("lat1", lat1)
        .query_param("lat2", lat2)
        .query_param("lng1", lng1)
        .query_param("lng2", lng2);
    Ok(query.range.apply(builder).build()?)
}

/// Builds a GET fetching a single tile by its coordinates.
///
/// # Errors
///
/// Returns [`ValidationError::MissingIdentifier`] if `map_id` or the format is empty.
pub fn get_tile(
    server: &ServerUrl,
    map_id: &str,
    query: &TileQuery,
) -> Result<HttpRequest, ValidationError> {
    let builder = v2_request(server, map_id, "tile", &query.format, query.z)?
        .query_param("x", query.x)
        .query_param("y", query.y);
    Ok(query.range.apply(builder).build()?)
}

fn v2_request(
    server: &ServerUrl,
    map_id: &str,
    endpoint: &str,
    format: &str,
    z: u8,
) -> Result<HttpRequestBuilder, ValidationError> {
    let id = path_segment("map_id", map_id)?;
    let format = required("format", format)?;
    let url = server.join(&format!("{TILES_V2_PATH}/{id}/{endpoint}"));
    Ok(HttpRequest::builder(HttpMethod::Get, url)
        .query_param("format", format)
        .query_param("z", z))
}
