//! HTTP response types for the DeepMap SDK.
//!
//! [`HttpResponse`] keeps the raw body bytes so that both JSON endpoints and
//! binary tile/distribution downloads go through the same client.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// A response received from the DeepMap API.
///
/// # Example
///
/// ```rust
/// use deepmap_sdk::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), br#"{"token":"abc"}"#.to_vec());
/// assert!(response.is_ok());
/// assert_eq!(response.json_value()["token"], "abc");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the first value of the given header (name must be lowercase).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Deserializes the body as JSON into `T`.
    ///
    /// An empty body is treated as JSON `null`, so endpoints answering with no
    /// content can still be decoded into `()` or `Option<T>`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        if self.body.is_empty() {
            return serde_json::from_value(serde_json::Value::Null);
        }
        serde_json::from_slice(&self.body)
    }

    /// Returns the body as a JSON value without failing.
    ///
    /// - an empty body becomes `{}`
    /// - a body that is not JSON becomes `{"raw_body": "<text>"}`
    #[must_use]
    pub fn json_value(&self) -> serde_json::Value {
        if self.body.is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_slice(&self.body).unwrap_or_else(|_| {
            serde_json::json!({ "raw_body": String::from_utf8_lossy(&self.body) })
        })
    }
}
