//! HTTP response types for the Opisense client.
//!
//! [`HttpResponse`] is the raw transport outcome: status, headers and the body
//! text. Status inspection is left to the caller; structured decoding happens
//! only on request through [`HttpResponse::json`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::DecodeError;

/// An HTTP response from the Opisense API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-case name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
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

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::EmptyBody`] for an empty or blank body and
    /// [`DecodeError::InvalidJson`] when the body does not parse as `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use opisense_client::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), r#"{"id": 7}"#.to_string());
    /// let value: serde_json::Value = response.json().unwrap();
    /// assert_eq!(value["id"], 7);
    ///
    /// let empty = HttpResponse::new(204, HashMap::new(), String::new());
    /// assert!(empty.json::<serde_json::Value>().is_err());
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        if self.body.trim().is_empty() {
            return Err(DecodeError::EmptyBody { status: self.code });
        }
        serde_json::from_str(&self.body).map_err(|source| DecodeError::InvalidJson {
            status: self.code,
            source,
        })
    }

    /// Decodes the body as an untyped JSON value.
    ///
    /// # Errors
    ///
    /// See [`HttpResponse::json`].
    pub fn json_value(&self) -> Result<serde_json::Value, DecodeError> {
        self.json()
    }
}
