//! HTTP request types for the Opisense client.
//!
//! An [`HttpRequest`] is the immutable per-call request context: method, path,
//! query pairs, JSON body and the bearer token for this call only.

use std::fmt;

use crate::auth::BearerToken;
use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Opisense API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources in place.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case verb as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Encodes query pairs as `key=value` joined by `&`.
///
/// Pairs are emitted in order and repeated keys stay repeated. Keys and values
/// are percent-encoded.
///
/// ```rust
/// use opisense_client::clients::encode_query;
///
/// let pairs = vec![
///     ("type".to_string(), "sensor".to_string()),
///     ("type".to_string(), "meter".to_string()),
/// ];
/// assert_eq!(encode_query(&pairs), "type=sensor&type=meter");
/// ```
#[must_use]
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// An HTTP request to be sent to the Opisense API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use opisense_client::clients::{HttpMethod, HttpRequest};
/// use opisense_client::BearerToken;
/// use serde_json::json;
///
/// let token = BearerToken::from_access_token("abc").unwrap();
/// let request = HttpRequest::builder(HttpMethod::Post, "sites")
///     .body(json!({"name": "Plant"}))
///     .bearer(&token)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path_and_query(), "sites");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the API origin) for this request.
    pub path: String,
    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// Query pairs in order; a key may appear several times.
    pub query: Vec<(String, String)>,
    /// The bearer token authorizing this call.
    pub authorization: Option<BearerToken>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the path is empty
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the path followed by the encoded query string, if any.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, encode_query(&self.query))
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
    authorization: Option<BearerToken>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            authorization: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends query pairs, keeping their order.
    #[must_use]
    pub fn query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a single query pair.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Authorizes this request with the given token.
    #[must_use]
    pub fn bearer(mut self, token: &BearerToken) -> Self {
        self.authorization = Some(token.clone());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            authorization: self.authorization,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "sites")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "sites");
        assert!(request.body.is_none());
        assert!(request.authorization.is_none());
        assert_eq!(request.path_and_query(), "sites");
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let post = HttpRequest::builder(HttpMethod::Post, "sites").build();
        assert!(matches!(
            post,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));

        let put = HttpRequest::builder(HttpMethod::Put, "sites/1").build();
        assert!(matches!(
            put,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "/").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::EmptyPath)));
    }

    #[test]
    fn test_repeated_query_keys_are_preserved() {
        let request = HttpRequest::builder(HttpMethod::Get, "sources")
            .query_param("type", "sensor")
            .query_param("type", "meter")
            .query_param("siteId", "12")
            .build()
            .unwrap();

        assert_eq!(
            request.path_and_query(),
            "sources?type=sensor&type=meter&siteId=12"
        );
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let pairs = vec![("name".to_string(), "Main site & co".to_string())];
        assert_eq!(encode_query(&pairs), "name=Main%20site%20%26%20co");
    }

    #[test]
    fn test_bearer_is_scoped_to_request() {
        let token = BearerToken::from_access_token("abc").unwrap();
        let request = HttpRequest::builder(HttpMethod::Delete, "sites/1")
            .bearer(&token)
            .build()
            .unwrap();

        assert_eq!(request.authorization, Some(token));
    }

    #[test]
    fn test_builder_with_body() {
        let request = HttpRequest::builder(HttpMethod::Put, "sites/1")
            .body(json!({"name": "Plant"}))
            .build()
            .unwrap();

        assert_eq!(request.body, Some(json!({"name": "Plant"})));
    }
}
