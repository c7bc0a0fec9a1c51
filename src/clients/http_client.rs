//! HTTP client for Opisense API communication.
//!
//! This module provides the [`HttpClient`] type, a thin layer over `reqwest`
//! that merges the token-free default headers with the per-call request
//! context and returns the raw response.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiUrl, ApiVersion, OpisenseConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Opisense API.
///
/// The client handles:
/// - URL construction from the configured API origin
/// - Default headers: `Content-Type`, `Accept`, `User-Agent` and the API
///   version marker
/// - Attaching the per-request bearer token as `Authorization`
///
/// The client never stores a token, so one instance can serve concurrent
/// calls made with different tokens. Non-2xx responses are returned as-is
/// and no retries are attempted.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use opisense_client::clients::{HttpClient, HttpMethod, HttpRequest};
/// use opisense_client::OpisenseConfig;
///
/// let client = HttpClient::new(&OpisenseConfig::default())?;
/// let request = HttpRequest::builder(HttpMethod::Get, "sites")
///     .bearer(&token)
///     .build()?;
///
/// let response = client.request(request).await?;
/// println!("{} {}", response.code, response.text());
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: ApiUrl,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured API origin.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &OpisenseConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Opisense API Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            ApiVersion::HEADER.to_string(),
            config.api_version().as_str().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.api_url().clone(),
            default_headers,
        })
    }

    /// Returns the API origin for this client.
    #[must_use]
    pub const fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    ///
    /// These never include `Authorization`.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request would be sent to.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        self.base_url.join(&request.path_and_query())
    }

    /// Sends an HTTP request to the Opisense API.
    ///
    /// Exactly one network call is made. The response is returned whatever
    /// its status code.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(token) = &request.authorization {
            req_builder = req_builder.header("Authorization", token.as_str());
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!("{} {}", request.http_method.as_str(), url);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!("Response: {code}");
        if !(200..=299).contains(&code) {
            tracing::warn!(
                "Opisense API answered {} {} with status {}",
                request.http_method.as_str(),
                request.path,
                code
            );
        }

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
