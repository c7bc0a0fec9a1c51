//! HTTP transport types for the Opisense API.
//!
//! This module is the thin transport underneath the dispatcher in
//! [`crate::rest`]. It sends one request per call, attaches the token carried
//! by the request, and hands back the raw response.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: The immutable per-call request context
//! - [`HttpResponse`]: The raw response with on-demand JSON decoding
//! - [`HttpMethod`]: GET, POST, PUT, DELETE
//! - [`HttpError`], [`InvalidHttpRequestError`], [`DecodeError`]: Error types
//!
//! # Example
//!
//! ```rust,ignore
//! use opisense_client::clients::{HttpClient, HttpMethod, HttpRequest};
//! use opisense_client::OpisenseConfig;
//!
//! let client = HttpClient::new(&OpisenseConfig::default())?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "sites")
//!     .query_param("displayLevel", "Site")
//!     .bearer(&token)
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! if !response.is_ok() {
//!     eprintln!("Opisense answered {}", response.code);
//! }
//! ```
//!
//! # Retry Behavior
//!
//! None. A failed call is reported once; retrying is the caller's decision.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{DecodeError, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{encode_query, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
