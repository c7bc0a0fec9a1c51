//! HTTP-specific error types for the Opisense client.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`DecodeError`]: A response body could not be decoded as requested
//! - [`HttpError`]: Unified error type for transport-level failures
//!
//! A non-2xx status is *not* an error at this layer. The response is returned
//! and the caller inspects [`HttpResponse::code`](crate::HttpResponse).
//!
//! # Example
//!
//! ```rust,ignore
//! use opisense_client::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) if response.is_ok() => println!("{}", response.text()),
//!     Ok(response) => println!("Platform answered {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty.
    #[error("Cannot send a request without a path.")]
    EmptyPath,
}

/// Error returned when a response body cannot be decoded as structured data.
///
/// Only produced when the caller explicitly asks for decoding; a raw read
/// never fails this way.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The response body was empty.
    #[error("No JSON available in the response (status {status}, empty body)")]
    EmptyBody {
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The response body was not valid JSON for the requested type.
    #[error("No JSON available in the response (status {status}): {source}")]
    InvalidJson {
        /// The HTTP status code of the response.
        status: u16,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Returns the HTTP status code of the response that failed to decode.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::EmptyBody { status } | Self::InvalidJson { status, .. } => *status,
        }
    }
}

/// Unified error type for transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_decode_error_reports_status() {
        let error = DecodeError::EmptyBody { status: 204 };
        assert_eq!(error.status(), 204);
        assert!(error.to_string().contains("No JSON available"));

        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = DecodeError::InvalidJson {
            status: 502,
            source,
        };
        assert_eq!(error.status(), 502);
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _ = invalid;

        let decode: &dyn std::error::Error = &DecodeError::EmptyBody { status: 200 };
        let _ = decode;
    }
}
