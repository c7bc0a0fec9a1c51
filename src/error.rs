//! Error types for the Opisense client.
//!
//! This module contains the configuration and validation errors raised while
//! building an [`OpisenseConfig`](crate::OpisenseConfig) or constructing
//! credentials. Errors raised by the dispatch layer live next to the code that
//! produces them ([`crate::clients`], [`crate::rest`], [`crate::auth`]).
//!
//! # Example
//!
//! ```rust
//! use opisense_client::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyCredential { field: "client_id" })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant carries enough context to tell the caller what to fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A credential value was empty or blank.
    #[error("Credential '{field}' cannot be empty.")]
    EmptyCredential {
        /// The name of the credential field.
        field: &'static str,
    },

    /// An API version marker is invalid.
    #[error("Invalid API version '{version}'. Expected a non-empty version marker such as '1.1'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A URL is invalid.
    #[error("Invalid URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.opinum.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
