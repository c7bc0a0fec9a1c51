//! Configuration types for the Opisense client.
//!
//! # Overview
//!
//! - [`OpisenseConfig`]: The endpoints and header settings used by the client
//! - [`OpisenseConfigBuilder`]: A builder for constructing [`OpisenseConfig`]
//! - [`ApiUrl`]: A validated absolute URL
//! - [`ApiVersion`]: The version marker sent with every resource call
//! - Credential newtypes: [`ClientId`], [`ClientSecret`], [`Scope`],
//!   [`Username`], [`Password`]
//!
//! # Example
//!
//! ```rust
//! use opisense_client::{ApiUrl, ApiVersion, OpisenseConfig};
//!
//! let config = OpisenseConfig::builder()
//!     .api_url(ApiUrl::new("https://api.opinum.com:443/").unwrap())
//!     .api_version(ApiVersion::V1_1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version().as_str(), "1.1");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiUrl, ClientId, ClientSecret, Password, Scope, Username};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default origin for all resource operations.
pub const DEFAULT_API_URL: &str = "https://api.opinum.com:443/";

/// Default identity endpoint accepting the password grant.
pub const DEFAULT_IDENTITY_URL: &str = "https://identity.opinum.com/connect/token";

/// Configuration for the Opisense client.
///
/// Holds the API origin, the identity endpoint, the API version marker and an
/// optional user agent prefix. It carries no credentials and no token.
///
/// # Thread Safety
///
/// `OpisenseConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpisenseConfig {
    api_url: ApiUrl,
    identity_url: ApiUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl OpisenseConfig {
    /// Creates a new builder for constructing an `OpisenseConfig`.
    #[must_use]
    pub fn builder() -> OpisenseConfigBuilder {
        OpisenseConfigBuilder::new()
    }

    /// Returns the API origin.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the identity (token) endpoint.
    #[must_use]
    pub const fn identity_url(&self) -> &ApiUrl {
        &self.identity_url
    }

    /// Returns the API version marker.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for OpisenseConfig {
    fn default() -> Self {
        Self {
            api_url: default_url(DEFAULT_API_URL),
            identity_url: default_url(DEFAULT_IDENTITY_URL),
            api_version: ApiVersion::latest(),
            user_agent_prefix: None,
        }
    }
}

fn default_url(url: &'static str) -> ApiUrl {
    // The defaults are compile-time constants covered by tests.
    ApiUrl::new(url).unwrap_or_else(|e| unreachable!("invalid built-in URL: {e}"))
}

// Verify OpisenseConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OpisenseConfig>();
};

/// Builder for constructing [`OpisenseConfig`] instances.
///
/// Every field is optional.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `identity_url`: [`DEFAULT_IDENTITY_URL`]
/// - `api_version`: [`ApiVersion::latest`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct OpisenseConfigBuilder {
    api_url: Option<ApiUrl>,
    identity_url: Option<ApiUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl OpisenseConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API origin.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the identity endpoint.
    #[must_use]
    pub fn identity_url(mut self, url: ApiUrl) -> Self {
        self.identity_url = Some(url);
        self
    }

    /// Sets the API version marker.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`OpisenseConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if a custom API version is
    /// blank, since it would be sent as an empty version header.
    pub fn build(self) -> Result<OpisenseConfig, ConfigError> {
        if let Some(ApiVersion::Custom(version)) = &self.api_version {
            if version.trim().is_empty() {
                return Err(ConfigError::InvalidApiVersion {
                    version: version.clone(),
                });
            }
        }

        let defaults = OpisenseConfig::default();
        Ok(OpisenseConfig {
            api_url: self.api_url.unwrap_or(defaults.api_url),
            identity_url: self.identity_url.unwrap_or(defaults.identity_url),
            api_version: self.api_version.unwrap_or(defaults.api_version),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
