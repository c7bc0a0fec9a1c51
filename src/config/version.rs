//! Opisense API version marker.
//!
//! Every resource call carries the version in the `X-Opisense-Api-Version`
//! header. This module provides the [`ApiVersion`] enum for that marker.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Opisense API version marker.
///
/// # Example
///
/// ```rust
/// use opisense_client::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "1.1");
///
/// let version: ApiVersion = "1.1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1_1);
///
/// let custom: ApiVersion = "2.0".parse().unwrap();
/// assert_eq!(custom, ApiVersion::Custom("2.0".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 1.1.
    V1_1,
    /// Any other version marker, passed through verbatim.
    Custom(String),
}

impl ApiVersion {
    /// Name of the request header carrying the version marker.
    pub const HEADER: &'static str = "X-Opisense-Api-Version";

    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1_1
    }

    /// Returns the marker sent in the version header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1_1 => "1.1",
            Self::Custom(version) => version,
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
            "1.1" => Ok(Self::V1_1),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}
