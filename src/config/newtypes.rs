//! Validated newtype wrappers for configuration and credential values.
//!
//! Every wrapper validates its contents on construction, so an invalid value
//! can never reach the identity endpoint or the resource API.

use crate::error::ConfigError;
use std::fmt;

/// Rejects empty or whitespace-only credential values.
fn non_blank(value: String, field: &'static str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyCredential { field });
    }
    Ok(value)
}

/// The application (client) identifier registered with the identity provider.
///
/// # Example
///
/// ```rust
/// use opisense_client::ClientId;
///
/// let id = ClientId::new("my-app").unwrap();
/// assert_eq!(id.as_ref(), "my-app");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the id is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        non_blank(id.into(), "client_id").map(Self)
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The application secret.
///
/// The `Debug` implementation masks the value so it never shows up in logs.
///
/// ```rust
/// use opisense_client::ClientSecret;
///
/// let secret = ClientSecret::new("s3cr3t").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the secret is blank.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        non_blank(secret.into(), "client_secret").map(Self)
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// The resource scope requested in the password grant (e.g. `opisense-api`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scope(String);

impl Scope {
    /// Creates a new validated scope.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the scope is blank.
    pub fn new(scope: impl Into<String>) -> Result<Self, ConfigError> {
        non_blank(scope.into(), "scope").map(Self)
    }
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The resource owner's user name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated user name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the user name is blank.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        non_blank(username.into(), "username").map(Self)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The resource owner's password, masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyCredential { field: "password" });
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// A validated absolute URL used for the API origin or the identity endpoint.
///
/// The URL must carry a scheme and a host. A trailing slash is tolerated and
/// ignored when joining paths.
///
/// # Example
///
/// ```rust
/// use opisense_client::ApiUrl;
///
/// let url = ApiUrl::new("https://api.opinum.com:443/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("api.opinum.com"));
/// assert_eq!(url.join("sites/12"), "https://api.opinum.com:443/sites/12");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiUrl {
    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the scheme or host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Joins a relative path onto this URL with exactly one separating slash.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reject_blank_values() {
        assert!(matches!(
            ClientId::new("  "),
            Err(ConfigError::EmptyCredential { field: "client_id" })
        ));
        assert!(matches!(
            ClientSecret::new(""),
            Err(ConfigError::EmptyCredential {
                field: "client_secret"
            })
        ));
        assert!(matches!(
            Scope::new(""),
            Err(ConfigError::EmptyCredential { field: "scope" })
        ));
        assert!(matches!(
            Username::new(""),
            Err(ConfigError::EmptyCredential { field: "username" })
        ));
        assert!(matches!(
            Password::new(""),
            Err(ConfigError::EmptyCredential { field: "password" })
        ));
    }

    #[test]
    fn test_password_keeps_surrounding_whitespace() {
        let password = Password::new(" spaced ").unwrap();
        assert_eq!(password.as_ref(), " spaced ");
    }

    #[test]
    fn test_secrets_are_masked_in_debug() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let password = Password::new("hunter2").unwrap();

        assert_eq!(format!("{secret:?}"), "ClientSecret(*****)");
        assert_eq!(format!("{password:?}"), "Password(*****)");
    }

    #[test]
    fn test_api_url_validates_format() {
        let url = ApiUrl::new("https://api.opinum.com:443/").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("api.opinum.com"));

        let url = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));
    }

    #[test]
    fn test_api_url_rejects_invalid() {
        assert!(ApiUrl::new("api.opinum.com").is_err());
        assert!(ApiUrl::new("https://").is_err());
        assert!(ApiUrl::new("://api.opinum.com").is_err());
        assert!(ApiUrl::new("https:///sites").is_err());
    }

    #[test]
    fn test_api_url_join_normalizes_slashes() {
        let with_slash = ApiUrl::new("https://api.opinum.com/").unwrap();
        let without_slash = ApiUrl::new("https://api.opinum.com").unwrap();

        assert_eq!(with_slash.join("sites"), "https://api.opinum.com/sites");
        assert_eq!(without_slash.join("/sites"), "https://api.opinum.com/sites");
    }
}
