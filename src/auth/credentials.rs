//! Credential store for the password grant.
//!
//! Pure data: the application identity ([`ApiCredentials`]) and the resource
//! owner identity ([`UserCredentials`]). Both are immutable once built and are
//! never persisted by the client.

use crate::config::{ClientId, ClientSecret, Password, Scope, Username};
use crate::error::ConfigError;

/// Application identity: client id, client secret and requested scope.
///
/// # Example
///
/// ```rust
/// use opisense_client::ApiCredentials;
///
/// let api = ApiCredentials::from_parts("my-app", "my-secret", "opisense-api").unwrap();
/// assert_eq!(api.scope().as_ref(), "opisense-api");
/// assert!(!format!("{api:?}").contains("my-secret"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiCredentials {
    client_id: ClientId,
    client_secret: ClientSecret,
    scope: Scope,
}

impl ApiCredentials {
    /// Creates application credentials from validated parts.
    #[must_use]
    pub const fn new(client_id: ClientId, client_secret: ClientSecret, scope: Scope) -> Self {
        Self {
            client_id,
            client_secret,
            scope,
        }
    }

    /// Validates and creates application credentials from raw strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] naming the first blank field.
    pub fn from_parts(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        scope: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            ClientId::new(client_id)?,
            ClientSecret::new(client_secret)?,
            Scope::new(scope)?,
        ))
    }

    /// Returns the client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the requested scope.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Resource owner identity: user name and password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserCredentials {
    username: Username,
    password: Password,
}

impl UserCredentials {
    /// Creates user credentials from validated parts.
    #[must_use]
    pub const fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }

    /// Validates and creates user credentials from raw strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] naming the first blank field.
    pub fn from_parts(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(Username::new(username)?, Password::new(password)?))
    }

    /// Returns the user name.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}
