//! Bearer token handling.
//!
//! A [`BearerToken`] is the opaque credential presented on every resource
//! call. It always carries the `Bearer` scheme prefix followed by one space
//! and a non-empty access token.

use std::fmt;
use std::str::FromStr;

use crate::auth::AuthError;

/// The authorization scheme keyword.
pub const BEARER_SCHEME: &str = "Bearer";

/// An opaque bearer credential, ready to be used as an `Authorization` value.
///
/// No expiry is tracked. When resource calls start answering 401 the caller
/// re-authenticates and passes the new token.
///
/// The `Debug` implementation masks the access token.
///
/// # Example
///
/// ```rust
/// use opisense_client::BearerToken;
///
/// let token = BearerToken::from_access_token("eyJhbGciOi").unwrap();
/// assert_eq!(token.as_str(), "Bearer eyJhbGciOi");
/// assert_eq!(token.access_token(), "eyJhbGciOi");
/// assert_eq!(format!("{token:?}"), "BearerToken(Bearer *****)");
///
/// let parsed: BearerToken = "Bearer eyJhbGciOi".parse().unwrap();
/// assert_eq!(parsed, token);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a raw access token with the bearer scheme prefix.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyAccessToken`] if the token is blank.
    pub fn from_access_token(access_token: impl AsRef<str>) -> Result<Self, AuthError> {
        let access_token = access_token.as_ref().trim();
        if access_token.is_empty() {
            return Err(AuthError::EmptyAccessToken);
        }
        Ok(Self(format!("{BEARER_SCHEME} {access_token}")))
    }

    /// Returns the full header value, `Bearer <access token>`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the raw access token without the scheme prefix.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.0[BEARER_SCHEME.len() + 1..]
    }
}

impl FromStr for BearerToken {
    type Err = AuthError;

    /// Parses a stored `Bearer <token>` value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let access_token = s
            .trim()
            .strip_prefix(BEARER_SCHEME)
            .and_then(|rest| rest.strip_prefix(' '))
            .ok_or(AuthError::InvalidTokenFormat)?;
        Self::from_access_token(access_token)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken({BEARER_SCHEME} *****)")
    }
}

// Verify BearerToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BearerToken>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_has_scheme_prefix_and_single_space() {
        let token = BearerToken::from_access_token("abc.def").unwrap();
        assert!(token.as_str().starts_with("Bearer "));
        assert_eq!(token.as_str(), "Bearer abc.def");
        assert!(!token.access_token().is_empty());
    }

    #[test]
    fn test_blank_access_token_is_rejected() {
        assert!(matches!(
            BearerToken::from_access_token("   "),
            Err(AuthError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_parse_requires_bearer_scheme() {
        assert!(matches!(
            "Basic abc".parse::<BearerToken>(),
            Err(AuthError::InvalidTokenFormat)
        ));
        assert!(matches!(
            "Bearerabc".parse::<BearerToken>(),
            Err(AuthError::InvalidTokenFormat)
        ));
        assert!(matches!(
            "Bearer ".parse::<BearerToken>(),
            Err(AuthError::InvalidTokenFormat | AuthError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_debug_masks_token() {
        let token = BearerToken::from_access_token("secret-token").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-token"));
    }
}
