//! Authentication error types.
//!
//! Failures of the credential exchange are kept apart from failures of
//! later resource calls: a rejected password grant is an [`AuthError`], a
//! 401 on a resource call is a status code on the returned response.

use crate::rest::DispatchError;
use thiserror::Error;

/// Errors that can occur while obtaining or verifying a bearer token.
///
/// # Example
///
/// ```rust
/// use opisense_client::AuthError;
///
/// let error = AuthError::GrantRejected {
///     status: 400,
///     error: "invalid_grant".to_string(),
///     description: Some("invalid_username_or_password".to_string()),
/// };
/// assert!(error.to_string().contains("invalid_grant"));
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity endpoint rejected the password grant.
    #[error("Password grant rejected by the identity endpoint ({status}): {error}{}", .description.as_deref().map(|d| format!(" - {d}")).unwrap_or_default())]
    GrantRejected {
        /// HTTP status code returned by the identity endpoint.
        status: u16,
        /// OAuth error code (e.g. `invalid_grant`, `invalid_scope`).
        error: String,
        /// OAuth error description, if provided.
        description: Option<String>,
    },

    /// The identity endpoint answered with a body that is not a token response.
    #[error("Malformed token response ({status}): {message}")]
    MalformedTokenResponse {
        /// HTTP status code returned by the identity endpoint.
        status: u16,
        /// Details about the parse failure.
        message: String,
    },

    /// The identity endpoint returned an empty access token.
    #[error("The identity endpoint returned an empty access token")]
    EmptyAccessToken,

    /// A stored token value does not use the `Bearer <token>` format.
    #[error("Invalid token format. Expected 'Bearer <access token>'")]
    InvalidTokenFormat,

    /// The identity endpoint could not be reached.
    #[error("Network error during authorization: {0}")]
    Network(#[from] reqwest::Error),

    /// The verification read could not be completed.
    #[error("Token verification failed: {0}")]
    Verification(#[source] DispatchError),

    /// The verification read was answered with a non-success status.
    #[error("Token verification rejected with status {status}")]
    VerificationRejected {
        /// HTTP status code of the account read.
        status: u16,
    },

    /// The verification read returned an account without id or name.
    #[error("Token verification returned an account without id or name")]
    IncompleteAccount,
}
