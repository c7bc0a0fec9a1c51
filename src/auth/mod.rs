//! Authentication for the Opisense API.
//!
//! This module obtains bearer tokens from the Opisense identity endpoint with
//! the OAuth 2.0 resource owner password grant.
//!
//! # Overview
//!
//! - [`ApiCredentials`], [`UserCredentials`]: The credential store
//! - [`BearerToken`]: The opaque `Bearer <token>` credential
//! - [`authorize`]: Exchanges credentials for a token
//! - [`authorize_and_verify`]: Same, then checks the token against `account`
//! - [`verify_token`]: Re-checks an existing token
//! - [`AuthError`]: Authentication failures
//!
//! # Token Lifetime
//!
//! Tokens are not refreshed or tracked. When a resource call answers 401,
//! call [`authorize`] again and use the new token.
//!
//! # Example
//!
//! ```rust,ignore
//! use opisense_client::{authorize_and_verify, ApiCredentials, OpisenseConfig, UserCredentials};
//!
//! let config = OpisenseConfig::default();
//! let api = ApiCredentials::from_parts("my-app", "my-secret", "opisense-api")?;
//! let user = UserCredentials::from_parts("jane@example.com", "hunter2")?;
//!
//! let verified = authorize_and_verify(&config, &api, &user).await?;
//! if let Ok(account) = &verified.account {
//!     println!("Connected to {:?}", account.name);
//! }
//! let token = verified.token;
//! ```

mod credentials;
mod error;
mod password_grant;
mod token;

pub use credentials::{ApiCredentials, UserCredentials};
pub use error::AuthError;
pub use password_grant::{authorize, authorize_and_verify, verify_token, VerifiedToken};
pub use token::{BearerToken, BEARER_SCHEME};
