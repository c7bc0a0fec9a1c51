//! # Opisense API Client
//!
//! An async client for the Opisense energy-data platform REST API: password
//! grant authentication, resource routing and request dispatch.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`OpisenseConfig`] and [`OpisenseConfigBuilder`]
//! - Validated newtypes for credentials and endpoints
//! - OAuth 2.0 resource owner password grant via [`authorize`]
//! - Route resolution, including routes nested under a parent, via [`rest::resolve_path`]
//! - Read, create, update and delete calls via [`Dispatcher`]
//! - Raw responses with on-demand JSON decoding via [`HttpResponse`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opisense_client::rest::resources::Variable;
//! use opisense_client::{
//!     authorize, ApiCredentials, ApiFilter, Dispatcher, OpisenseConfig, UserCredentials,
//! };
//!
//! let config = OpisenseConfig::default();
//! let api = ApiCredentials::from_parts("my-app", "my-secret", "opisense-api")?;
//! let user = UserCredentials::from_parts("jane@example.com", "hunter2")?;
//!
//! // Obtain a token once and pass it to every call
//! let token = authorize(&config, &api, &user).await?;
//! let dispatcher = Dispatcher::new(&config)?;
//!
//! // GET sources?siteId=12&type=sensor&type=meter
//! let filter = ApiFilter::new("sources")
//!     .with("siteId", "12")
//!     .with_all("type", ["sensor", "meter"]);
//! let sources: serde_json::Value = dispatcher.get_json(&token, &filter).await?;
//!
//! // POST variables/source/42
//! let variable = Variable { name: Some("Energy".to_string()), ..Variable::default() };
//! let response = dispatcher.create(&variable, &token, Some("42"), None).await?;
//! println!("{} {}", response.code, response.text());
//! ```
//!
//! ## Error Tiers
//!
//! - [`ConfigError`]: invalid configuration or credential values
//! - [`AuthError`]: the credential exchange failed
//! - [`DispatchError`]: a resource call could not be made, or a requested
//!   decode failed; a missing identifier is a [`DispatchError::Precondition`]
//!   raised before anything is sent
//!
//! Non-2xx statuses from resource calls are returned on the [`HttpResponse`],
//! not raised.
//!
//! ## Logging
//!
//! The crate logs through [`tracing`]: requests and statuses at debug level,
//! non-2xx statuses and failed token verification at warn level. Tokens and
//! secrets are never logged. No subscriber is installed.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **No stored token**: Every call takes the token it runs with
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiUrl, ApiVersion, ClientId, ClientSecret, OpisenseConfig, OpisenseConfigBuilder, Password,
    Scope, Username,
};
pub use error::ConfigError;

// Re-export authentication types
pub use auth::{
    authorize, authorize_and_verify, verify_token, ApiCredentials, AuthError, BearerToken,
    UserCredentials, VerifiedToken,
};

// Re-export HTTP client types
pub use clients::{DecodeError, HttpError, HttpMethod, HttpResponse};

// Re-export resource access types
pub use rest::{ApiFilter, DispatchError, Dispatcher, ReadOutput, RemoteObject, ResponseFormat};
