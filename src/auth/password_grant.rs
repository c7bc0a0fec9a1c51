//! OAuth 2.0 resource owner password grant against the Opisense identity
//! endpoint.
//!
//! [`authorize`] exchanges application and user credentials for a
//! [`BearerToken`]. [`authorize_and_verify`] additionally reads the `account`
//! resource with the new token to confirm it works; that check is advisory and
//! never discards the token.
//!
//! # Example
//!
//! ```rust,ignore
//! use opisense_client::{authorize, ApiCredentials, OpisenseConfig, UserCredentials};
//!
//! let config = OpisenseConfig::default();
//! let api = ApiCredentials::from_parts("my-app", "my-secret", "opisense-api")?;
//! let user = UserCredentials::from_parts("jane@example.com", "hunter2")?;
//!
//! let token = authorize(&config, &api, &user).await?;
//! assert!(token.as_str().starts_with("Bearer "));
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::{ApiCredentials, AuthError, BearerToken, UserCredentials};
use crate::config::OpisenseConfig;
use crate::rest::resources::Account;
use crate::rest::{ApiFilter, Dispatcher, DispatchError, ObjectType};

/// Grant type for the resource owner password flow.
const PASSWORD_GRANT_TYPE: &str = "password";

/// Form body for the password grant.
#[derive(Debug, Serialize)]
struct PasswordGrantRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    scope: &'a str,
    username: &'a str,
    password: &'a str,
}

/// Successful token endpoint response. Only the access token is used.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OAuth error body returned on a rejected grant.
#[derive(Debug, Default, Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// A token together with the outcome of its verification read.
#[derive(Debug)]
pub struct VerifiedToken {
    /// The bearer token obtained from the identity endpoint.
    pub token: BearerToken,
    /// The account resolved with the token, or why it could not be resolved.
    pub account: Result<Account, AuthError>,
}

impl VerifiedToken {
    /// Returns `true` if the token resolved an account.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.account.is_ok()
    }
}

/// Obtains a bearer token with the resource owner password grant.
///
/// The credentials are POSTed as `application/x-www-form-urlencoded` to the
/// configured identity endpoint.
///
/// # Errors
///
/// - [`AuthError::Network`] if the identity endpoint cannot be reached
/// - [`AuthError::GrantRejected`] if the endpoint answers with a non-2xx status
/// - [`AuthError::MalformedTokenResponse`] if the success body is not a token response
/// - [`AuthError::EmptyAccessToken`] if the returned access token is blank
pub async fn authorize(
    config: &OpisenseConfig,
    api_credentials: &ApiCredentials,
    user_credentials: &UserCredentials,
) -> Result<BearerToken, AuthError> {
    let form = PasswordGrantRequest {
        grant_type: PASSWORD_GRANT_TYPE,
        client_id: api_credentials.client_id().as_ref(),
        client_secret: api_credentials.client_secret().as_ref(),
        scope: api_credentials.scope().as_ref(),
        username: user_credentials.username().as_ref(),
        password: user_credentials.password().as_ref(),
    };

    tracing::debug!("Requesting password grant from {}", config.identity_url());

    let client = reqwest::Client::builder().use_rustls_tls().build()?;
    let response = client
        .post(config.identity_url().as_ref())
        .form(&form)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;

    if !(200..=299).contains(&status) {
        let rejection: TokenErrorResponse = serde_json::from_str(&body).unwrap_or_default();
        let error = if rejection.error.is_empty() {
            body.trim().to_string()
        } else {
            rejection.error
        };
        tracing::warn!("Password grant rejected with status {status}: {error}");
        return Err(AuthError::GrantRejected {
            status,
            error,
            description: rejection.error_description,
        });
    }

    let token_response: TokenResponse =
        serde_json::from_str(&body).map_err(|e| AuthError::MalformedTokenResponse {
            status,
            message: format!("Failed to parse token response: {e}"),
        })?;

    BearerToken::from_access_token(token_response.access_token)
}

/// Obtains a bearer token and checks it by reading the `account` resource.
///
/// The verification outcome is reported in [`VerifiedToken::account`]. A
/// failed verification is logged at warn level and the token is still
/// returned.
///
/// # Errors
///
/// Returns the same errors as [`authorize`]. Verification failures are never
/// returned here.
pub async fn authorize_and_verify(
    config: &OpisenseConfig,
    api_credentials: &ApiCredentials,
    user_credentials: &UserCredentials,
) -> Result<VerifiedToken, AuthError> {
    let token = authorize(config, api_credentials, user_credentials).await?;

    let account = match Dispatcher::new(config) {
        Ok(dispatcher) => verify_token(&dispatcher, &token).await,
        Err(e) => Err(AuthError::Verification(DispatchError::Http(e))),
    };

    match &account {
        Ok(account) => tracing::info!(
            "Token verified for account {} ({})",
            account.name.as_deref().unwrap_or_default(),
            account.id.unwrap_or_default()
        ),
        Err(e) => tracing::warn!("Token obtained but verification failed: {e}"),
    }

    Ok(VerifiedToken { token, account })
}

/// Reads the `account` resource with `token` to confirm it is accepted.
///
/// # Errors
///
/// - [`AuthError::Verification`] if the read fails or its body cannot be decoded
/// - [`AuthError::VerificationRejected`] if the read answers with a non-2xx status
/// - [`AuthError::IncompleteAccount`] if the account has no id or an empty name
pub async fn verify_token(
    dispatcher: &Dispatcher,
    token: &BearerToken,
) -> Result<Account, AuthError> {
    let response = dispatcher
        .get(token, &ApiFilter::for_type(ObjectType::Account))
        .await
        .map_err(AuthError::Verification)?;

    if !response.is_ok() {
        return Err(AuthError::VerificationRejected {
            status: response.code,
        });
    }

    let account: Account = response
        .json()
        .map_err(|e| AuthError::Verification(DispatchError::Decode(e)))?;

    let has_name = account.name.as_deref().is_some_and(|n| !n.trim().is_empty());
    if account.id.is_none() || !has_name {
        return Err(AuthError::IncompleteAccount);
    }

    Ok(account)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PasswordGrantRequest<'_>>();
    assert_send_sync::<VerifiedToken>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiUrl;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Metadata, Subscriber};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Collects the formatted fields of every event into one buffer.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<String>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            self.0.lock().unwrap().clone()
        }
    }

    impl Visit for CapturedLogs {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            let mut buffer = self.0.lock().unwrap();
            buffer.push_str(&format!("{}={value:?}\n", field.name()));
        }
    }

    impl Subscriber for CapturedLogs {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            event.record(&mut self.clone());
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    fn config_for(server: &MockServer) -> OpisenseConfig {
        OpisenseConfig::builder()
            .api_url(ApiUrl::new(server.uri()).unwrap())
            .identity_url(ApiUrl::new(format!("{}/connect/token", server.uri())).unwrap())
            .build()
            .unwrap()
    }

    fn credentials() -> (ApiCredentials, UserCredentials) {
        (
            ApiCredentials::from_parts("app-id", "app-secret", "opisense-api").unwrap(),
            UserCredentials::from_parts("jane@example.com", "p@ss word").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_authorize_posts_password_grant_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .and(header("Content-Type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=password"))
            .and(body_string_contains("client_id=app-id"))
            .and(body_string_contains("client_secret=app-secret"))
            .and(body_string_contains("scope=opisense-api"))
            .and(body_string_contains("username=jane%40example.com"))
            .and(body_string_contains("password=p%40ss+word"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok-123",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (api, user) = credentials();
        let token = authorize(&config_for(&server), &api, &user).await.unwrap();

        assert_eq!(token.as_str(), "Bearer tok-123");
    }

    #[tokio::test]
    async fn test_authorize_logs_never_contain_user_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "access_token": "tok-123" })),
            )
            .mount(&server)
            .await;

        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.clone());

        let (api, user) = credentials();
        authorize(&config_for(&server), &api, &user).await.unwrap();

        let output = logs.contents();
        assert!(output.contains("/connect/token"));
        assert!(!output.contains("jane@example.com"));
        assert!(!output.contains("p@ss word"));
        assert!(!output.contains("app-secret"));
    }

    #[tokio::test]
    async fn test_authorize_maps_oauth_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "invalid_username_or_password"
            })))
            .mount(&server)
            .await;

        let (api, user) = credentials();
        let result = authorize(&config_for(&server), &api, &user).await;

        match result {
            Err(AuthError::GrantRejected {
                status,
                error,
                description,
            }) => {
                assert_eq!(status, 400);
                assert_eq!(error, "invalid_grant");
                assert_eq!(description.as_deref(), Some("invalid_username_or_password"));
            }
            other => panic!("Expected GrantRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_authorize_rejection_with_plain_text_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let (api, user) = credentials();
        let result = authorize(&config_for(&server), &api, &user).await;

        assert!(matches!(
            result,
            Err(AuthError::GrantRejected { status: 503, ref error, description: None })
                if error == "Service Unavailable"
        ));
    }

    #[tokio::test]
    async fn test_authorize_malformed_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let (api, user) = credentials();
        let result = authorize(&config_for(&server), &api, &user).await;

        assert!(matches!(
            result,
            Err(AuthError::MalformedTokenResponse { status: 200, .. })
        ));
    }

    #[tokio::test]
    async fn test_authorize_empty_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "access_token": "" })),
            )
            .mount(&server)
            .await;

        let (api, user) = credentials();
        let result = authorize(&config_for(&server), &api, &user).await;

        assert!(matches!(result, Err(AuthError::EmptyAccessToken)));
    }

    #[tokio::test]
    async fn test_verify_token_rejected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new(&config_for(&server)).unwrap();
        let token = BearerToken::from_access_token("stale").unwrap();
        let result = verify_token(&dispatcher, &token).await;

        assert!(matches!(
            result,
            Err(AuthError::VerificationRejected { status: 401 })
        ));
    }

    #[tokio::test]
    async fn test_verify_token_incomplete_account() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 7 })),
            )
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new(&config_for(&server)).unwrap();
        let token = BearerToken::from_access_token("abc").unwrap();
        let result = verify_token(&dispatcher, &token).await;

        assert!(matches!(result, Err(AuthError::IncompleteAccount)));
    }
}
