//! Request dispatcher for Opisense resources.
//!
//! The [`Dispatcher`] turns reads and writes into single HTTP calls. Write
//! paths come from [`resolve_path`], so a missing identifier is reported
//! before anything is sent. The bearer token is an argument of every call and
//! is never stored.

use serde::de::DeserializeOwned;

use crate::auth::BearerToken;
use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::OpisenseConfig;
use crate::rest::errors::DispatchError;
use crate::rest::filter::ApiFilter;
use crate::rest::object::RemoteObject;
use crate::rest::path::{present, resolve_path, ResourceOperation};
use crate::rest::response::{ReadOutput, ResponseFormat};

/// Dispatcher for Opisense resource calls.
///
/// Every method issues exactly one request and returns once it completes.
/// Non-2xx responses are returned to the caller, never raised.
///
/// # Thread Safety
///
/// `Dispatcher` is `Send + Sync` and holds no authorization state, so one
/// instance can serve concurrent calls made with different tokens.
///
/// # Example
///
/// ```rust,ignore
/// use opisense_client::rest::{ApiFilter, Dispatcher};
/// use opisense_client::rest::resources::{Site, Variable};
/// use opisense_client::OpisenseConfig;
///
/// let dispatcher = Dispatcher::new(&OpisenseConfig::default())?;
///
/// // Read every sensor and meter source of site 12
/// let filter = ApiFilter::new("sources")
///     .with("siteId", "12")
///     .with_all("type", ["sensor", "meter"]);
/// let response = dispatcher.get(&token, &filter).await?;
///
/// // Create a variable under source 42
/// let variable = Variable { name: Some("Energy".to_string()), ..Variable::default() };
/// let response = dispatcher.create(&variable, &token, Some("42"), None).await?;
/// ```
#[derive(Debug)]
pub struct Dispatcher {
    http_client: HttpClient,
    config: OpisenseConfig,
}

// Verify Dispatcher is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dispatcher>();
};

impl Dispatcher {
    /// Creates a dispatcher for the configured API origin.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the HTTP client cannot be created.
    pub fn new(config: &OpisenseConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            config: config.clone(),
        })
    }

    /// Returns the configuration this dispatcher was built with.
    #[must_use]
    pub const fn config(&self) -> &OpisenseConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Reads `filter` and returns the raw response.
    ///
    /// The status code is not inspected.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Precondition`] if the filter path is blank or
    ///   carries a query string; nothing is sent
    /// - [`DispatchError::Http`] if the request cannot be sent
    pub async fn get(
        &self,
        token: &BearerToken,
        filter: &ApiFilter,
    ) -> Result<HttpResponse, DispatchError> {
        filter.validate()?;

        let request = HttpRequest::builder(
            ResourceOperation::Read.default_http_method(),
            filter.path(),
        )
        .query(filter.query_pairs())
        .bearer(token)
        .build()
        .map_err(HttpError::from)?;

        Ok(self.http_client.request(request).await?)
    }

    /// Reads `filter` and decodes the body into `T`.
    ///
    /// The status code is not inspected. An error body that happens to decode
    /// into `T` is returned as-is.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Http`] if the request cannot be sent
    /// - [`DispatchError::Decode`] if the body is empty or not valid for `T`
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        token: &BearerToken,
        filter: &ApiFilter,
    ) -> Result<T, DispatchError> {
        let response = self.get(token, filter).await?;
        Ok(response.json()?)
    }

    /// Reads `filter` and returns the result in the requested `format`.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Http`] if the request cannot be sent
    /// - [`DispatchError::Decode`] if [`ResponseFormat::Json`] was requested
    ///   and the body is not valid JSON
    pub async fn read(
        &self,
        token: &BearerToken,
        filter: &ApiFilter,
        format: ResponseFormat,
    ) -> Result<ReadOutput, DispatchError> {
        let response = self.get(token, filter).await?;
        match format {
            ResponseFormat::Raw => Ok(ReadOutput::Raw(response)),
            ResponseFormat::Json => Ok(ReadOutput::Json(response.json_value()?)),
        }
    }

    /// Creates `object` with a POST.
    ///
    /// `parent_id` is required for objects nested under a parent (variables).
    /// `force_path` replaces the resolved route.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Precondition`] if a required identifier is missing;
    ///   nothing is sent
    /// - [`DispatchError::Serialize`] if the payload cannot be built
    /// - [`DispatchError::Http`] if the request cannot be sent
    pub async fn create<O: RemoteObject>(
        &self,
        object: &O,
        token: &BearerToken,
        parent_id: Option<&str>,
        force_path: Option<&str>,
    ) -> Result<HttpResponse, DispatchError> {
        self.write(ResourceOperation::Create, object, token, parent_id, force_path)
            .await
    }

    /// Updates `object` with a PUT.
    ///
    /// `parent_id` is required for objects nested under a parent (variables).
    /// `force_path` replaces the resource path; the id is still appended on
    /// generic routes.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Precondition`] if a required identifier is missing;
    ///   nothing is sent
    /// - [`DispatchError::Serialize`] if the payload cannot be built
    /// - [`DispatchError::Http`] if the request cannot be sent
    pub async fn update<O: RemoteObject>(
        &self,
        object: &O,
        token: &BearerToken,
        parent_id: Option<&str>,
        force_path: Option<&str>,
    ) -> Result<HttpResponse, DispatchError> {
        self.write(ResourceOperation::Update, object, token, parent_id, force_path)
            .await
    }

    /// Deletes `object` at `<path>/<id>`.
    ///
    /// `force_path` replaces the resource path; the id is still appended.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Precondition`] if the object has no id; nothing is sent
    /// - [`DispatchError::Http`] if the request cannot be sent
    pub async fn delete<O: RemoteObject>(
        &self,
        object: &O,
        token: &BearerToken,
        force_path: Option<&str>,
    ) -> Result<HttpResponse, DispatchError> {
        let operation = ResourceOperation::Delete;
        let path = resolve_path(object, operation, None, force_path)?;
        tracing::debug!("Resolved {operation} path for {}: {path}", object.type_name());

        let request = HttpRequest::builder(operation.default_http_method(), path)
            .bearer(token)
            .build()
            .map_err(HttpError::from)?;

        Ok(self.http_client.request(request).await?)
    }

    async fn write<O: RemoteObject>(
        &self,
        operation: ResourceOperation,
        object: &O,
        token: &BearerToken,
        parent_id: Option<&str>,
        force_path: Option<&str>,
    ) -> Result<HttpResponse, DispatchError> {
        let path = resolve_path(object, operation, parent_id, force_path)?;
        tracing::debug!(
            "Resolved {operation} path for {}: {path}{}",
            object.type_name(),
            if present(force_path).is_some() { " (forced)" } else { "" }
        );

        let payload = object.to_payload()?;
        let request = HttpRequest::builder(operation.default_http_method(), path)
            .body(payload)
            .bearer(token)
            .build()
            .map_err(HttpError::from)?;

        Ok(self.http_client.request(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiUrl;
    use crate::rest::resources::{Site, Variable};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dispatcher_for(server: &MockServer) -> Dispatcher {
        let config = OpisenseConfig::builder()
            .api_url(ApiUrl::new(server.uri()).unwrap())
            .build()
            .unwrap();
        Dispatcher::new(&config).unwrap()
    }

    fn token() -> BearerToken {
        BearerToken::from_access_token("abc").unwrap()
    }

    #[tokio::test]
    async fn test_create_posts_payload_to_resolved_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sites"))
            .and(body_json(serde_json::json!({"name": "Plant"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 3})))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let site = Site {
            name: Some("Plant".to_string()),
            ..Site::default()
        };

        let response = dispatcher.create(&site, &token(), None, None).await.unwrap();
        assert_eq!(response.code, 201);
    }

    #[tokio::test]
    async fn test_missing_parent_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher
            .create(&Variable::default(), &token(), None, None)
            .await;

        assert!(matches!(result, Err(DispatchError::Precondition(_))));
    }

    #[tokio::test]
    async fn test_read_json_format_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sites"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": 1}])))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let output = dispatcher
            .read(&token(), &ApiFilter::new("sites"), ResponseFormat::Json)
            .await
            .unwrap();

        assert_eq!(output.into_json(), Some(serde_json::json!([{"id": 1}])));
    }

    #[tokio::test]
    async fn test_read_json_format_with_empty_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher
            .read(&token(), &ApiFilter::new("sites"), ResponseFormat::Json)
            .await;

        assert!(matches!(result, Err(DispatchError::Decode(_))));
    }
}
