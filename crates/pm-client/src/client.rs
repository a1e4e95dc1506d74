use std::time::Duration;

use pm_config::{ApiConfig, is_absolute_http, normalize_origin};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, RequestError};
use crate::request::RequestDescriptor;

const JSON_CONTENT_TYPE: &str = "application/json";

/// JSON API client for the patient-management backend.
///
/// Holds no per-call state; concurrent calls share only the pooled
/// connection set inside `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: String,
    origin: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the origin is unusable or the
    /// underlying HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::builder()
            .base(config.normalized_base())
            .origin(config.normalized_origin())
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Configured API base; empty means requests go to the origin.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// URL of the first attempt for `path`.
    ///
    /// A base that is not an absolute URL is itself relative to the origin.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        if is_absolute_http(&self.base) {
            format!("{}{path}", self.base)
        } else {
            format!("{}{}{path}", self.origin, self.base)
        }
    }

    fn same_origin(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    /// A failed call may be retried at the origin only when an absolute
    /// http(s) base was configured.
    #[must_use]
    pub fn fallback_enabled(&self) -> bool {
        !self.base.is_empty() && is_absolute_http(&self.base)
    }

    /// Issue one request and decode its body.
    ///
    /// Returns `Ok(None)` for 204 and for any success body whose content type
    /// is not JSON.
    ///
    /// # Errors
    ///
    /// - `ClientError::Transport` if no response arrived (after the single
    ///   same-origin retry, when eligible)
    /// - `ClientError::Status` for a non-2xx response
    /// - `ClientError::Decode` if a JSON body does not parse
    /// - `ClientError::InvalidRequest` for an unusable header
    pub async fn request(
        &self,
        descriptor: &RequestDescriptor,
        token: Option<&str>,
    ) -> Result<Option<Value>, ClientError> {
        let headers = build_headers(descriptor, token)?;
        let url = self.resolve(&descriptor.path);
        tracing::debug!(method = %descriptor.method, %url, "sending request");

        let response = match self.send(&url, descriptor, &headers).await {
            Ok(response) => response,
            Err(error) if self.fallback_enabled() => {
                let fallback = self.same_origin(&descriptor.path);
                tracing::warn!(%error, %url, %fallback, "request failed; retrying against same origin");
                self.send(&fallback, descriptor, &headers).await?
            }
            Err(error) => return Err(error.into()),
        };

        read_response(response).await
    }

    /// [`ApiClient::request`] with the JSON body decoded into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::request`].
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        descriptor: &RequestDescriptor,
        token: Option<&str>,
    ) -> Result<Option<T>, ClientError> {
        self.request(descriptor, token)
            .await?
            .map(serde_json::from_value)
            .transpose()
            .map_err(ClientError::from)
    }

    async fn send(
        &self,
        url: &str,
        descriptor: &RequestDescriptor,
        headers: &HeaderMap,
    ) -> Result<Response, reqwest::Error> {
        let mut request = self
            .client
            .request(descriptor.method.clone(), url)
            .headers(headers.clone());
        if let Some(body) = &descriptor.body {
            request = request.body(body.clone());
        }
        request.send().await
    }
}

/// Default JSON content type, then caller headers, then the bearer token.
fn build_headers(
    descriptor: &RequestDescriptor,
    token: Option<&str>,
) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    for (name, value) in &descriptor.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidRequest(format!("header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::InvalidRequest(format!("header '{name}': {e}")))?;
        headers.insert(name, value);
    }

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ClientError::InvalidRequest(format!("bearer token: {e}")))?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(headers)
}

async fn read_response(response: Response) -> Result<Option<Value>, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "request failed");
        return Err(RequestError::new(status.as_u16(), body).into());
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.contains(JSON_CONTENT_TYPE));
    if !is_json {
        return Ok(None);
    }

    let bytes = response.bytes().await?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}

/// Builder for [`ApiClient`]
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    base: Option<String>,
    origin: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the origin is missing or not
    /// an absolute http(s) URL, or the HTTP client fails to build.
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let origin = self
            .origin
            .map(|o| normalize_origin(&o))
            .filter(|o| !o.is_empty())
            .ok_or_else(|| ClientError::Configuration("origin is required".into()))?;
        if !is_absolute_http(&origin) {
            return Err(ClientError::Configuration(format!(
                "origin '{origin}' is not an absolute http(s) URL"
            )));
        }
        let base = self.base.map(|b| normalize_origin(&b)).unwrap_or_default();

        let mut client_builder = ClientBuilder::new();
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| concat!("pm-client/", env!("CARGO_PKG_VERSION")).to_string()),
        );

        let client = client_builder
            .build()
            .map_err(|e| ClientError::Configuration(format!("http client: {e}")))?;

        Ok(ApiClient {
            client,
            base,
            origin,
        })
    }
}
