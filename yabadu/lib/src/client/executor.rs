//! Request execution with tracing instrumentation.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use tracing::{Span, debug, instrument};
use url::Url;

use crate::apis::{
    ApplicationsApi, AuthenticationApi, DefaultApi, SystemApi, TargetGenerationApi,
};
use crate::config::{ApiKeyLocation, Configuration, Credentials};
use crate::error::ApiError;
use crate::request::RequestDescriptor;
use crate::response::ResponseFormat;

/// The transport shared by every facade.
///
/// Holds the immutable [`Configuration`] and a pooled `reqwest::Client`.
/// Cloning is cheap and clones share both.
///
/// ## Examples
///
/// ```rust,no_run
/// use yabadu_lib::{ApiClient, Configuration};
///
/// # async fn example() -> Result<(), yabadu_lib::ApiError> {
/// let config = Configuration::builder("https://api.yabadu.com").build()?;
/// let client = ApiClient::new(config)?;
///
/// let units = client.system().system_units_get().await?;
/// println!("{:?}", units.units);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: Arc<Configuration>,
}

impl ApiClient {
    /// Creates a client for the given configuration.
    ///
    /// No network I/O happens here.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Other`] if the HTTP client cannot be constructed.
    pub fn new(config: Configuration) -> Result<Self, ApiError> {
        Self::with_shared_config(Arc::new(config))
    }

    /// Creates a client that shares an existing configuration.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Other`] if the HTTP client cannot be constructed.
    pub fn with_shared_config(config: Arc<Configuration>) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::other(format!("invalid header name: {e}")))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| ApiError::other(format!("invalid header value: {e}")))?;
            default_headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ApiError::other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The shared configuration handle.
    pub fn shared_configuration(&self) -> Arc<Configuration> {
        Arc::clone(&self.config)
    }

    /// System reference data.
    pub fn system(&self) -> SystemApi<'_> {
        SystemApi::new(self)
    }

    /// Private label applications.
    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi::new(self)
    }

    /// Login, token refresh and logout.
    pub fn authentication(&self) -> AuthenticationApi<'_> {
        AuthenticationApi::new(self)
    }

    /// Target generation jobs.
    pub fn target_generation(&self) -> TargetGenerationApi<'_> {
        TargetGenerationApi::new(self)
    }

    /// Untagged operations such as the health check.
    pub fn default_api(&self) -> DefaultApi<'_> {
        DefaultApi::new(self)
    }

    /// Builds the absolute URL for a request, query included.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Other`] if a path parameter is empty, `.` or `..`,
    /// if a placeholder is left unresolved, or if the URL does not parse.
    pub fn url_for<F: ResponseFormat>(
        &self,
        request: &RequestDescriptor<F>,
    ) -> Result<Url, ApiError> {
        if let Some(param) = request.invalid_params().first() {
            return Err(ApiError::other(format!(
                "invalid value for path parameter `{param}` of {}: must be a non-empty segment other than `.` or `..`",
                request.endpoint_id()
            )));
        }
        if let Some(param) = request.unresolved_params().first() {
            return Err(ApiError::other(format!(
                "unresolved path parameter `{param}` for {}",
                request.endpoint_id()
            )));
        }

        let mut url = Url::parse(&format!("{}{}", self.config.base_path(), request.path()))?;
        if !request.query_pairs().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in request.query_pairs() {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Sends one request and decodes the response.
    ///
    /// ## Errors
    ///
    /// - [`ApiError::Server`] for any non-2xx response
    /// - [`ApiError::Network`] when no response arrives (refused, timeout, broken stream)
    /// - [`ApiError::Other`] for URL, serialization or decode failures, and for
    ///   a body attached to a method that carries none
    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(
            endpoint = request.endpoint_id(),
            http.method = %request.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send<F: ResponseFormat>(
        &self,
        request: RequestDescriptor<F>,
    ) -> Result<F::Output, ApiError> {
        let url = self.url_for(&request)?;
        Span::current().record("http.url", url.as_str());

        if request.body().is_some() && !request.method().has_body() {
            return Err(ApiError::other(format!(
                "{} requests cannot carry a body ({})",
                request.method(),
                request.endpoint_id()
            )));
        }

        let mut builder = self
            .client
            .request(request.method().to_reqwest(), url)
            .header(ACCEPT, F::content_type());

        builder = self.apply_credentials(builder)?;

        if let Some(body) = request.body() {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.clone());
        }

        let response = builder.send().await.map_err(classify_send_error)?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            let body = response.text().await.map_err(|e| {
                ApiError::network(format!(
                    "failed to read HTTP {} response body: {}",
                    status.as_u16(),
                    error_chain(&e)
                ))
            })?;
            debug!(status = status.as_u16(), "request rejected by server");
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Span::current().record("otel.status_code", "OK");

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(error_chain(&e)))?;
        F::parse(body).await
    }

    /// Applies the configured credentials to a request builder.
    fn apply_credentials(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let Some(credentials) = self.config.credentials() else {
            return Ok(builder);
        };

        match credentials {
            Credentials::AccessToken(token) => {
                Ok(builder.header(AUTHORIZATION, format!("Bearer {token}")))
            }
            Credentials::ApiKey {
                key,
                location: ApiKeyLocation::Header(header),
            } => {
                let name = HeaderName::try_from(header.as_str())
                    .map_err(|e| ApiError::other(format!("invalid API key header: {e}")))?;
                Ok(builder.header(name, key.as_str()))
            }
            Credentials::ApiKey {
                key,
                location: ApiKeyLocation::Query(param),
            } => Ok(builder.query(&[(param.as_str(), key.as_str())])),
            Credentials::Basic { username, password } => {
                Ok(builder.basic_auth(username, Some(password)))
            }
        }
    }
}

/// Maps a failed `send()` to network or local classification.
fn classify_send_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::other(format!("failed to build request: {err}"))
    } else if err.is_timeout() {
        ApiError::network(format!("request timed out: {err}"))
    } else {
        ApiError::network(error_chain(&err))
    }
}

/// Joins an error with its sources so the root cause (e.g. "Connection refused") is visible.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
