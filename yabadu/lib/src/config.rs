//! Client configuration.
//!
//! A [`Configuration`] is built once from [`ConfigurationParameters`] (or the
//! environment), validated, and then only read. Every facade created from a
//! client shares the same configuration.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

use crate::error::ConfigError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header used for API keys when no other location is configured.
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Where an API key is placed on outgoing requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyLocation {
    /// Sent as `<name>: <key>`.
    Header(String),
    /// Appended as `?<name>=<key>`.
    Query(String),
}

impl Default for ApiKeyLocation {
    fn default() -> Self {
        Self::Header(DEFAULT_API_KEY_HEADER.to_string())
    }
}

/// Credential material forwarded with every request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Bearer token: `Authorization: Bearer <token>`.
    AccessToken(String),
    /// API key in a header or query parameter.
    ApiKey {
        /// The key itself.
        key: String,
        /// Where the key goes.
        location: ApiKeyLocation,
    },
    /// HTTP Basic authentication.
    Basic {
        /// Account name.
        username: String,
        /// Account password.
        password: String,
    },
}

impl Credentials {
    /// Short name of the scheme, safe to log.
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::AccessToken(_) => "bearer",
            Self::ApiKey { .. } => "api_key",
            Self::Basic { .. } => "basic",
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessToken(_) => f.debug_tuple("AccessToken").field(&"<redacted>").finish(),
            Self::ApiKey { location, .. } => f
                .debug_struct("ApiKey")
                .field("key", &"<redacted>")
                .field("location", location)
                .finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Plain options used to construct a [`Configuration`].
///
/// Every field is optional; [`Configuration::new`] decides what is valid.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationParameters {
    /// Base URL for all requests, e.g. `https://api.yabadu.com`.
    pub base_path: Option<String>,
    /// Bearer token.
    pub access_token: Option<String>,
    /// API key.
    pub api_key: Option<String>,
    /// Header carrying the API key (default `X-API-Key`).
    pub api_key_header: Option<String>,
    /// Query parameter carrying the API key instead of a header.
    pub api_key_query: Option<String>,
    /// Basic auth username.
    pub username: Option<String>,
    /// Basic auth password.
    pub password: Option<String>,
    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

/// Immutable client configuration.
///
/// ## Examples
///
/// ```
/// use yabadu_lib::{Configuration, Credentials};
///
/// let config = Configuration::builder("https://api.yabadu.com")
///     .access_token("secret")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_path(), "https://api.yabadu.com");
/// assert!(matches!(config.credentials(), Some(Credentials::AccessToken(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    base_path: String,
    credentials: Option<Credentials>,
    headers: Vec<(String, String)>,
    timeout: Duration,
}

impl Configuration {
    /// Validates the parameters and builds a configuration.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if the base path is missing or not an
    /// http(s) URL, if it carries a query or fragment, if more than one credential scheme is set, if only half
    /// of a username/password pair is set, or if a header is invalid.
    pub fn new(params: ConfigurationParameters) -> Result<Self, ConfigError> {
        let base_path = params
            .base_path
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::missing_field("base_path"))?;
        let parsed = Url::parse(base_path)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }
        // Endpoint paths are appended verbatim, so nothing may follow the path.
        if parsed.query().is_some() {
            return Err(ConfigError::BasePathComponent { component: "query" });
        }
        if parsed.fragment().is_some() {
            return Err(ConfigError::BasePathComponent {
                component: "fragment",
            });
        }

        let credentials = resolve_credentials(&params)?;

        for (name, value) in &params.headers {
            HeaderName::try_from(name.as_str())
                .map_err(|e| ConfigError::invalid_header(name, e))?;
            HeaderValue::try_from(value.as_str())
                .map_err(|e| ConfigError::invalid_header(name, e))?;
        }

        Ok(Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            credentials,
            headers: params.headers,
            timeout: params
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        })
    }

    /// Starts a builder for the given base path.
    pub fn builder(base_path: impl Into<String>) -> ConfigurationBuilder {
        ConfigurationBuilder {
            params: ConfigurationParameters {
                base_path: Some(base_path.into()),
                ..Default::default()
            },
        }
    }

    /// Builds a configuration from `YABADU_*` environment variables.
    ///
    /// - `YABADU_BASE_PATH` (required)
    /// - `YABADU_ACCESS_TOKEN`
    /// - `YABADU_API_KEY`, `YABADU_API_KEY_HEADER`
    /// - `YABADU_USERNAME`, `YABADU_PASSWORD`
    /// - `YABADU_TIMEOUT_SECS`
    ///
    /// Empty variables count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Same rules as [`Configuration::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let timeout = match get("YABADU_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvValue {
                        var: "YABADU_TIMEOUT_SECS",
                        value: raw.clone(),
                    })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Self::new(ConfigurationParameters {
            base_path: get("YABADU_BASE_PATH"),
            access_token: get("YABADU_ACCESS_TOKEN"),
            api_key: get("YABADU_API_KEY"),
            api_key_header: get("YABADU_API_KEY_HEADER"),
            api_key_query: None,
            username: get("YABADU_USERNAME"),
            password: get("YABADU_PASSWORD"),
            headers: Vec::new(),
            timeout,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Configured credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Extra headers sent with every request.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn resolve_credentials(
    params: &ConfigurationParameters,
) -> Result<Option<Credentials>, ConfigError> {
    let mut schemes = Vec::new();
    if params.access_token.is_some() {
        schemes.push("access_token");
    }
    if params.api_key.is_some() {
        schemes.push("api_key");
    }
    if params.username.is_some() || params.password.is_some() {
        schemes.push("basic");
    }
    if schemes.len() > 1 {
        return Err(ConfigError::ConflictingCredentials { schemes });
    }
    if params.api_key_header.is_some() && params.api_key_query.is_some() {
        return Err(ConfigError::ConflictingCredentials {
            schemes: vec!["api_key_header", "api_key_query"],
        });
    }

    if let Some(token) = &params.access_token {
        return Ok(Some(Credentials::AccessToken(token.clone())));
    }

    if let Some(key) = &params.api_key {
        let location = match (&params.api_key_header, &params.api_key_query) {
            (_, Some(query)) => ApiKeyLocation::Query(query.clone()),
            (Some(header), None) => {
                HeaderName::try_from(header.as_str())
                    .map_err(|e| ConfigError::invalid_header(header, e))?;
                ApiKeyLocation::Header(header.clone())
            }
            (None, None) => ApiKeyLocation::default(),
        };
        return Ok(Some(Credentials::ApiKey {
            key: key.clone(),
            location,
        }));
    }

    match (&params.username, &params.password) {
        (Some(username), Some(password)) => Ok(Some(Credentials::Basic {
            username: username.clone(),
            password: password.clone(),
        })),
        (None, None) => Ok(None),
        _ => Err(ConfigError::IncompleteBasicAuth),
    }
}

/// Fluent builder for [`Configuration`].
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    params: ConfigurationParameters,
}

impl ConfigurationBuilder {
    /// Sets a bearer token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.params.access_token = Some(token.into());
        self
    }

    /// Sets an API key sent in the default `X-API-Key` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.params.api_key = Some(key.into());
        self
    }

    /// Sends the API key in the named header.
    pub fn api_key_header(mut self, header: impl Into<String>) -> Self {
        self.params.api_key_header = Some(header.into());
        self
    }

    /// Sends the API key as the named query parameter.
    pub fn api_key_query(mut self, param: impl Into<String>) -> Self {
        self.params.api_key_query = Some(param.into());
        self
    }

    /// Sets HTTP Basic credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.params.username = Some(username.into());
        self.params.password = Some(password.into());
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.params.timeout = Some(timeout);
        self
    }

    /// Validates and builds the configuration.
    ///
    /// ## Errors
    ///
    /// See [`Configuration::new`].
    pub fn build(self) -> Result<Configuration, ConfigError> {
        Configuration::new(self.params)
    }
}
