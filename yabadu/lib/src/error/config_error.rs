//! Configuration validation errors.

use thiserror::Error;

/// Errors raised while building a [`Configuration`](crate::Configuration).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base path is not an http or https URL.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The scheme that was supplied.
        scheme: String,
    },

    /// The base path carries a query string or fragment.
    #[error("Base path must not contain a {component}")]
    BasePathComponent {
        /// `"query"` or `"fragment"`.
        component: &'static str,
    },

    /// More than one credential scheme was supplied.
    #[error("Conflicting credentials: {}", schemes.join(", "))]
    ConflictingCredentials {
        /// The schemes that were set together.
        schemes: Vec<&'static str>,
    },

    /// Only half of a username/password pair was supplied.
    #[error("Basic authentication requires both username and password")]
    IncompleteBasicAuth,

    /// A default header name or value is invalid.
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An environment variable held an unparseable value.
    #[error("Invalid value for {var}: {value}")]
    InvalidEnvValue {
        /// The variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
