//! Classified API call failures.

use strum::{Display, EnumString};
use thiserror::Error;

use super::ConfigError;

/// The three ways an API call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ErrorKind {
    /// A response arrived with a non-2xx status.
    Server,
    /// No response was received.
    Network,
    /// A local fault (URL building, serialization, decoding).
    Other,
}

/// Error returned by every facade and transport call.
///
/// ## Examples
///
/// ```rust,ignore
/// use yabadu_lib::{ApiError, ErrorKind};
///
/// fn describe(err: &ApiError) -> String {
///     match err {
///         ApiError::Server { status, .. } => format!("server said {status}"),
///         ApiError::Network { message } => format!("unreachable: {message}"),
///         ApiError::Other { message } => format!("local failure: {message}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("Server error (status {status}): {body}")]
    Server {
        /// HTTP status code from the response.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The request never completed (connection refused, DNS, timeout, broken body stream).
    #[error("Network error: {message}")]
    Network {
        /// Message from the underlying transport.
        message: String,
    },

    /// Any other local failure.
    #[error("Error: {message}")]
    Other {
        /// Description of the failure.
        message: String,
    },
}

impl ApiError {
    /// Creates a network error from any displayable transport failure.
    pub fn network(message: impl ToString) -> Self {
        let mut message = message.to_string();
        if message.is_empty() {
            message = "request failed without a response".to_string();
        }
        Self::Network { message }
    }

    /// Creates an error for a local failure.
    pub fn other(message: impl ToString) -> Self {
        Self::Other {
            message: message.to_string(),
        }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Server { .. } => ErrorKind::Server,
            Self::Network { .. } => ErrorKind::Network,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Returns the HTTP status code if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body of a server error as JSON.
    ///
    /// Bodies that are not valid JSON are returned as a JSON string, and an
    /// empty body as `null`.
    pub fn data(&self) -> Option<serde_json::Value> {
        let Self::Server { body, .. } = self else {
            return None;
        };
        if body.trim().is_empty() {
            return Some(serde_json::Value::Null);
        }
        Some(
            serde_json::from_str(body)
                .unwrap_or_else(|_| serde_json::Value::String(body.clone())),
        )
    }

    /// Returns a human-readable message for this error.
    pub fn message(&self) -> String {
        match self {
            Self::Server { status, body } if body.is_empty() => format!("HTTP {status}"),
            Self::Server { status, body } => format!("HTTP {status}: {body}"),
            Self::Network { message } | Self::Other { message } => message.clone(),
        }
    }

    /// Returns `true` if repeating the same call could succeed.
    ///
    /// Network failures, 429 and 5xx responses qualify. The client itself
    /// never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Server { status, .. } => *status >= 500 || *status == 429,
            Self::Other { .. } => false,
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self::other(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::other(format!("JSON error: {err}"))
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::other(format!("invalid URL: {err}"))
    }
}
