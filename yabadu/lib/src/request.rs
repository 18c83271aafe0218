//! Per-call request descriptors.

use std::fmt;
use std::marker::PhantomData;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

use crate::endpoint::placeholders;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::response::ResponseFormat;

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Method, path, query and body of one outbound request.
///
/// Built from an [`Endpoint`](crate::Endpoint), consumed by
/// [`ApiClient::send`](crate::ApiClient::send).
pub struct RequestDescriptor<F: ResponseFormat> {
    endpoint_id: String,
    method: RestMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<bytes::Bytes>,
    invalid: Vec<String>,
    _format: PhantomData<F>,
}

impl<F: ResponseFormat> RequestDescriptor<F> {
    pub(crate) fn new(endpoint_id: &str, method: RestMethod, path: &str) -> Self {
        Self {
            endpoint_id: endpoint_id.to_string(),
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
            invalid: Vec::new(),
            _format: PhantomData,
        }
    }

    /// Substitutes `{name}` in the path with the percent-encoded value.
    ///
    /// Empty, `.` and `..` values would collapse or climb the path once the
    /// URL is normalized. They are recorded as invalid instead and the
    /// placeholder is left in place; [`ApiClient::send`](crate::ApiClient::send)
    /// refuses such a request.
    pub fn path_param(mut self, name: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if matches!(value, "" | "." | "..") {
            self.invalid.push(name.to_string());
            return self;
        }
        let encoded = utf8_percent_encode(value, PATH_SEGMENT).to_string();
        self.path = self.path.replace(&format!("{{{name}}}"), &encoded);
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Appends a query parameter when a value is present.
    pub fn query_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Other`] if serialization fails.
    pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded = serde_json::to_vec(body)
            .map_err(|e| ApiError::other(format!("failed to serialize request body: {e}")))?;
        self.body = Some(bytes::Bytes::from(encoded));
        Ok(self)
    }

    /// The operation id of the endpoint this request targets.
    pub fn endpoint_id(&self) -> &str {
        &self.endpoint_id
    }

    /// HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Path with substituted parameters.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Serialized JSON body, if any.
    pub fn body(&self) -> Option<&bytes::Bytes> {
        self.body.as_ref()
    }

    /// Path parameters given a value that cannot name a single segment.
    pub fn invalid_params(&self) -> &[String] {
        &self.invalid
    }

    /// Placeholders still present in the path.
    pub fn unresolved_params(&self) -> Vec<&str> {
        placeholders(&self.path)
    }
}

impl<F: ResponseFormat> fmt::Debug for RequestDescriptor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("endpoint_id", &self.endpoint_id)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("body_len", &self.body.as_ref().map(bytes::Bytes::len))
            .field("invalid", &self.invalid)
            .finish()
    }
}
