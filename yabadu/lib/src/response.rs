//! Response decoding strategies.
//!
//! A [`ResponseFormat`] turns the body of a successful response into the
//! value a facade method returns.

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// How a successful response body is decoded.
pub trait ResponseFormat: Send + Sync {
    /// The decoded value.
    type Output: Send;

    /// Decodes a response body.
    fn parse(body: bytes::Bytes) -> impl Future<Output = Result<Self::Output, ApiError>> + Send;

    /// Value for the `Accept` header.
    fn content_type() -> &'static str;
}

/// JSON body decoded into `T`.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for JsonFormat<T> {
    type Output = T;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ApiError> {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::other(format!("failed to decode response body: {e}")))
    }

    fn content_type() -> &'static str {
        "application/json"
    }
}

/// UTF-8 text body.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormat;

impl ResponseFormat for PlainTextFormat {
    type Output = String;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ApiError> {
        String::from_utf8(body.to_vec())
            .map_err(|e| ApiError::other(format!("response body is not valid UTF-8: {e}")))
    }

    fn content_type() -> &'static str {
        "text/plain"
    }
}

/// Body is ignored; used by endpoints answering `204 No Content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFormat;

impl ResponseFormat for EmptyFormat {
    type Output = ();

    async fn parse(_body: bytes::Bytes) -> Result<Self::Output, ApiError> {
        Ok(())
    }

    fn content_type() -> &'static str {
        "*/*"
    }
}
