//! Operations without a resource group.

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::HealthStatus;
use crate::response::JsonFormat;

/// Untagged operations.
#[derive(Debug, Clone, Copy)]
pub struct DefaultApi<'c> {
    client: &'c ApiClient,
}

impl<'c> DefaultApi<'c> {
    /// Creates the facade.
    pub fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `GET /health`
    pub fn health_endpoint() -> Endpoint<JsonFormat<HealthStatus>> {
        Endpoint::builder()
            .id("healthGet")
            .method(RestMethod::Get)
            .path("/health")
            .build()
    }

    /// Reports service health.
    pub async fn health_get(&self) -> Result<HealthStatus, ApiError> {
        self.client.send(Self::health_endpoint().request()).await
    }
}
