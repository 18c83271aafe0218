//! TargetGeneration resource group.

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::{TargetGenerationJob, TargetGenerationRequest};
use crate::response::JsonFormat;

/// Starts and inspects target generation jobs.
#[derive(Debug, Clone, Copy)]
pub struct TargetGenerationApi<'c> {
    client: &'c ApiClient,
}

impl<'c> TargetGenerationApi<'c> {
    /// Creates the facade.
    pub fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `POST /target-generation`
    pub fn create_endpoint() -> Endpoint<JsonFormat<TargetGenerationJob>> {
        Endpoint::builder()
            .id("targetGenerationPost")
            .method(RestMethod::Post)
            .path("/target-generation")
            .build()
    }

    /// `GET /target-generation/{jobId}`
    pub fn get_endpoint() -> Endpoint<JsonFormat<TargetGenerationJob>> {
        Endpoint::builder()
            .id("targetGenerationGet")
            .method(RestMethod::Get)
            .path("/target-generation/{jobId}")
            .build()
    }

    /// Starts a job. The returned job is usually still pending.
    pub async fn target_generation_post(
        &self,
        body: &TargetGenerationRequest,
    ) -> Result<TargetGenerationJob, ApiError> {
        let request = Self::create_endpoint().request().json_body(body)?;
        self.client.send(request).await
    }

    /// Fetches the current state of a job.
    pub async fn target_generation_get(
        &self,
        job_id: &str,
    ) -> Result<TargetGenerationJob, ApiError> {
        let request = Self::get_endpoint().request().path_param("jobId", job_id);
        self.client.send(request).await
    }
}
