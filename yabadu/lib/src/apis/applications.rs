//! Applications resource group.

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::{Application, ApplicationList};
use crate::response::JsonFormat;

/// Private label applications.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationsApi<'c> {
    client: &'c ApiClient,
}

impl<'c> ApplicationsApi<'c> {
    /// Creates the facade.
    pub fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `GET /private-label/applications`
    pub fn list_endpoint() -> Endpoint<JsonFormat<ApplicationList>> {
        Endpoint::builder()
            .id("privateLabelApplicationsGet")
            .method(RestMethod::Get)
            .path("/private-label/applications")
            .build()
    }

    /// `GET /private-label/applications/{applicationId}`
    pub fn get_endpoint() -> Endpoint<JsonFormat<Application>> {
        Endpoint::builder()
            .id("privateLabelApplicationGet")
            .method(RestMethod::Get)
            .path("/private-label/applications/{applicationId}")
            .build()
    }

    /// Lists the private label applications visible to the caller.
    pub async fn private_label_applications_get(&self) -> Result<ApplicationList, ApiError> {
        self.client.send(Self::list_endpoint().request()).await
    }

    /// Fetches one private label application.
    pub async fn private_label_application_get(
        &self,
        application_id: &str,
    ) -> Result<Application, ApiError> {
        let request = Self::get_endpoint()
            .request()
            .path_param("applicationId", application_id);
        self.client.send(request).await
    }
}
