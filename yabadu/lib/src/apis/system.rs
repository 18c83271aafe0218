//! System resource group.

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::{GendersResponse, UnitsResponse};
use crate::response::JsonFormat;

/// Reference data: units and genders.
#[derive(Debug, Clone, Copy)]
pub struct SystemApi<'c> {
    client: &'c ApiClient,
}

impl<'c> SystemApi<'c> {
    /// Creates the facade.
    pub fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `GET /system/units`
    pub fn units_endpoint() -> Endpoint<JsonFormat<UnitsResponse>> {
        Endpoint::builder()
            .id("systemUnitsGet")
            .method(RestMethod::Get)
            .path("/system/units")
            .description("List measurement units")
            .build()
    }

    /// `GET /system/genders`
    pub fn genders_endpoint() -> Endpoint<JsonFormat<GendersResponse>> {
        Endpoint::builder()
            .id("systemGendersGet")
            .method(RestMethod::Get)
            .path("/system/genders")
            .description("List gender options")
            .build()
    }

    /// Lists the measurement units supported by the platform.
    pub async fn system_units_get(&self) -> Result<UnitsResponse, ApiError> {
        self.client.send(Self::units_endpoint().request()).await
    }

    /// Lists the gender options supported by the platform.
    pub async fn system_genders_get(&self) -> Result<GendersResponse, ApiError> {
        self.client.send(Self::genders_endpoint().request()).await
    }
}
