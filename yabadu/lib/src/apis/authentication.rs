//! Authentication resource group.
//!
//! These endpoints only forward what the caller supplies. Storing or
//! refreshing tokens is left to the caller, who builds a new
//! [`Configuration`](crate::Configuration) with the issued access token.

use tracing::debug;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::{LoginRequest, RefreshRequest, TokenResponse};
use crate::response::{EmptyFormat, JsonFormat};

/// Login, token refresh and logout.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticationApi<'c> {
    client: &'c ApiClient,
}

impl<'c> AuthenticationApi<'c> {
    /// Creates the facade.
    pub fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`
    pub fn login_endpoint() -> Endpoint<JsonFormat<TokenResponse>> {
        Endpoint::builder()
            .id("authLoginPost")
            .method(RestMethod::Post)
            .path("/auth/login")
            .build()
    }

    /// `POST /auth/refresh`
    pub fn refresh_endpoint() -> Endpoint<JsonFormat<TokenResponse>> {
        Endpoint::builder()
            .id("authRefreshPost")
            .method(RestMethod::Post)
            .path("/auth/refresh")
            .build()
    }

    /// `POST /auth/logout`
    pub fn logout_endpoint() -> Endpoint<EmptyFormat> {
        Endpoint::builder()
            .id("authLogoutPost")
            .method(RestMethod::Post)
            .path("/auth/logout")
            .build()
    }

    /// Exchanges username and password for tokens.
    pub async fn auth_login_post(&self, body: &LoginRequest) -> Result<TokenResponse, ApiError> {
        debug!(username = %body.username, "logging in");
        let request = Self::login_endpoint().request().json_body(body)?;
        self.client.send(request).await
    }

    /// Exchanges a refresh token for a new access token.
    pub async fn auth_refresh_post(
        &self,
        body: &RefreshRequest,
    ) -> Result<TokenResponse, ApiError> {
        let request = Self::refresh_endpoint().request().json_body(body)?;
        self.client.send(request).await
    }

    /// Invalidates the session behind the configured credentials.
    pub async fn auth_logout_post(&self) -> Result<(), ApiError> {
        self.client.send(Self::logout_endpoint().request()).await
    }
}
