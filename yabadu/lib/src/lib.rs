//! Typed client for the Yabadu platform API.
//!
//! The crate is split into three layers:
//!
//! - [`Configuration`] - immutable base URL, credentials, headers and timeout
//! - [`ApiClient`] - the transport: one HTTP request per call, credential
//!   injection, and failures classified as [`ApiError`]
//! - facades in [`apis`] - one struct per resource group with one method per
//!   endpoint
//!
//! ## Example
//!
//! ```rust,no_run
//! use yabadu_lib::{ApiClient, ApiError, Configuration};
//!
//! # async fn example() -> Result<(), ApiError> {
//! let config = Configuration::builder("https://api.yabadu.com")
//!     .access_token("your-access-token")
//!     .build()?;
//! let client = ApiClient::new(config)?;
//!
//! match client.system().system_units_get().await {
//!     Ok(units) => println!("Available units: {:?}", units.units),
//!     Err(ApiError::Server { status, .. }) => eprintln!("API error status {status}"),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! No call is retried. Each request is bounded by the configured timeout
//! (30 seconds unless set), and an elapsed timeout is a network error.

pub mod apis;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod models;
pub mod report;
pub mod request;
pub mod response;

pub use apis::{ApplicationsApi, AuthenticationApi, DefaultApi, SystemApi, TargetGenerationApi};
pub use client::ApiClient;
pub use config::{ApiKeyLocation, Configuration, ConfigurationBuilder, ConfigurationParameters, Credentials};
pub use endpoint::{Endpoint, EndpointBuilder};
pub use error::{ApiError, ConfigError, ErrorKind};
pub use method::RestMethod;
pub use request::RequestDescriptor;
pub use response::ResponseFormat;
