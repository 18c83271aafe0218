//! HTTP transport.
//!
//! [`ApiClient`] executes [`RequestDescriptor`](crate::RequestDescriptor)s
//! against the configured base path, injects credentials, and classifies
//! failures into [`ApiError`](crate::ApiError).
//!
//! ## Examples
//!
//! ```rust,no_run
//! use yabadu_lib::{ApiClient, Configuration, Endpoint, RestMethod};
//! use yabadu_lib::response::JsonFormat;
//!
//! # async fn example() -> Result<(), yabadu_lib::ApiError> {
//! let config = Configuration::builder("https://api.yabadu.com")
//!     .access_token("secret")
//!     .build()?;
//! let client = ApiClient::new(config)?;
//!
//! let endpoint: Endpoint<JsonFormat<serde_json::Value>> = Endpoint::builder()
//!     .id("healthGet")
//!     .method(RestMethod::Get)
//!     .path("/health")
//!     .build();
//!
//! let health = client.send(endpoint.request()).await?;
//! # Ok(())
//! # }
//! ```

mod executor;

pub use executor::ApiClient;
