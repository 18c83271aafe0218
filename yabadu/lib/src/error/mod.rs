//! Error types for the Yabadu client.
//!
//! - [`ApiError`] - what every facade call fails with, classified as
//!   server, network or other
//! - [`ConfigError`] - rejected [`Configuration`](crate::Configuration) input

mod api_error;
mod config_error;

pub use api_error::{ApiError, ErrorKind};
pub use config_error::ConfigError;
