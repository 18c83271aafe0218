//! Typed facades, one per resource group.
//!
//! Each facade borrows an [`ApiClient`](crate::ApiClient) and exposes one
//! async method per endpoint. Creating a facade performs no I/O.

mod applications;
mod authentication;
mod default;
mod system;
mod target_generation;

pub use applications::ApplicationsApi;
pub use authentication::AuthenticationApi;
pub use default::DefaultApi;
pub use system::SystemApi;
pub use target_generation::TargetGenerationApi;
