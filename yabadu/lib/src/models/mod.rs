//! Request and response bodies exchanged with the Yabadu API.
//!
//! Unknown fields in responses are ignored, so additions on the server side
//! do not break decoding.

mod applications;
mod authentication;
mod health;
mod system;
mod target_generation;

pub use applications::{Application, ApplicationList};
pub use authentication::{LoginRequest, RefreshRequest, TokenResponse};
pub use health::HealthStatus;
pub use system::{GendersResponse, UnitsResponse};
pub use target_generation::{TargetGenerationJob, TargetGenerationRequest, TargetGenerationStatus};
