//! Target generation jobs.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle of a target generation job as reported by the server.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TargetGenerationStatus {
    /// Accepted, not started.
    Pending,
    /// Being computed.
    Running,
    /// Finished; targets are available.
    Completed,
    /// Gave up.
    Failed,
}

impl TargetGenerationStatus {
    /// Returns `true` once the job will not change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Input for a new target generation job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetGenerationRequest {
    /// Application the targets are generated for.
    pub application_id: String,
    /// Unit the targets are expressed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Free-form parameters forwarded to the generator.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub parameters: serde_json::Value,
}

/// A target generation job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetGenerationJob {
    /// Job identifier.
    pub id: String,
    /// Current status.
    pub status: TargetGenerationStatus,
    /// Generated targets, present once completed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<serde_json::Value>,
    /// Failure reason, present when failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
