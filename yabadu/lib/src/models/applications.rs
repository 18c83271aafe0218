//! Private label applications.

use serde::{Deserialize, Serialize};

/// A private label application registered on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Application identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional bundle or package identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    /// Whether the application is live.
    #[serde(default)]
    pub active: bool,
}

/// Applications returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationList {
    /// The applications.
    #[serde(default)]
    pub applications: Vec<Application>,
}
