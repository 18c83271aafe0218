//! System reference data.

use serde::{Deserialize, Serialize};

/// Measurement units supported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitsResponse {
    /// Unit identifiers, e.g. `"kg"`.
    pub units: Vec<String>,
}

/// Gender options supported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GendersResponse {
    /// Gender identifiers.
    pub genders: Vec<String>,
}
