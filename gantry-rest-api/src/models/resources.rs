//! Resource request and response models

use serde::{Deserialize, Serialize};

/// Request to create a new resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceRequest {
    /// Display name for the resource (1-100 characters)
    pub name: String,

    /// Optional description (up to 500 characters)
    pub description: Option<String>,

    /// Free-form metadata document
    pub metadata: Option<serde_json::Value>,
}

/// Request to update an existing resource
///
/// All fields are optional; absent fields keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceRequest {
    /// Updated display name
    pub name: Option<String>,

    /// Updated description
    pub description: Option<String>,

    /// Updated metadata document
    pub metadata: Option<serde_json::Value>,
}
