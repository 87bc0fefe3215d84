//! Domain types exposed through the API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::ApiId;

/// The generic resource entity managed by the API
///
/// A resource is an identifier, a display name, an optional description and a
/// free-form metadata document, plus creation/update timestamps. Field
/// constraints (name length, description length) are enforced at the request
/// validation boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedResource {
    /// Unified identifier (stringified UUID)
    pub id: ApiId,
    /// Canonical UUID
    pub uuid: Uuid,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Free-form metadata document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl UnifiedResource {
    /// Fabricate a new resource with a fresh identifier and current timestamps
    ///
    /// The caller is responsible for persisting the result; construction alone
    /// does not store anything.
    pub fn new(name: String, description: Option<String>, metadata: Option<serde_json::Value>) -> Self {
        let uuid = Uuid::new_v4();
        let now = Utc::now();
        Self {
            id: ApiId::from_uuid(uuid),
            uuid,
            name,
            description,
            metadata,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resource_has_fresh_identity() {
        let a = UnifiedResource::new("alpha".to_string(), None, None);
        let b = UnifiedResource::new("alpha".to_string(), None, None);
        assert_ne!(a.uuid, b.uuid);
        assert_eq!(a.id.as_uuid(), Some(a.uuid));
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let resource = UnifiedResource::new("alpha".to_string(), Some("first".to_string()), None);
        let value = serde_json::to_value(&resource).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("metadata").is_none());
    }
}
