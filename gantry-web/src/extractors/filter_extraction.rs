use std::collections::HashMap;

use chrono::{DateTime, Utc};
use gantry_interfaces::ResourceFilters;

fn parse_datetime(filters: &HashMap<String, String>, key: &str) -> Option<DateTime<Utc>> {
    filters
        .get(key)
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok().map(|dt| dt.with_timezone(&Utc)))
}

/// Extract typed resource filters from raw query parameters
///
/// `search` maps to a substring match on the resource name; date parameters
/// are RFC 3339 and silently ignored when unparsable.
pub fn extract_resource_filters(filters: &HashMap<String, String>) -> ResourceFilters {
    ResourceFilters {
        name: filters.get("name").cloned(),
        name_contains: filters.get("search").cloned(),
        uuid: filters.get("uuid").cloned(),

        created_after: parse_datetime(filters, "created_after"),
        created_before: parse_datetime(filters, "created_before"),
        updated_after: parse_datetime(filters, "updated_after"),
        updated_before: parse_datetime(filters, "updated_before"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_maps_to_name_contains() {
        let mut raw = HashMap::new();
        raw.insert("search".to_string(), "alpha".to_string());

        let filters = extract_resource_filters(&raw);
        assert_eq!(filters.name_contains.as_deref(), Some("alpha"));
        assert!(filters.name.is_none());
    }

    #[test]
    fn test_date_filters_parse_rfc3339() {
        let mut raw = HashMap::new();
        raw.insert(
            "created_after".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
        );
        raw.insert("updated_before".to_string(), "not-a-date".to_string());

        let filters = extract_resource_filters(&raw);
        assert!(filters.created_after.is_some());
        assert!(filters.updated_before.is_none());
    }
}
