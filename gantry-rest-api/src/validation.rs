//! Request input validation
//!
//! Field constraints live here so create and update handlers share one set
//! of rules: names are 1..=100 characters, descriptions at most 500, and
//! resource identifiers must be UUIDs.

use uuid::Uuid;

use crate::errors::RestError;

/// Maximum length of a resource name
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a resource description
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validate a resource name
pub fn validate_resource_name(name: &str) -> Result<(), RestError> {
    if name.is_empty() {
        return Err(RestError::validation_error("name must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(RestError::validation_error(format!(
            "name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(RestError::validation_error(
            "name must not contain control characters",
        ));
    }
    Ok(())
}

/// Validate a resource description
pub fn validate_description(description: &str) -> Result<(), RestError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(RestError::validation_error(format!(
            "description must be at most {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    Ok(())
}

/// Parse a path identifier into a UUID
pub fn parse_resource_id(raw: &str) -> Result<Uuid, RestError> {
    Uuid::parse_str(raw)
        .map_err(|_| RestError::bad_request(format!("Invalid resource ID '{}': expected a UUID", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        assert!(validate_resource_name("ok").is_ok());
        assert!(validate_resource_name(&"x".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_resource_name("").is_err());
        assert!(validate_resource_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
        assert!(validate_resource_name("line\nbreak").is_err());
    }

    #[test]
    fn test_description_bounds() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LENGTH)).is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_id_parsing() {
        assert!(parse_resource_id("0b5f9a84-3d8f-4a71-bb3f-9a30c4d0a8e6").is_ok());
        assert!(matches!(
            parse_resource_id("not-a-uuid"),
            Err(RestError::BadRequest(_))
        ));
    }
}
