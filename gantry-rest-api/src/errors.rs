//! REST API specific error types and conversions

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gantry_api_types::errors::ApiError;
use gantry_interfaces::DatabaseError;
use gantry_web::WebError;
use serde_json::json;
use thiserror::Error;

/// REST API specific error type
#[derive(Error, Debug)]
pub enum RestError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error")]
    Database(#[from] DatabaseError),

    #[error("Web error")]
    Web(#[from] WebError),

    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        // Reduce to the unified error, then to the HTTP envelope
        let unified_error = self.to_unified_error();
        let status = StatusCode::from_u16(unified_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = json!({
            "error": {
                "code": unified_error.code,
                "message": unified_error.message,
            }
        });
        if let Some(details) = unified_error.details {
            body["error"]["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

impl RestError {
    /// Convert to the unified API error
    pub fn to_unified_error(&self) -> ApiError {
        match self {
            RestError::NotFound(msg) => ApiError::not_found("Resource", msg.clone()),
            RestError::BadRequest(msg) => ApiError::bad_request(msg.clone()),
            RestError::Conflict(msg) => ApiError::conflict(msg.clone()),
            RestError::ServiceUnavailable(msg) => ApiError::service_unavailable(Some(msg.as_str())),
            RestError::Validation { message } => ApiError::validation_error("input", message.clone()),
            RestError::Database(DatabaseError::NotFound { entity, id }) => {
                ApiError::not_found(entity, format!("{} with ID '{}' not found", entity, id))
            }
            RestError::Database(db_err) => {
                // Database internals never reach the wire
                tracing::error!("database error: {}", db_err);
                ApiError::internal_error("An unexpected error occurred")
            }
            RestError::Web(web_err) => {
                let message = match web_err {
                    WebError::Internal { message } => {
                        tracing::error!("internal error: {}", message);
                        "An unexpected error occurred".to_string()
                    }
                    _ => web_err.to_string(),
                };
                ApiError::new(web_err.error_code(), message)
            }
            RestError::InternalError(msg) => {
                tracing::error!("internal error: {}", msg);
                ApiError::internal_error("An unexpected error occurred")
            }
        }
    }

    // Common error constructors
    pub fn not_found(resource: &str, id: &str) -> Self {
        RestError::NotFound(format!("{} with ID '{}' not found", resource, id))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest(message.into())
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        RestError::InternalError(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        RestError::Conflict(message.into())
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        RestError::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = RestError::not_found("Resource", "abc");
        let unified = err.to_unified_error();
        assert_eq!(unified.code, "NOT_FOUND");
        assert_eq!(unified.http_status_code(), 404);
    }

    #[test]
    fn test_database_not_found_maps_to_404() {
        let err = RestError::Database(DatabaseError::not_found("resource", "abc"));
        assert_eq!(err.to_unified_error().http_status_code(), 404);
    }

    #[test]
    fn test_other_database_errors_are_generic() {
        let err = RestError::Database(DatabaseError::Connection {
            message: "postgres://secret@host".to_string(),
        });
        let unified = err.to_unified_error();
        assert_eq!(unified.code, "INTERNAL_ERROR");
        assert_eq!(unified.message, "An unexpected error occurred");
    }
}
