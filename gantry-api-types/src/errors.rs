//! Unified error envelope for API responses
//!
//! Every error leaving the API is reduced to a code, a human-readable message
//! and optional structured details. Codes map statically to HTTP status
//! codes; anything unrecognized is treated as an internal error so that
//! internals never leak through an unexpected path.

use serde::{Deserialize, Serialize};

/// Unified API error representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable error code (e.g. `NOT_FOUND`)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Optional structured details (validation errors, field names)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new("FORBIDDEN", message)
    }

    pub fn not_found(entity: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::new("NOT_FOUND", format!("{} not found", entity))
        } else {
            Self::new("NOT_FOUND", message)
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn validation_error(field: &str, message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message.into())
            .with_details(serde_json::json!({ "field": field }))
    }

    pub fn service_unavailable(message: Option<&str>) -> Self {
        Self::new("SERVICE_UNAVAILABLE", message.unwrap_or("Service unavailable"))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    /// HTTP status code for this error's code; unknown codes map to 500
    pub fn http_status_code(&self) -> u16 {
        match self.code.as_str() {
            "BAD_REQUEST" | "VALIDATION_ERROR" => 400,
            "UNAUTHORIZED" => 401,
            "FORBIDDEN" => 403,
            "NOT_FOUND" => 404,
            "CONFLICT" => 409,
            "SERVICE_UNAVAILABLE" => 503,
            _ => 500,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
