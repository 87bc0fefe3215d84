//! Common types for REST API requests and responses

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
pub use gantry_web::ApiResponse;

/// Query parameter types
pub use gantry_web::{ListQuery, PaginationQuery, QueryParams, SortQuery};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<std::collections::HashMap<String, HealthCheckResult>>,
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    pub message: Option<String>,
    pub duration_ms: Option<u64>,
}

/// Health check status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Unhealthy,
    Degraded,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").parse().ok(),
            checks: None,
        }
    }

    pub fn with_checks(mut self, checks: std::collections::HashMap<String, HealthCheckResult>) -> Self {
        let has_unhealthy = checks
            .values()
            .any(|check| matches!(check.status, HealthStatus::Unhealthy));
        let has_degraded = checks
            .values()
            .any(|check| matches!(check.status, HealthStatus::Degraded));

        self.checks = Some(checks);

        self.status = if has_unhealthy {
            "unhealthy"
        } else if has_degraded {
            "degraded"
        } else {
            "ok"
        }
        .to_string();

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_status_is_ok() {
        let response = HealthResponse::ok();
        assert_eq!(response.status, "ok");
        assert!(response.checks.is_none());
    }

    #[test]
    fn test_unhealthy_check_degrades_overall_status() {
        let mut checks = HashMap::new();
        checks.insert(
            "database".to_string(),
            HealthCheckResult {
                status: HealthStatus::Unhealthy,
                message: Some("connection refused".to_string()),
                duration_ms: Some(12),
            },
        );

        let response = HealthResponse::ok().with_checks(checks);
        assert_eq!(response.status, "unhealthy");
    }
}
