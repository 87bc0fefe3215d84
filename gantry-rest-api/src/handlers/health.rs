//! Health check endpoints

use axum::{extract::State, response::IntoResponse, Json};
use std::collections::HashMap;
use tracing::info;

use crate::{
    context::ResourcesContext,
    errors::{RestError, RestResult},
    models::common::{HealthCheckResult, HealthResponse, HealthStatus},
};

/// Health check endpoint
///
/// Returns the overall status of the API without touching dependencies.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// Detailed health check with dependency checks
pub async fn health_check_detailed(
    State(ctx): State<ResourcesContext>,
) -> RestResult<impl IntoResponse> {
    info!("Detailed health check requested");

    let mut checks = HashMap::new();

    let repo_start = std::time::Instant::now();
    let repo_health = match ctx.repositories.health_check().await {
        Ok(_) => HealthCheckResult {
            status: HealthStatus::Ok,
            message: Some("Storage healthy".to_string()),
            duration_ms: Some(repo_start.elapsed().as_millis() as u64),
        },
        Err(e) => HealthCheckResult {
            status: HealthStatus::Unhealthy,
            message: Some(format!("Storage failed: {}", e)),
            duration_ms: Some(repo_start.elapsed().as_millis() as u64),
        },
    };
    checks.insert("storage".to_string(), repo_health);

    Ok(Json(HealthResponse::ok().with_checks(checks)))
}

/// Readiness probe endpoint
///
/// Returns 200 when the service can handle requests, 503 otherwise.
pub async fn readiness_check(State(ctx): State<ResourcesContext>) -> RestResult<impl IntoResponse> {
    match ctx.repositories.health_check().await {
        Ok(_) => Ok(Json(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now(),
        }))),
        Err(e) => {
            tracing::warn!("readiness check failed: {}", e);
            Err(RestError::ServiceUnavailable("Service not ready".to_string()))
        }
    }
}

/// Liveness probe endpoint
///
/// Returns 200 as long as the request path is responsive.
pub async fn liveness_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "timestamp": chrono::Utc::now(),
    }))
}
