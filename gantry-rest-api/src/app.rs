//! Main application configuration and router setup

use axum::{
    middleware as axum_middleware,
    routing::get,
    Extension, Router,
};
use gantry_interfaces::RepositoryFactory;
use gantry_web::middleware::{
    auth_middleware, cors_layer_with_config, error_handler_middleware, handle_not_found,
    request_id_middleware, AuthConfig, BearerAuthenticator, CorsConfig,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{context::ResourcesContext, handlers};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable CORS middleware
    pub enable_cors: bool,
    /// Enable request ID tracking
    pub enable_request_id: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
    /// API path prefix
    pub api_prefix: String,
    /// Authentication configuration for API routes
    pub auth: AuthConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            enable_request_id: true,
            enable_tracing: true,
            api_prefix: "/api/v1".to_string(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

/// Application context containing all dependencies
#[derive(Clone)]
pub struct AppContext {
    pub resources: ResourcesContext,
}

impl AppContext {
    pub fn new(repositories: Arc<dyn RepositoryFactory>) -> Self {
        Self {
            resources: ResourcesContext::new(repositories),
        }
    }
}

/// Create the complete REST API application
pub fn create_rest_app(context: AppContext, config: AppConfig) -> Router {
    let authenticator = Arc::new(BearerAuthenticator::new(config.auth.clone()));

    // API routes sit behind authentication; health endpoints stay open
    let api_router = create_api_router()
        .layer(axum_middleware::from_fn(auth_middleware))
        .layer(Extension(authenticator));

    let mut app = Router::new()
        // Health endpoints (no prefix)
        .route("/health", get(handlers::health_check))
        .route("/health/detailed", get(handlers::health_check_detailed))
        .route("/ready", get(handlers::readiness_check))
        .route("/live", get(handlers::liveness_check))
        // API routes with prefix
        .nest(&config.api_prefix, api_router)
        .fallback(handle_not_found)
        // Add application context
        .with_state(context.resources);

    // Add middleware layers (applied in reverse order)
    if config.enable_cors {
        app = app.layer(cors_layer_with_config(config.cors.clone()));
    }

    if config.enable_request_id {
        app = app.layer(axum_middleware::from_fn(request_id_middleware));
    }

    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    app = app.layer(axum_middleware::from_fn(error_handler_middleware));

    app
}

/// Create the resource API router
fn create_api_router() -> Router<ResourcesContext> {
    Router::new()
        .route(
            "/resources",
            get(handlers::list_resources).post(handlers::create_resource),
        )
        .route(
            "/resources/{id}",
            get(handlers::get_resource)
                .patch(handlers::update_resource)
                .delete(handlers::delete_resource),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use gantry_storage::StubRepositoryFactory;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint() {
        let context = AppContext::new(Arc::new(StubRepositoryFactory::new()));
        let app = create_rest_app(context, AppConfig::default());

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let context = AppContext::new(Arc::new(StubRepositoryFactory::new()));
        let app = create_rest_app(context, AppConfig::default());

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/nope")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
