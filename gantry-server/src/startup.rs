//! Server startup: configuration mapping and router construction
//!
//! Kept separate from `main` so the assembled router can be exercised in
//! tests without binding a socket.

use std::sync::Arc;

use axum::Router;
use gantry_config::{GantryConfig, LoggingConfig};
use gantry_interfaces::RepositoryFactory;
use gantry_rest_api::{create_rest_app, AppConfig, AppContext};
use gantry_web::middleware::{AuthConfig, CorsConfig};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from the logging configuration
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter_str()));

    match config.format {
        gantry_config::domains::logging::LogFormat::Json => {
            tracing_subscriber::fmt().with_env_filter(filter).json().init();
        }
        gantry_config::domains::logging::LogFormat::Text => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}

/// Map the loaded configuration onto the REST application config
fn app_config(config: &GantryConfig) -> AppConfig {
    AppConfig {
        api_prefix: config.server.api_prefix.clone(),
        auth: AuthConfig {
            require_auth: config.server.auth.require_auth,
        },
        cors: CorsConfig {
            allowed_origins: config.server.cors.allowed_origins.clone(),
            allow_credentials: config.server.cors.allow_credentials,
            ..CorsConfig::default()
        },
        ..AppConfig::default()
    }
}

/// Build the REST application router from configuration and a storage backend
pub fn build_app(config: &GantryConfig, repositories: Arc<dyn RepositoryFactory>) -> Router {
    let context = AppContext::new(repositories);
    create_rest_app(context, app_config(config))
}
