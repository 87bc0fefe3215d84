//! # Gantry REST API
//!
//! REST API implementation for the Gantry resource service. This crate
//! provides HTTP endpoints for managing resources using dependency injection
//! and clean interface segregation.
//!
//! ## Architecture
//!
//! Handlers receive their dependencies through context structs that hold the
//! repository traits from `gantry-interfaces`. The shipped storage layer is a
//! stub, so the API is fully wired but reports an empty store until a real
//! backend is plugged in.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gantry_rest_api::{create_rest_app, AppConfig, AppContext};
//! use gantry_storage::StubRepositoryFactory;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = AppContext::new(Arc::new(StubRepositoryFactory::new()));
//! let app = create_rest_app(context, AppConfig::default());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use app::{create_rest_app, AppConfig, AppContext};
pub use context::ResourcesContext;
pub use errors::{RestError, RestResult};
pub use models::*;
