//! # Gantry Web Utilities
//!
//! Reusable web middleware and utilities for building HTTP APIs with Axum.
//! This crate provides the common plumbing a REST API needs: error
//! conversion, bearer-token authentication, CORS, request IDs and query
//! parameter extraction.
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{Router, routing::get};
//! use gantry_web::{
//!     middleware::{cors_layer, request_id_middleware},
//!     extractors::QueryParams,
//! };
//!
//! async fn list_items(_query: QueryParams) -> &'static str {
//!     "items"
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let app: Router = Router::new()
//!     .route("/items", get(list_items))
//!     .layer(axum::middleware::from_fn(request_id_middleware))
//!     .layer(cors_layer());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod utils;

// Re-export commonly used types and functions
pub use errors::{ValidationError, WebError, WebResult};
pub use extractors::{extract_resource_filters, ListQuery, PaginationQuery, QueryParams, SortQuery};
pub use middleware::{
    auth_middleware, cors_layer, error_handler_middleware, handle_not_found, request_id_middleware,
    AuthConfig, AuthContext, BearerAuthenticator, RequestId,
};
pub use utils::{ApiResponse, ResponseBuilder};
