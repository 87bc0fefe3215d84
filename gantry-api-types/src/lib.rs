//! Unified API types for the Gantry REST API
//!
//! This crate provides the type definitions shared by the web layer, the
//! repository interfaces and the storage backends: identifiers, pagination,
//! error envelopes and the resource domain type.

pub mod domain;
pub mod errors;
pub mod ids;
pub mod pagination;

// Re-export main types for convenience
pub use domain::UnifiedResource;
pub use errors::ApiError;
pub use ids::ApiId;
pub use pagination::{ListResponse, PaginationInput, PaginationMeta};
