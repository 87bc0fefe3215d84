//! Request and response models for the REST API

pub mod common;
pub mod resources;

pub use common::{HealthCheckResult, HealthResponse, HealthStatus};
pub use resources::{CreateResourceRequest, UpdateResourceRequest};
