//! REST API request handlers

pub mod health;
pub mod resources;

pub use health::{health_check, health_check_detailed, liveness_check, readiness_check};
pub use resources::{
    create_resource, delete_resource, get_resource, list_resources, update_resource,
};
