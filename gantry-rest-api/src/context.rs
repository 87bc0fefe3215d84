//! Context types for dependency injection in REST API handlers
//!
//! Context structs group the dependencies each endpoint group needs, so
//! handlers can be tested against mock or stub implementations.

use gantry_interfaces::RepositoryFactory;
use std::sync::Arc;

/// Context for resource endpoints
#[derive(Clone)]
pub struct ResourcesContext {
    /// Repository factory for data access
    pub repositories: Arc<dyn RepositoryFactory>,
}

impl ResourcesContext {
    pub fn new(repositories: Arc<dyn RepositoryFactory>) -> Self {
        Self { repositories }
    }
}
