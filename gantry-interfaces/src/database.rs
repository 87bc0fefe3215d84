//! Database repository interfaces
//!
//! These traits define the data-access contract the REST layer is written
//! against. They enable dependency injection and testing through interface
//! segregation; both the stub storage layer and a future real backend
//! satisfy the same contracts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gantry_api_types::{
    pagination::ListInput, ApiId, ListResponse, PaginationInput, UnifiedResource,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common database error type
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Constraint violation: {message}")]
    Constraint { message: String },

    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Internal database error: {message}")]
    Internal { message: String },
}

impl DatabaseError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Base repository trait with health check capability
#[async_trait]
pub trait Repository: Send + Sync {
    /// Check if the repository is healthy and can serve requests
    async fn health_check(&self) -> Result<(), DatabaseError>;
}

/// Generic CRUD repository trait
#[async_trait]
pub trait CrudRepository<T>: Repository {
    /// Create a new entity
    async fn create(&self, entity: T) -> Result<T, DatabaseError>;

    /// Find entity by unified ID
    async fn find_by_id(&self, id: &ApiId) -> Result<Option<T>, DatabaseError>;

    /// Find entity by UUID
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<T>, DatabaseError>;

    /// Update an existing entity
    async fn update(&self, entity: T) -> Result<T, DatabaseError>;

    /// Delete entity by unified ID
    async fn delete(&self, id: &ApiId) -> Result<(), DatabaseError>;

    /// Get total count of entities
    async fn count(&self) -> Result<u64, DatabaseError>;
}

/// Repository trait for entities that support filtering and pagination
#[async_trait]
pub trait FilteredRepository<T, F>: CrudRepository<T> {
    /// Find entities with filters and pagination
    async fn find_with_filters(
        &self,
        filters: F,
        pagination: PaginationInput,
    ) -> Result<ListResponse<T>, DatabaseError>;

    /// Find entities with filters, pagination, and sorting
    async fn find_with_list_input(
        &self,
        filters: F,
        list_input: ListInput,
    ) -> Result<ListResponse<T>, DatabaseError>;

    /// Count entities matching filters
    async fn count_with_filters(&self, filters: F) -> Result<u64, DatabaseError>;
}

// =============================================================================
// Resource Repository
// =============================================================================

/// Filter criteria for resource queries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceFilters {
    /// Exact name match
    pub name: Option<String>,
    /// Substring name match; backs the `search` query parameter
    pub name_contains: Option<String>,
    /// UUID match
    pub uuid: Option<String>,

    // Date range filtering
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub updated_after: Option<DateTime<Utc>>,
    pub updated_before: Option<DateTime<Utc>>,
}

/// Resource repository interface
#[async_trait]
pub trait ResourceRepository: FilteredRepository<UnifiedResource, ResourceFilters> {
    /// Find resource by name
    async fn find_by_name(&self, name: &str) -> Result<Option<UnifiedResource>, DatabaseError>;
}

// =============================================================================
// Repository Factory
// =============================================================================

/// Factory trait for accessing repository instances
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    /// Get resource repository instance
    fn resource_repository(&self) -> &dyn ResourceRepository;

    /// Check health of all repositories
    async fn health_check(&self) -> Result<(), DatabaseError>;
}
