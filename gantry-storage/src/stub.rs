//! Stub repository implementations
//!
//! These repositories implement the full data-access contract with no store
//! behind them: reads come back empty, lookups miss, and writes are accepted
//! but never persisted. Each method marks the spot where a real backend
//! plugs in.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use gantry_api_types::{
    pagination::ListInput, ApiId, ListResponse, PaginationInput, UnifiedResource,
};
use gantry_interfaces::{
    CrudRepository, DatabaseError, FilteredRepository, Repository, RepositoryFactory,
    ResourceFilters, ResourceRepository,
};

/// Resource repository with no backing store
#[derive(Debug, Default, Clone)]
pub struct StubResourceRepository;

impl StubResourceRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Repository for StubResourceRepository {
    async fn health_check(&self) -> Result<(), DatabaseError> {
        // Nothing to probe until a store exists
        Ok(())
    }
}

#[async_trait]
impl CrudRepository<UnifiedResource> for StubResourceRepository {
    async fn create(&self, entity: UnifiedResource) -> Result<UnifiedResource, DatabaseError> {
        // TODO: insert into the configured store and return the stored row
        debug!(resource = %entity.id, "create: accepting resource without persisting");
        Ok(entity)
    }

    async fn find_by_id(&self, id: &ApiId) -> Result<Option<UnifiedResource>, DatabaseError> {
        // TODO: select by id once a store exists
        debug!(%id, "find_by_id: no backing store, reporting miss");
        Ok(None)
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<UnifiedResource>, DatabaseError> {
        // TODO: select by uuid once a store exists
        debug!(%uuid, "find_by_uuid: no backing store, reporting miss");
        Ok(None)
    }

    async fn update(&self, entity: UnifiedResource) -> Result<UnifiedResource, DatabaseError> {
        // TODO: update the stored row and return it
        Err(DatabaseError::not_found("resource", entity.id.as_str()))
    }

    async fn delete(&self, id: &ApiId) -> Result<(), DatabaseError> {
        // TODO: delete the stored row
        Err(DatabaseError::not_found("resource", id.as_str()))
    }

    async fn count(&self) -> Result<u64, DatabaseError> {
        Ok(0)
    }
}

#[async_trait]
impl FilteredRepository<UnifiedResource, ResourceFilters> for StubResourceRepository {
    async fn find_with_filters(
        &self,
        _filters: ResourceFilters,
        pagination: PaginationInput,
    ) -> Result<ListResponse<UnifiedResource>, DatabaseError> {
        // TODO: translate filters into a query against the configured store
        Ok(ListResponse::empty(&pagination))
    }

    async fn find_with_list_input(
        &self,
        filters: ResourceFilters,
        list_input: ListInput,
    ) -> Result<ListResponse<UnifiedResource>, DatabaseError> {
        let pagination = list_input.pagination.unwrap_or_default();
        self.find_with_filters(filters, pagination).await
    }

    async fn count_with_filters(&self, _filters: ResourceFilters) -> Result<u64, DatabaseError> {
        Ok(0)
    }
}

#[async_trait]
impl ResourceRepository for StubResourceRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<UnifiedResource>, DatabaseError> {
        // TODO: select by name once a store exists
        debug!(name, "find_by_name: no backing store, reporting miss");
        Ok(None)
    }
}

/// Repository factory exposing the stub repositories
#[derive(Debug, Default)]
pub struct StubRepositoryFactory {
    resources: StubResourceRepository,
}

impl StubRepositoryFactory {
    pub fn new() -> Self {
        Self {
            resources: StubResourceRepository::new(),
        }
    }
}

#[async_trait]
impl RepositoryFactory for StubRepositoryFactory {
    fn resource_repository(&self) -> &dyn ResourceRepository {
        &self.resources
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.resources.health_check().await
    }
}
