//! Core interfaces for the Gantry modular architecture
//!
//! The traits in this crate are the seams between the HTTP layer and
//! whatever eventually backs it. Handlers depend on these contracts only, so
//! a real database implementation can replace the stubs without touching the
//! web layer.

pub mod database;

pub use database::{
    CrudRepository, DatabaseError, FilteredRepository, Repository, RepositoryFactory,
    ResourceFilters, ResourceRepository,
};
