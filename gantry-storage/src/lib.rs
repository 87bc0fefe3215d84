//! Storage layer for Gantry
//!
//! Currently this crate provides only the stub backend: repositories that
//! satisfy the `gantry-interfaces` contracts without any backing store. A
//! real implementation (SQLx, SeaORM, an HTTP service) replaces the stubs by
//! implementing the same traits and handing its own factory to the server.

pub mod stub;

pub use stub::{StubRepositoryFactory, StubResourceRepository};
