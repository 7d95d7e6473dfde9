//! Repository Layer - Core Traits
//!
//! Abstract interface for entity-shaped collections. Map- and set-shaped
//! preference collections expose their own narrower APIs instead.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations over an entity collection
///
/// All operations are async to match the command layer.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a new entity; inserting an existing id returns the stored
    /// entity unchanged
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID; deleting an absent id is a no-op
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
