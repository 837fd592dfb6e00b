use async_trait::async_trait;
use models::{EntityId, EntityKind};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },
    /// Failure inside a non-memory backend.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Identity-keyed container for one entity category.
///
/// Values go in and come out by value: implementations hand back clones, so
/// mutating a returned value never touches the stored copy until it is
/// written back with [`Repository::update`] or changed via [`Repository::modify`].
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    /// Identity space served by this repository.
    fn kind(&self) -> EntityKind;

    /// Store `value` under the next sequence id and return that id.
    async fn add(&self, value: T) -> EntityId;

    /// Assign the next id and build the value from it in one step, so the
    /// stored value can embed its own id without racing other writers.
    async fn add_with(&self, build: Box<dyn FnOnce(EntityId) -> T + Send>) -> T;

    async fn update(&self, id: EntityId, value: T) -> Result<(), StoreError>;

    /// Read-modify-write of a single entry under the store lock. Returns the new value.
    async fn modify(&self, id: EntityId, apply: Box<dyn for<'a> FnOnce(&'a mut T) + Send>) -> Result<T, StoreError>;

    async fn get(&self, id: EntityId) -> Result<T, StoreError>;

    async fn delete(&self, id: EntityId) -> Result<(), StoreError>;

    async fn exists(&self, id: EntityId) -> bool;

    /// Id the next `add` would assign. Nothing is reserved.
    async fn next_id(&self) -> EntityId;

    /// Snapshot of every stored value, in no particular order.
    async fn values(&self) -> Vec<T>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool { self.len().await == 0 }
}
