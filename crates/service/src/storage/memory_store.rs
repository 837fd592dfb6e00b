use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use models::{EntityId, EntityKind};
use tokio::sync::Mutex;

use super::repository::{Repository, StoreError};

struct Table<T> {
    rows: HashMap<EntityId, T>,
    next_id: EntityId,
}

/// Mutex-guarded in-memory repository.
///
/// Rows and the id sequence sit behind one lock, and every operation holds it
/// for its whole duration (including `values`). Ids start at 0 and are never
/// reused after a delete. Cloning the store shares the same table.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    kind: EntityKind,
    inner: Arc<Mutex<Table<T>>>,
}

impl<T> InMemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(kind: EntityKind) -> Self {
        Self { kind, inner: Arc::new(Mutex::new(Table { rows: HashMap::new(), next_id: 0 })) }
    }

    pub fn shared(kind: EntityKind) -> Arc<Self> { Arc::new(Self::new(kind)) }

    fn not_found(&self, id: EntityId) -> StoreError {
        StoreError::NotFound { kind: self.kind, id }
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn kind(&self) -> EntityKind { self.kind }

    async fn add(&self, value: T) -> EntityId {
        let mut table = self.inner.lock().await;
        let id = table.next_id;
        table.rows.insert(id, value);
        table.next_id += 1;
        id
    }

    async fn add_with(&self, build: Box<dyn FnOnce(EntityId) -> T + Send>) -> T {
        let mut table = self.inner.lock().await;
        let id = table.next_id;
        let value = build(id);
        table.rows.insert(id, value.clone());
        table.next_id += 1;
        value
    }

    async fn update(&self, id: EntityId, value: T) -> Result<(), StoreError> {
        let mut table = self.inner.lock().await;
        match table.rows.get_mut(&id) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(self.not_found(id)),
        }
    }

    async fn modify(&self, id: EntityId, apply: Box<dyn for<'a> FnOnce(&'a mut T) + Send>) -> Result<T, StoreError> {
        let mut table = self.inner.lock().await;
        let slot = table.rows.get_mut(&id).ok_or_else(|| self.not_found(id))?;
        apply(slot);
        Ok(slot.clone())
    }

    async fn get(&self, id: EntityId) -> Result<T, StoreError> {
        let table = self.inner.lock().await;
        table.rows.get(&id).cloned().ok_or_else(|| self.not_found(id))
    }

    async fn delete(&self, id: EntityId) -> Result<(), StoreError> {
        let mut table = self.inner.lock().await;
        table.rows.remove(&id).map(|_| ()).ok_or_else(|| self.not_found(id))
    }

    async fn exists(&self, id: EntityId) -> bool {
        self.inner.lock().await.rows.contains_key(&id)
    }

    async fn next_id(&self) -> EntityId {
        self.inner.lock().await.next_id
    }

    async fn values(&self) -> Vec<T> {
        let table = self.inner.lock().await;
        table.rows.values().cloned().collect()
    }

    async fn len(&self) -> usize {
        self.inner.lock().await.rows.len()
    }
}
