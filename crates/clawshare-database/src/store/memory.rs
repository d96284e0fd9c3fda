//! In-memory store using DashMap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use clawshare_core::result::AppResult;
use clawshare_core::traits::Repository;
use clawshare_core::types::ShareId;

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: Arc<DashMap<ShareId, T>>,
}

impl<T> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T, ShareId> for MemoryStore<T>
where
    T: Clone + std::fmt::Debug + Send + Sync + 'static,
{
    fn backend(&self) -> &str {
        "memory"
    }

    async fn write(&self, id: &ShareId, entity: &T) -> AppResult<()> {
        self.records.insert(id.clone(), entity.clone());
        debug!(id = %id, "Record stored in memory");
        Ok(())
    }

    async fn read(&self, id: &ShareId) -> AppResult<Option<T>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: &ShareId) -> AppResult<()> {
        self.records.remove(id);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<T>> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}
