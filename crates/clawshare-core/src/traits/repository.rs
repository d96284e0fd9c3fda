//! Generic keyed-record store trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Keyed record store.
///
/// Generic over the record and key types so that each backend (JSON
/// document, memory) can serve any serializable entity. Every operation is
/// a whole-record upsert, lookup, or removal; there is no partial update.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + std::fmt::Debug + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Return the backend name (e.g. "json", "memory").
    fn backend(&self) -> &str;

    /// Insert or replace the record stored under `id`.
    async fn write(&self, id: &Id, entity: &Entity) -> AppResult<()>;

    /// Look up the record stored under `id`.
    async fn read(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Remove the record stored under `id`. Removing an absent key is not an error.
    async fn delete(&self, id: &Id) -> AppResult<()>;

    /// Return every stored record.
    async fn list(&self) -> AppResult<Vec<Entity>>;
}
