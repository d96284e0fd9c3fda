//! Single-document JSON store.
//!
//! The whole store is one JSON object mapping id → record. Every write
//! re-reads the document, applies the change, and replaces the file through
//! a temp file + rename. Read-modify-write cycles are serialized by an
//! in-process mutex; separate processes sharing the file remain
//! last-write-wins.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::debug;

use clawshare_core::error::{AppError, ErrorKind};
use clawshare_core::result::AppResult;
use clawshare_core::traits::Repository;
use clawshare_core::types::ShareId;

/// JSON document store keyed by share id.
pub struct JsonFileStore<T> {
    /// Path of the JSON document.
    path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for JsonFileStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Open the store, creating the parent directory and an empty document
    /// when they do not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create store directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        if !tokio::fs::try_exists(&path).await? {
            tokio::fs::write(&path, b"{}").await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to initialize store '{}'", path.display()),
                    e,
                )
            })?;
        }

        tracing::info!(path = %path.display(), "Opened JSON share store");

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
            _record: PhantomData,
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AppResult<BTreeMap<String, T>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read store '{}'", self.path.display()),
                    e,
                ));
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Corrupt store document '{}'", self.path.display()),
                e,
            )
        })
    }

    async fn save(&self, document: &BTreeMap<String, T>) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, &json).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write '{}'", tmp.display()),
                e,
            )
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace '{}'", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), records = document.len(), "Store document saved");
        Ok(())
    }
}

#[async_trait]
impl<T> Repository<T, ShareId> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    fn backend(&self) -> &str {
        "json"
    }

    async fn write(&self, id: &ShareId, entity: &T) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        document.insert(id.to_string(), entity.clone());
        self.save(&document).await
    }

    async fn read(&self, id: &ShareId) -> AppResult<Option<T>> {
        let mut document = self.load().await?;
        Ok(document.remove(id.as_str()))
    }

    async fn delete(&self, id: &ShareId) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        if document.remove(id.as_str()).is_some() {
            self.save(&document).await?;
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<T>> {
        Ok(self.load().await?.into_values().collect())
    }
}
