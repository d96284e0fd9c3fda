//! Store backends and construction from configuration.

pub mod json_file;
pub mod memory;

use std::sync::Arc;

use clawshare_core::config::{StoreBackend, StoreConfig};
use clawshare_core::result::AppResult;
use clawshare_core::traits::Repository;
use clawshare_core::types::ShareId;
use clawshare_entity::share::ShareRecord;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// The share metadata store as used by the service layer.
pub type ShareStore = dyn Repository<ShareRecord, ShareId>;

/// Open the share store selected by configuration.
pub async fn open_share_store(config: &StoreConfig) -> AppResult<Arc<ShareStore>> {
    match config.backend {
        StoreBackend::Json => {
            let store = JsonFileStore::<ShareRecord>::open(config.document_path()).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory share store; records are lost on restart");
            Ok(Arc::new(MemoryStore::<ShareRecord>::new()))
        }
    }
}
