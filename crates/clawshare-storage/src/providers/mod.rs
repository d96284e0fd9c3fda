//! Object storage provider implementations.

pub mod s3;

use std::sync::Arc;

use clawshare_core::config::StorageConfig;
use clawshare_core::result::AppResult;
use clawshare_core::traits::ObjectStorage;

pub use self::s3::S3ObjectStorage;

/// Build the object storage provider described by configuration.
pub fn build_object_storage(config: &StorageConfig) -> AppResult<Arc<dyn ObjectStorage>> {
    Ok(Arc::new(S3ObjectStorage::new(config)?))
}
