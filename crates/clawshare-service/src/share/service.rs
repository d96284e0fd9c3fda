//! Share lifecycle service.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use clawshare_auth::password::PasswordHasher;
use clawshare_core::config::ShareConfig;
use clawshare_core::error::AppError;
use clawshare_core::traits::{Disposition, ObjectStorage};
use clawshare_core::types::ShareId;
use clawshare_database::ShareStore;
use clawshare_entity::share::{ShareRecord, ShareView};
use clawshare_storage::is_allowed_type;

use super::access::AccessService;
use super::link::LinkService;

/// Content type recorded when the client does not name one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Request to create a new share.
#[derive(Debug, Clone, Default)]
pub struct CreateShareRequest {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the client.
    pub content_type: Option<String>,
    /// File size in bytes.
    pub size: u64,
    /// Requested lifetime in seconds (`None` = configured default).
    pub expires_in: Option<u64>,
    /// Share password (`None` or empty = open share).
    pub password: Option<String>,
    /// Force download instead of inline display.
    pub is_download: bool,
}

/// Result of a successful share creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedShare {
    /// New share identifier.
    pub share_id: ShareId,
    /// Presigned URL the client PUTs the file body to.
    pub upload_url: String,
    /// Public object URL.
    pub public_url: String,
    /// Share lifetime in seconds.
    pub expires_in: u64,
    /// Share expiry instant.
    pub expires_at: DateTime<Utc>,
    /// Share page URL.
    pub share_url: String,
}

/// A share the caller was admitted to, with a fresh download URL.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedShare {
    /// Public share metadata.
    pub meta: ShareView,
    /// Presigned download URL.
    pub download_url: String,
}

/// Manages share creation, resolution, listing, and revocation.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Metadata store.
    store: Arc<ShareStore>,
    /// Object storage gateway.
    storage: Arc<dyn ObjectStorage>,
    /// Expiry and password gate.
    access: AccessService,
    /// Identifier and link builder.
    links: LinkService,
    /// Password hasher for new shares.
    hasher: Arc<PasswordHasher>,
    /// Limits and lifetimes.
    config: ShareConfig,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        store: Arc<ShareStore>,
        storage: Arc<dyn ObjectStorage>,
        hasher: Arc<PasswordHasher>,
        links: LinkService,
        config: ShareConfig,
    ) -> Self {
        Self {
            access: AccessService::new(Arc::clone(&store), Arc::clone(&hasher)),
            store,
            storage,
            links,
            hasher,
            config,
        }
    }

    /// Configured limits.
    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Validates an upload, mints its upload URL, and records the share.
    pub async fn create(&self, req: CreateShareRequest) -> Result<CreatedShare, AppError> {
        let file_name = req.file_name.trim();
        if file_name.is_empty() {
            return Err(AppError::validation("No file provided"));
        }
        if !is_allowed_type(file_name) {
            return Err(AppError::validation("File type not allowed"));
        }
        if req.size > self.config.max_file_size_bytes {
            return Err(AppError::validation(format!(
                "File too large (max {}MB)",
                self.config.max_file_size_bytes / (1024 * 1024)
            )));
        }

        let expires_in = self.validate_expiry(req.expires_in)?;
        let created_at = Utc::now();
        let expires_at = expiry_instant(created_at, expires_in)?;
        let content_type = req
            .content_type
            .as_deref()
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let id = self.links.generate_id();
        let upload = self
            .storage
            .issue_upload_url(
                id.as_str(),
                file_name,
                &content_type,
                Duration::from_secs(self.config.upload_url_ttl_seconds),
            )
            .await?;

        let password = match req.password.as_deref().filter(|p| !p.is_empty()) {
            Some(secret) => Some(self.hasher.hash_password(secret)?),
            None => None,
        };

        let record = ShareRecord {
            id: id.clone(),
            name: file_name.to_string(),
            content_type,
            size: req.size,
            created_at,
            expires_at,
            password,
            is_download: req.is_download,
            downloads: None,
        };
        self.store.write(&id, &record).await?;

        info!(
            share_id = %id,
            name = %record.name,
            size = record.size,
            expires_at = %expires_at,
            password_protected = record.is_password_protected(),
            "Share created"
        );

        Ok(CreatedShare {
            share_url: self.links.share_url(&id),
            share_id: id,
            upload_url: upload.upload_url,
            public_url: upload.public_url,
            expires_in,
            expires_at,
        })
    }

    /// Admits the caller to a share and mints a download URL.
    pub async fn resolve(
        &self,
        id: &ShareId,
        password: Option<&str>,
    ) -> Result<ResolvedShare, AppError> {
        let record = self.access.admit(id, password, Utc::now()).await?;

        let disposition = if record.is_download {
            Disposition::Attachment
        } else {
            Disposition::Inline
        };
        let download_url = self
            .storage
            .issue_download_url(
                record.id.as_str(),
                &record.name,
                disposition,
                Duration::from_secs(self.config.download_url_ttl_seconds),
            )
            .await?;

        info!(share_id = %id, ?disposition, "Share resolved");

        Ok(ResolvedShare {
            meta: ShareView::from(record),
            download_url,
        })
    }

    /// Deletes a share's metadata. Revoking an unknown share succeeds.
    ///
    /// The stored object is left in place.
    pub async fn revoke(&self, id: &ShareId) -> Result<(), AppError> {
        self.store.delete(id).await?;
        info!(share_id = %id, "Share revoked");
        Ok(())
    }

    /// Public metadata of a live share.
    pub async fn info(&self, id: &ShareId) -> Result<ShareView, AppError> {
        let record = self.access.load_live(id, Utc::now()).await?;
        Ok(ShareView::from(record))
    }

    /// Every stored share, oldest first.
    pub async fn list(&self) -> Result<Vec<ShareView>, AppError> {
        let mut records = self.store.list().await?;
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(records.iter().map(ShareView::from).collect())
    }

    fn validate_expiry(&self, expires_in: Option<u64>) -> Result<u64, AppError> {
        let Some(seconds) = expires_in else {
            return Ok(self.config.default_expiry_seconds);
        };
        if seconds == 0 {
            return Err(AppError::validation("expiresIn must be greater than zero"));
        }
        if let Some(max) = self.config.max_expiry_seconds.filter(|max| seconds > *max) {
            return Err(AppError::validation(format!(
                "expiresIn must not exceed {max} seconds"
            )));
        }
        Ok(seconds)
    }
}

/// `from + seconds`, or a validation error when the instant is not representable.
fn expiry_instant(from: DateTime<Utc>, seconds: u64) -> Result<DateTime<Utc>, AppError> {
    i64::try_from(seconds)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .and_then(|lifetime| from.checked_add_signed(lifetime))
        .ok_or_else(|| AppError::validation("expiresIn is too large"))
}
