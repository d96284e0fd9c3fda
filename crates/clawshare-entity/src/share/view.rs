//! Public projection of a share record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clawshare_core::types::ShareId;

use super::model::ShareRecord;

/// What callers of the HTTP API get to see about a share.
///
/// Mirrors [`ShareRecord`] except that the password hash is replaced by a
/// flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareView {
    /// Share identifier.
    pub id: ShareId,
    /// Original file name.
    pub name: String,
    /// MIME type.
    pub content_type: String,
    /// File size in bytes.
    pub size: u64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Expiry time.
    pub expires_at: DateTime<Utc>,
    /// Whether a password is needed to download.
    pub password_protected: bool,
    /// Whether the download is forced.
    pub is_download: bool,
    /// Download counter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
}

impl From<&ShareRecord> for ShareView {
    fn from(record: &ShareRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            content_type: record.content_type.clone(),
            size: record.size,
            created_at: record.created_at,
            expires_at: record.expires_at,
            password_protected: record.is_password_protected(),
            is_download: record.is_download,
            downloads: record.downloads,
        }
    }
}

impl From<ShareRecord> for ShareView {
    fn from(record: ShareRecord) -> Self {
        Self::from(&record)
    }
}
