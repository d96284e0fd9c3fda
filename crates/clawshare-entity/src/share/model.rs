//! Share metadata record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clawshare_core::types::ShareId;

/// Metadata describing one uploaded file and its share link.
///
/// Serialized with camelCase keys; this is the on-disk shape of each value in
/// the metadata document. The object itself lives in object storage under
/// the same `id` and is only weakly linked: deleting the record leaves the
/// object in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecord {
    /// Unique share identifier, also the object key.
    pub id: ShareId,
    /// Original file name.
    pub name: String,
    /// MIME type.
    pub content_type: String,
    /// File size in bytes at upload time.
    pub size: u64,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// The record is invalid from this instant on.
    pub expires_at: DateTime<Utc>,
    /// Argon2id hash of the share password (`None` = open share).
    pub password: Option<String>,
    /// Whether the download should be forced rather than shown inline.
    pub is_download: bool,
    /// Download counter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
}

impl ShareRecord {
    /// Check whether the share has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Check whether the share is gated by a password.
    pub fn is_password_protected(&self) -> bool {
        self.password.is_some()
    }

    /// Whole seconds left before expiry, zero once expired.
    pub fn remaining_seconds_at(&self, now: DateTime<Utc>) -> u64 {
        (self.expires_at - now).num_seconds().max(0) as u64
    }
}
