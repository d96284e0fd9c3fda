//! Object storage trait for presigned URL issuance.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Longest lifetime an S3 SigV4 presigned URL may have (7 days).
pub const MAX_PRESIGN_TTL: Duration = Duration::from_secs(604_800);

/// URLs handed to a client that is about to upload an object.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PresignedUpload {
    /// Signed URL the client PUTs the file body to.
    pub upload_url: String,
    /// Public URL the object is served from once uploaded.
    pub public_url: String,
}

/// How a downloaded object should be presented by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Render in the browser when possible.
    Inline,
    /// Force a "save as" download.
    Attachment,
}

/// Trait for object storage backends that mint time-bounded signed URLs.
///
/// The trait is defined here in `clawshare-core` and implemented in
/// `clawshare-storage`. Implementations do not enforce the size ceiling or
/// the file type allow-list; callers validate before asking for a URL.
#[async_trait]
pub trait ObjectStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "s3").
    fn provider_type(&self) -> &str;

    /// Mint a signed PUT URL for `key` plus its public retrieval URL.
    async fn issue_upload_url(
        &self,
        key: &str,
        file_name: &str,
        content_type: &str,
        ttl: Duration,
    ) -> AppResult<PresignedUpload>;

    /// Mint a signed GET URL for `key`.
    ///
    /// `file_name` is used for the `Content-Disposition` response override.
    async fn issue_download_url(
        &self,
        key: &str,
        file_name: &str,
        disposition: Disposition,
        ttl: Duration,
    ) -> AppResult<String>;
}

/// Clamp a requested lifetime into the range a presigned URL supports.
pub fn clamp_presign_ttl(ttl: Duration) -> Duration {
    ttl.clamp(Duration::from_secs(1), MAX_PRESIGN_TTL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_presign_ttl() {
        assert_eq!(clamp_presign_ttl(Duration::ZERO), Duration::from_secs(1));
        assert_eq!(
            clamp_presign_ttl(Duration::from_secs(3600)),
            Duration::from_secs(3600)
        );
        assert_eq!(
            clamp_presign_ttl(Duration::from_secs(2_592_000)),
            MAX_PRESIGN_TTL
        );
    }
}
