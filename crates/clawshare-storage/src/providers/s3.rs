//! S3-compatible object storage provider (Cloudflare R2, MinIO, AWS).
//!
//! Signing is done locally with SigV4; no request reaches the object store
//! until the client uses a minted URL. Bad credentials therefore surface as
//! errors from the object store, not from this provider.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use tracing::debug;

use clawshare_core::config::StorageConfig;
use clawshare_core::error::{AppError, ErrorKind};
use clawshare_core::result::AppResult;
use clawshare_core::traits::storage::clamp_presign_ttl;
use clawshare_core::traits::{Disposition, ObjectStorage, PresignedUpload};

/// S3-compatible storage provider that only mints presigned URLs.
#[derive(Debug, Clone)]
pub struct S3ObjectStorage {
    client: Client,
    bucket: String,
    public_url: String,
}

impl S3ObjectStorage {
    /// Create a new provider from configuration.
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("storage.bucket must not be empty"));
        }

        let endpoint = config.resolved_endpoint();
        if config.access_key.is_empty() || config.secret_key.is_empty() {
            tracing::warn!(
                endpoint = %endpoint,
                "Object storage credentials are empty; minted URLs will be rejected"
            );
        }

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "clawshare",
        );

        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(&endpoint)
            .credentials_provider(credentials)
            .force_path_style(config.force_path_style)
            .build();

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initialized S3 object storage"
        );

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            public_url: config.public_url.trim_end_matches('/').to_string(),
        })
    }

    /// Public URL an object is served from once uploaded.
    pub fn public_url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }

    fn presigning_config(ttl: Duration) -> AppResult<PresigningConfig> {
        PresigningConfig::expires_in(clamp_presign_ttl(ttl)).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Invalid presign lifetime", e)
        })
    }
}

/// Build a `Content-Disposition` header value for `file_name`.
///
/// Quotes and backslashes are replaced so the quoted-string stays well formed.
pub fn content_disposition(disposition: Disposition, file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let kind = match disposition {
        Disposition::Inline => "inline",
        Disposition::Attachment => "attachment",
    };
    format!("{kind}; filename=\"{safe}\"")
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn issue_upload_url(
        &self,
        key: &str,
        file_name: &str,
        content_type: &str,
        ttl: Duration,
    ) -> AppResult<PresignedUpload> {
        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(Self::presigning_config(ttl)?)
            .await
            .map_err(|e| {
                AppError::storage(format!(
                    "Failed to presign upload of '{file_name}': {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        debug!(key, content_type, ttl_secs = ttl.as_secs(), "Presigned upload URL");

        Ok(PresignedUpload {
            upload_url: presigned.uri().to_string(),
            public_url: self.public_url_for(key),
        })
    }

    async fn issue_download_url(
        &self,
        key: &str,
        file_name: &str,
        disposition: Disposition,
        ttl: Duration,
    ) -> AppResult<String> {
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .response_content_disposition(content_disposition(disposition, file_name))
            .presigned(Self::presigning_config(ttl)?)
            .await
            .map_err(|e| {
                AppError::storage(format!(
                    "Failed to presign download of '{file_name}': {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        debug!(key, ?disposition, ttl_secs = ttl.as_secs(), "Presigned download URL");
        Ok(presigned.uri().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> S3ObjectStorage {
        S3ObjectStorage::new(&StorageConfig {
            access_key: "test-access".to_string(),
            secret_key: "test-secret".to_string(),
            public_url: "https://files.example.com/".to_string(),
            endpoint: Some("http://localhost:9000".to_string()),
            ..StorageConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_public_url_trims_trailing_slash() {
        assert_eq!(
            storage().public_url_for("abc-123456"),
            "https://files.example.com/abc-123456"
        );
    }

    #[test]
    fn test_empty_bucket_is_rejected() {
        let config = StorageConfig {
            bucket: String::new(),
            ..StorageConfig::default()
        };
        let err = S3ObjectStorage::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_content_disposition() {
        assert_eq!(
            content_disposition(Disposition::Attachment, "report.pdf"),
            "attachment; filename=\"report.pdf\""
        );
        assert_eq!(
            content_disposition(Disposition::Inline, "a\"b.txt"),
            "inline; filename=\"a_b.txt\""
        );
    }

    #[tokio::test]
    async fn test_upload_url_is_signed_offline() {
        let upload = storage()
            .issue_upload_url(
                "abc-123456",
                "notes.txt",
                "text/plain",
                Duration::from_secs(3600),
            )
            .await
            .unwrap();

        assert!(upload.upload_url.starts_with("http://localhost:9000/clawshare/abc-123456?"));
        assert!(upload.upload_url.contains("X-Amz-Signature="));
        assert!(upload.upload_url.contains("X-Amz-Expires=3600"));
        assert_eq!(upload.public_url, "https://files.example.com/abc-123456");
    }

    #[tokio::test]
    async fn test_download_ttl_is_clamped() {
        let url = storage()
            .issue_download_url(
                "abc-123456",
                "notes.txt",
                Disposition::Attachment,
                Duration::from_secs(30 * 24 * 3600),
            )
            .await
            .unwrap();

        assert!(url.contains("X-Amz-Expires=604800"));
        assert!(url.contains("response-content-disposition="));
    }
}
