//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// S3-compatible object storage configuration (Cloudflare R2 by default).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage account identifier, used to derive the R2 endpoint.
    #[serde(default)]
    pub account_id: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Bucket holding shared objects.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Public base URL objects are reachable under.
    #[serde(default = "default_public_url")]
    pub public_url: String,
    /// Explicit S3 endpoint (for MinIO, AWS, ...). Derived from `account_id` when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Signing region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Use path-style addressing (`endpoint/bucket/key`).
    #[serde(default = "default_true")]
    pub force_path_style: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            bucket: default_bucket(),
            public_url: default_public_url(),
            endpoint: None,
            region: default_region(),
            force_path_style: true,
        }
    }
}

impl StorageConfig {
    /// The endpoint requests are signed for.
    pub fn resolved_endpoint(&self) -> String {
        match self.endpoint.as_deref().filter(|e| !e.is_empty()) {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}.r2.cloudflarestorage.com", self.account_id),
        }
    }
}

fn default_bucket() -> String {
    "clawshare".to_string()
}

fn default_public_url() -> String {
    "https://pub-xxx.r2.dev".to_string()
}

fn default_region() -> String {
    "auto".to_string()
}

fn default_true() -> bool {
    true
}
