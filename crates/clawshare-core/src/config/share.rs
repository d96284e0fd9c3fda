//! Share limits and expiry configuration.

use serde::{Deserialize, Serialize};

/// Limits applied when creating and resolving shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Largest accepted file in bytes (default 50 MiB).
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
    /// Share lifetime when the caller does not pick one (default 7 days).
    #[serde(default = "default_expiry")]
    pub default_expiry_seconds: u64,
    /// Longest lifetime a caller may request (`None` = no cap).
    #[serde(default)]
    pub max_expiry_seconds: Option<u64>,
    /// Lifetime of minted upload URLs (default 1 hour).
    #[serde(default = "default_url_ttl")]
    pub upload_url_ttl_seconds: u64,
    /// Lifetime of minted download URLs (default 1 hour).
    #[serde(default = "default_url_ttl")]
    pub download_url_ttl_seconds: u64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
            default_expiry_seconds: default_expiry(),
            max_expiry_seconds: None,
            upload_url_ttl_seconds: default_url_ttl(),
            download_url_ttl_seconds: default_url_ttl(),
        }
    }
}

fn default_max_file_size() -> u64 {
    52_428_800 // 50 MiB
}

fn default_expiry() -> u64 {
    604_800 // 7 days
}

fn default_url_ttl() -> u64 {
    3_600
}
