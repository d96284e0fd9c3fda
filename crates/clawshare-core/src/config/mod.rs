//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod logging;
pub mod share;
pub mod storage;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::share::ShareConfig;
pub use self::storage::StorageConfig;
pub use self::store::{StoreBackend, StoreConfig};

use crate::error::AppError;

/// Legacy environment variables understood for the object storage section.
///
/// Each entry maps a bare variable name to the storage field it fills and the
/// prefixed variable that takes precedence over it.
const STORAGE_ENV_ALIASES: [(&str, &str, &str); 5] = [
    ("R2_ACCOUNT_ID", "account_id", "CLAWSHARE__STORAGE__ACCOUNT_ID"),
    ("R2_ACCESS_KEY_ID", "access_key", "CLAWSHARE__STORAGE__ACCESS_KEY"),
    ("R2_SECRET_ACCESS_KEY", "secret_key", "CLAWSHARE__STORAGE__SECRET_KEY"),
    ("R2_BUCKET_NAME", "bucket", "CLAWSHARE__STORAGE__BUCKET"),
    ("R2_PUBLIC_URL", "public_url", "CLAWSHARE__STORAGE__PUBLIC_URL"),
];

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Metadata store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Object storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Share limits and expiry settings.
    #[serde(default)]
    pub share: ShareConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CLAWSHARE__`. The bare `R2_*`
    /// variables fill storage settings that no prefixed variable overrides.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CLAWSHARE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let mut app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.apply_env_aliases(|name| std::env::var(name).ok());
        app.validate()?;
        Ok(app)
    }

    /// Fill storage settings from the legacy `R2_*` variables.
    ///
    /// `lookup` resolves an environment variable name to its value.
    pub fn apply_env_aliases<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for (alias, field, prefixed) in STORAGE_ENV_ALIASES {
            if lookup(prefixed).is_some() {
                continue;
            }
            let Some(value) = lookup(alias).filter(|v| !v.is_empty()) else {
                continue;
            };
            tracing::debug!(alias, field, "Applying legacy storage variable");
            match field {
                "account_id" => self.storage.account_id = value,
                "access_key" => self.storage.access_key = value,
                "secret_key" => self.storage.secret_key = value,
                "bucket" => self.storage.bucket = value,
                "public_url" => self.storage.public_url = value,
                _ => {}
            }
        }
    }

    /// Reject settings that cannot produce a working service.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.share.max_file_size_bytes == 0 {
            return Err(AppError::configuration(
                "share.max_file_size_bytes must be greater than zero",
            ));
        }
        let above_cap = self
            .share
            .max_expiry_seconds
            .is_some_and(|max| self.share.default_expiry_seconds > max);
        if self.share.default_expiry_seconds == 0 || above_cap {
            return Err(AppError::configuration(
                "share.default_expiry_seconds must be within 1..=share.max_expiry_seconds",
            ));
        }
        if self.share.upload_url_ttl_seconds == 0 || self.share.download_url_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "share URL lifetimes must be greater than zero",
            ));
        }
        Ok(())
    }
}
