//! Metadata store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which metadata store implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// A single JSON document on disk.
    #[default]
    Json,
    /// Process memory only; records vanish on restart.
    Memory,
}

/// Metadata store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store implementation.
    #[serde(default)]
    pub backend: StoreBackend,
    /// Root directory for runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// File name of the JSON document inside `data_root`.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_root: default_data_root(),
            file_name: default_file_name(),
        }
    }
}

impl StoreConfig {
    /// Full path of the JSON metadata document.
    pub fn document_path(&self) -> PathBuf {
        PathBuf::from(&self.data_root).join(&self.file_name)
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_file_name() -> String {
    "shares.json".to_string()
}
