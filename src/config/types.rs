use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::storage::FileStorage;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub persist: PersistConfig,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Where persisted state lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Directory for the file backend (default: `<data_dir>/statelab`).
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Storage backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per store in the data directory.
    #[default]
    File,
    /// Process memory; nothing survives the invocation.
    Memory,
}

/// Persistence middleware settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistConfig {
    /// Write state after every state-changing dispatch (default: true).
    #[serde(default = "default_persist_enabled")]
    pub enabled: bool,
    /// Prefix of storage keys: `<prefix>.<feature>` (default: "statelab").
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_persist_enabled() -> bool {
    true
}

fn default_key_prefix() -> String {
    "statelab".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            enabled: default_persist_enabled(),
            key_prefix: default_key_prefix(),
        }
    }
}

impl StorageConfig {
    /// Directory for the file backend, falling back to the platform default.
    pub fn data_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(FileStorage::default_dir)
    }
}

impl PersistConfig {
    /// Storage key for a feature's state.
    pub fn storage_key(&self, feature: &str) -> String {
        format!("{}.{}", self.key_prefix, feature)
    }
}
