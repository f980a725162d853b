//! Configuration loading.
//!
//! - `types.rs` - TOML schema with per-field defaults
//! - `loader.rs` - File discovery, parsing and validation

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, PersistConfig, StorageBackend, StorageConfig};
