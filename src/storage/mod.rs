//! Key-value storage for persisted store state.
//!
//! A store never talks to storage directly. [`PersistMiddleware`] writes
//! after successful transitions and [`hydrate`] reads once, when a store is
//! created.
//!
//! ## Backends
//!
//! - [`FileStorage`]: one JSON file per key in a directory
//! - [`MemoryStorage`]: in-process map (tests, `--storage memory`)
//!
//! [`PersistMiddleware`]: crate::store::PersistMiddleware

mod file;
mod memory;

use serde::de::DeserializeOwned;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Maximum key length in bytes.
pub const MAX_KEY_LENGTH: usize = 128;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key is empty, too long or contains characters outside `[A-Za-z0-9._-]`.
    #[error("invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// Reading or writing the backing file failed.
    #[error("storage I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Opaque string key-value storage.
pub trait KeyValueStorage: Send + Sync {
    /// Get the value for `key`, `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set `key` to `value`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Validate that a key is well-formed.
pub fn validate_key(key: &str) -> Result<()> {
    let invalid = |reason: &str| StorageError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    if key.is_empty() {
        return Err(invalid("key cannot be empty"));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(invalid(&format!(
            "key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    if key.starts_with('.') {
        return Err(invalid("key cannot start with '.'"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(invalid("key may only contain ASCII letters, digits, '-', '_' and '.'"));
    }
    Ok(())
}

/// Load a state from storage, falling back to `S::default()`.
///
/// A missing key, a storage error and an unparsable value all yield the
/// default; the latter two are logged.
pub fn hydrate<S>(storage: &dyn KeyValueStorage, key: &str) -> S
where
    S: DeserializeOwned + Default,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key = %key, "No stored state, using default");
            return S::default();
        }
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "Failed to read stored state, using default");
            return S::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(state) => {
            tracing::debug!(key = %key, "Hydrated state from storage");
            state
        }
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "Stored state is corrupt, using default");
            S::default()
        }
    }
}
