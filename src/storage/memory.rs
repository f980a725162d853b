//! In-memory key-value storage.
//!
//! Not durable: data is lost when the process exits.

use parking_lot::RwLock;
use std::collections::HashMap;

use super::{validate_key, KeyValueStorage, Result};

/// `HashMap` behind a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored keys.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if the storage is empty.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.data.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let storage = MemoryStorage::new();
        storage.set("cart", "{}").unwrap();
        assert_eq!(storage.get("cart").unwrap(), Some("{}".to_string()));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_get_missing_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("cart").unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("note", "a").unwrap();
        storage.set("note", "b").unwrap();
        assert_eq!(storage.get("note").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("cart").is_ok());
    }

    #[test]
    fn test_rejects_invalid_key() {
        let storage = MemoryStorage::new();
        assert!(storage.set("", "x").is_err());
        assert!(storage.get("a b").is_err());
    }
}
