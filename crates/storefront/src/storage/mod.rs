//! Key-value storage backends for persisted store state.
//!
//! Collections talk to storage only through [`StorageBackend`], so the same
//! cart can be backed by an in-memory map in tests and by files on disk in
//! the CLI. Values are JSON documents stored as strings.
//!
//! Backends are shared between collections and stores, so they synchronize
//! internally and take `&self`.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors raised by a storage backend.
///
/// Collections never surface these to callers: reads fall back to an empty
/// collection and writes are logged and dropped.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters the backend cannot store.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Writing the value would exceed the backend's capacity.
    #[error("Storage quota exceeded writing {key} ({needed} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    /// Backend is disabled or its lock is poisoned.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistent string key-value storage.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Validate a storage key for backends that map keys onto file names.
///
/// Accepts ASCII letters, digits, `_`, `-` and `.`, and rejects `.`/`..`.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("fashion_cart").is_ok());
        assert!(validate_key("tech-gear.orders").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("..").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a b").is_err());
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::QuotaExceeded {
            key: "beauty_cart".to_string(),
            needed: 10,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "Storage quota exceeded writing beauty_cart (10 bytes, 4 available)"
        );
    }
}
