//! Storage-backed ordered collection.
//!
//! A [`PersistentCollection`] is hydrated from storage once, when it is
//! loaded, and writes its full contents back after every mutation. The
//! in-memory list is authoritative: a failed write is logged and the mutation
//! still stands for the current session.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::StorageBackend;

/// An ordered list persisted as a JSON array under a single storage key.
pub struct PersistentCollection<T> {
    key: String,
    storage: Arc<dyn StorageBackend>,
    items: Vec<T>,
}

impl<T> fmt::Debug for PersistentCollection<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentCollection")
            .field("key", &self.key)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T> PersistentCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the collection stored under `key`.
    ///
    /// A missing key, an unreadable backend, or a value that does not parse
    /// as a list of `T` all produce an empty collection.
    pub fn load(storage: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = read_items(storage.as_ref(), &key);
        Self {
            key,
            storage,
            items,
        }
    }

    /// Storage key this collection is persisted under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply `f` to the items, then persist.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let result = f(&mut self.items);
        self.persist();
        result
    }

    /// Keep only items matching `keep`. Persists only if something was removed.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(keep);
        let removed = before - self.items.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Remove every item and persist the empty list.
    pub fn clear(&mut self) {
        self.update(Vec::clear);
    }

    /// Discard in-memory state and hydrate again from storage.
    pub fn reload(&mut self) {
        self.items = read_items(self.storage.as_ref(), &self.key);
    }

    /// Best-effort write of the current items.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to serialize collection");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &json) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist collection");
        }
    }
}

fn read_items<T: DeserializeOwned>(storage: &dyn StorageBackend, key: &str) -> Vec<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read collection, starting empty");
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "Discarding unreadable collection");
        Vec::new()
    })
}

impl<'a, T> IntoIterator for &'a PersistentCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
