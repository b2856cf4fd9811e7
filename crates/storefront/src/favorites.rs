//! Persistent favorites set.

use std::sync::Arc;

use lookbook_core::ProductId;

use crate::collection::PersistentCollection;
use crate::storage::StorageBackend;

/// Favorited product ids, in the order they were favorited.
#[derive(Debug)]
pub struct Favorites {
    ids: PersistentCollection<ProductId>,
}

impl Favorites {
    /// Load the favorites persisted under `key`. Duplicate ids are collapsed.
    pub fn load(storage: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        let mut ids = PersistentCollection::load(storage, key);
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id: &ProductId| seen.insert(id.clone()));
        Self { ids }
    }

    /// Flip membership of `id`. Returns `true` if it is now a favorite.
    pub fn toggle(&mut self, id: impl Into<ProductId>) -> bool {
        let id = id.into();
        let added = self.ids.update(|ids| {
            if let Some(index) = ids.iter().position(|existing| *existing == id) {
                ids.remove(index);
                false
            } else {
                ids.push(id.clone());
                true
            }
        });
        tracing::debug!(%id, added, "Toggled favorite");
        added
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        self.ids.items()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Discard in-memory state and hydrate again from storage.
    pub fn reload(&mut self) {
        self.ids.reload();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn favorites() -> Favorites {
        Favorites::load(Arc::new(MemoryStorage::new()), "test_favorites")
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut favorites = favorites();
        assert!(favorites.toggle("sku-1"));
        assert!(favorites.contains(&ProductId::from("sku-1")));
        assert_eq!(favorites.count(), 1);

        assert!(!favorites.toggle("sku-1"));
        assert!(!favorites.contains(&ProductId::from("sku-1")));
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn test_numeric_and_string_ids_share_membership() {
        let mut favorites = favorites();
        favorites.toggle(42_u32);
        assert!(favorites.contains(&ProductId::from("42")));
        favorites.toggle("42");
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn test_persists_as_string_array() {
        let storage = Arc::new(MemoryStorage::new());
        let mut favorites = Favorites::load(storage.clone(), "tech_favorites");
        favorites.toggle(7_i64);
        favorites.toggle("dock");
        assert_eq!(
            storage.get("tech_favorites").unwrap().as_deref(),
            Some(r#"["7","dock"]"#)
        );
    }

    #[test]
    fn test_loads_numeric_ids_and_collapses_duplicates() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("beauty_favorites", r#"[3, "3", "lip-oil"]"#).unwrap();
        let favorites = Favorites::load(storage, "beauty_favorites");
        assert_eq!(
            favorites.ids(),
            &[ProductId::from("3"), ProductId::from("lip-oil")]
        );
    }

    #[test]
    fn test_clear() {
        let mut favorites = favorites();
        favorites.toggle("a");
        favorites.toggle("b");
        favorites.clear();
        assert_eq!(favorites.count(), 0);
    }
}
