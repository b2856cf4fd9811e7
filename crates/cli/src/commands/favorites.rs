//! Favorites commands.

use lookbook_storefront::Store;

pub fn toggle(store: &mut Store, id: &str) -> String {
    if store.favorites_mut().toggle(id) {
        format!("Added {id} to favorites")
    } else {
        format!("Removed {id} from favorites")
    }
}

pub fn list(store: &Store) -> String {
    let favorites = store.favorites();
    if favorites.count() == 0 {
        return "No favorites".to_string();
    }
    favorites
        .ids()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use lookbook_storefront::{MemoryStorage, StoreOptions};

    use super::*;

    #[test]
    fn test_toggle_and_list() {
        let mut store = Store::open(Arc::new(MemoryStorage::new()), "beauty", StoreOptions::default());
        assert_eq!(list(&store), "No favorites");

        assert_eq!(toggle(&mut store, "7"), "Added 7 to favorites");
        assert_eq!(toggle(&mut store, "dock"), "Added dock to favorites");
        assert_eq!(list(&store), "7\ndock");

        assert_eq!(toggle(&mut store, "7"), "Removed 7 from favorites");
        assert_eq!(list(&store), "dock");
    }
}
