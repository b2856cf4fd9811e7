//! A themed store's client state.
//!
//! Each demo (fashion, beauty, sneakers, tech gear) opens its own [`Store`]
//! under a namespace. The namespace prefixes every storage key, so two stores
//! sharing a backend never see each other's carts, favorites or orders.

use std::sync::Arc;

use lookbook_core::{DEFAULT_ORDER_PREFIX, Order, ShippingInfo};
use tracing::instrument;

use crate::cart::{Cart, DEFAULT_MAX_LINE_QUANTITY};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::favorites::Favorites;
use crate::orders::Orders;
use crate::storage::{FileStorage, StorageBackend};

/// Storage key suffixes for each collection.
pub mod keys {
    pub const CART: &str = "cart";
    pub const FAVORITES: &str = "favorites";
    pub const ORDERS: &str = "orders";
}

/// Storage key for a store's collection, e.g. `fashion_cart`.
#[must_use]
pub fn storage_key(namespace: &str, collection: &str) -> String {
    format!("{namespace}_{collection}")
}

/// Per-store policy knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Upper bound applied by `Cart::update_quantity`; `None` disables it.
    pub max_line_quantity: Option<u32>,
    /// Prefix for generated order ids.
    pub order_prefix: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_line_quantity: Some(DEFAULT_MAX_LINE_QUANTITY),
            order_prefix: DEFAULT_ORDER_PREFIX.to_string(),
        }
    }
}

/// Cart, favorites and order history of one store.
#[derive(Debug)]
pub struct Store {
    namespace: String,
    cart: Cart,
    favorites: Favorites,
    orders: Orders,
}

impl Store {
    /// Open the store persisted under `namespace` in `storage`.
    pub fn open(
        storage: Arc<dyn StorageBackend>,
        namespace: impl Into<String>,
        options: StoreOptions,
    ) -> Self {
        let namespace = namespace.into();
        let cart = Cart::load(
            Arc::clone(&storage),
            storage_key(&namespace, keys::CART),
            options.max_line_quantity,
        );
        let favorites = Favorites::load(
            Arc::clone(&storage),
            storage_key(&namespace, keys::FAVORITES),
        );
        let orders = Orders::load(
            storage,
            storage_key(&namespace, keys::ORDERS),
            options.order_prefix,
        );

        tracing::debug!(
            namespace = %namespace,
            cart_lines = cart.lines().len(),
            favorites = favorites.count(),
            orders = orders.count(),
            "Store opened"
        );

        Self {
            namespace,
            cart,
            favorites,
            orders,
        }
    }

    /// Open the configured store on file-backed storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let storage = FileStorage::open(&config.data_dir)?;
        Ok(Self::open(
            Arc::new(storage),
            config.store.clone(),
            config.store_options(),
        ))
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut Favorites {
        &mut self.favorites
    }

    #[must_use]
    pub const fn orders(&self) -> &Orders {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut Orders {
        &mut self.orders
    }

    /// Place an order for the current cart, then empty the cart.
    ///
    /// Returns `None` without touching anything when the cart is empty.
    #[instrument(skip(self, shipping_info), fields(namespace = %self.namespace))]
    pub fn checkout(&mut self, shipping_info: Option<ShippingInfo>) -> Option<Order> {
        if self.cart.is_empty() {
            tracing::debug!("Checkout with empty cart ignored");
            return None;
        }

        let order = self.orders.create(
            self.cart.lines(),
            self.cart.total_amount(),
            shipping_info,
        );
        self.cart.clear();
        Some(order)
    }

    /// Discard in-memory state and hydrate every collection from storage.
    pub fn reload(&mut self) {
        self.cart.reload();
        self.favorites.reload();
        self.orders.reload();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use lookbook_core::{LineKey, NewCartLine, Price};

    fn hoodie() -> NewCartLine {
        NewCartLine::new("1", "Hoodie", Price::from_units(2000)).with_size("M")
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key("fashion", keys::CART), "fashion_cart");
        assert_eq!(storage_key("tech", keys::ORDERS), "tech_orders");
    }

    #[test]
    fn test_checkout_moves_cart_into_order() {
        let mut store = Store::open(
            Arc::new(MemoryStorage::new()),
            "fashion",
            StoreOptions::default(),
        );
        store.cart_mut().add(hoodie().with_quantity(2));
        store
            .cart_mut()
            .add(NewCartLine::new("2", "Cap", Price::from_units(500)));

        let order = store.checkout(None).unwrap();
        assert!(store.cart().is_empty());
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total, Price::from_units(4500));
        assert_eq!(store.orders().count(), 1);
        assert!(order.id.as_str().starts_with("ORD-"));
    }

    #[test]
    fn test_checkout_with_empty_cart_is_none() {
        let mut store = Store::open(
            Arc::new(MemoryStorage::new()),
            "fashion",
            StoreOptions::default(),
        );
        assert!(store.checkout(None).is_none());
        assert_eq!(store.orders().count(), 0);
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
        let mut fashion = Store::open(Arc::clone(&storage), "fashion", StoreOptions::default());
        let mut sneakers = Store::open(Arc::clone(&storage), "sneakers", StoreOptions::default());

        fashion.cart_mut().add(hoodie());
        fashion.favorites_mut().toggle("1");
        sneakers.favorites_mut().toggle("9");

        let sneakers_again = Store::open(storage, "sneakers", StoreOptions::default());
        assert!(sneakers_again.cart().is_empty());
        assert_eq!(sneakers_again.favorites().count(), 1);
        assert!(
            sneakers_again
                .cart()
                .get(&LineKey::variant("1", Some("M"), None::<String>))
                .is_none()
        );
    }

    #[test]
    fn test_options_flow_into_collections() {
        let options = StoreOptions {
            max_line_quantity: Some(3),
            order_prefix: "BTY".to_string(),
        };
        let mut store = Store::open(Arc::new(MemoryStorage::new()), "beauty", options);
        let key = LineKey::variant("1", Some("M"), None::<String>);
        store.cart_mut().add(hoodie());
        store.cart_mut().update_quantity(&key, 9);
        assert_eq!(store.cart().get(&key).unwrap().quantity, 3);

        let order = store.checkout(None).unwrap();
        assert!(order.id.as_str().starts_with("BTY-"));
    }
}
