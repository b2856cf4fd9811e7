//! Persistent order history, newest first.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lookbook_core::{CartLine, Order, OrderId, OrderStatus, Price, ShippingInfo};

use crate::collection::PersistentCollection;
use crate::storage::StorageBackend;

/// A store's placed orders.
#[derive(Debug)]
pub struct Orders {
    orders: PersistentCollection<Order>,
    prefix: String,
}

impl Orders {
    /// Load the orders persisted under `key`. New order ids use `prefix`.
    pub fn load(
        storage: Arc<dyn StorageBackend>,
        key: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            orders: PersistentCollection::load(storage, key),
            prefix: prefix.into(),
        }
    }

    /// Record a new order stamped with the current time.
    ///
    /// See [`Orders::create_at`].
    pub fn create(
        &mut self,
        items: &[CartLine],
        total: Price,
        shipping_info: Option<ShippingInfo>,
    ) -> Order {
        self.create_at(items, total, shipping_info, Utc::now())
    }

    /// Record a new order created at `created_at`.
    ///
    /// `items` is copied and `total` frozen, so later cart or catalog changes
    /// never alter the order. The order starts `Pending` and is placed at the
    /// front of the history.
    pub fn create_at(
        &mut self,
        items: &[CartLine],
        total: Price,
        shipping_info: Option<ShippingInfo>,
        created_at: DateTime<Utc>,
    ) -> Order {
        let order = Order {
            id: OrderId::generate(&self.prefix, created_at),
            items: items.to_vec(),
            total,
            created_at,
            status: OrderStatus::Pending,
            shipping_info,
        };

        let placed = order.clone();
        self.orders.update(|orders| orders.insert(0, order));

        tracing::info!(order_id = %placed.id, total = %placed.total, lines = placed.items.len(), "Order created");
        placed
    }

    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// All orders, newest first.
    #[must_use]
    pub fn all(&self) -> &[Order] {
        self.orders.items()
    }

    /// Most recently placed order.
    #[must_use]
    pub fn latest(&self) -> Option<&Order> {
        self.orders.items().first()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Discard in-memory state and hydrate again from storage.
    pub fn reload(&mut self) {
        self.orders.reload();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;
    use lookbook_core::NewCartLine;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn lines() -> Vec<CartLine> {
        vec![
            NewCartLine::new("1", "Hoodie", Price::from_units(2000))
                .with_quantity(2)
                .into_line(),
            NewCartLine::new("2", "Cap", Price::from_units(500)).into_line(),
        ]
    }

    #[test]
    fn test_create_snapshots_items_and_total() {
        let mut orders = Orders::load(Arc::new(MemoryStorage::new()), "k", "ORD");
        let mut live = lines();
        let order = orders.create_at(&live, Price::from_units(4500), None, at(36));

        live.clear();
        assert_eq!(order.id.as_str(), "ORD-10");
        assert_eq!(order.status, OrderStatus::Pending);
        let stored = orders.get(&order.id).unwrap();
        assert_eq!(stored.items.len(), 2);
        assert_eq!(stored.total, Price::from_units(4500));
        assert_eq!(stored.item_count(), 3);
    }

    #[test]
    fn test_newest_first() {
        let mut orders = Orders::load(Arc::new(MemoryStorage::new()), "k", "SNK");
        let first = orders.create_at(&lines(), Price::from_units(1), None, at(1_000));
        let second = orders.create_at(&lines(), Price::from_units(2), None, at(2_000));

        assert_eq!(orders.count(), 2);
        assert_eq!(orders.latest().unwrap().id, second.id);
        let ids: Vec<_> = orders.all().iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_orders_persist_with_shipping_info() {
        let storage = Arc::new(MemoryStorage::new());
        let mut orders = Orders::load(storage.clone(), "fashion_orders", "ORD");
        let shipping = ShippingInfo::parse("12 Main St", "+1 555 0100").unwrap();
        let order = orders.create(&lines(), Price::from_units(4500), Some(shipping.clone()));

        let reloaded = Orders::load(storage, "fashion_orders", "ORD");
        let stored = reloaded.get(&order.id).unwrap();
        assert_eq!(stored.shipping_info.as_ref(), Some(&shipping));
        assert_eq!(stored, &order);
    }

    #[test]
    fn test_unknown_order_is_none() {
        let orders = Orders::load(Arc::new(MemoryStorage::new()), "k", "ORD");
        assert!(orders.get(&OrderId::new("ORD-NOPE")).is_none());
        assert!(orders.latest().is_none());
    }
}
