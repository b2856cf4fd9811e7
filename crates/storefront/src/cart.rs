//! Persistent shopping cart.
//!
//! Lines are identified by (product id, size, color). Adding an item whose
//! key already exists increments that line; quantities never drop below 1
//! because any update to a non-positive quantity removes the line.
//! Aggregates are recomputed from the lines on every read.

use std::sync::Arc;

use lookbook_core::{CartLine, LineKey, NewCartLine, Price};

use crate::collection::PersistentCollection;
use crate::storage::StorageBackend;

/// Default upper bound for `update_quantity`, matching the storefront stepper.
pub const DEFAULT_MAX_LINE_QUANTITY: u32 = 10;

/// A store's cart.
#[derive(Debug)]
pub struct Cart {
    lines: PersistentCollection<CartLine>,
    max_line_quantity: Option<u32>,
}

impl Cart {
    /// Load the cart persisted under `key`.
    ///
    /// Lines with a zero quantity (written by an older or foreign client) are
    /// dropped on load.
    pub fn load(
        storage: Arc<dyn StorageBackend>,
        key: impl Into<String>,
        max_line_quantity: Option<u32>,
    ) -> Self {
        let mut lines = PersistentCollection::load(storage, key);
        let dropped = lines.retain(|line: &CartLine| line.quantity >= 1);
        if dropped > 0 {
            tracing::debug!(key = lines.key(), dropped, "Dropped empty cart lines");
        }
        Self {
            lines,
            max_line_quantity,
        }
    }

    /// Add an item, merging into an existing line with the same key.
    pub fn add(&mut self, item: NewCartLine) {
        let quantity = item.normalized_quantity();
        let key = item.key();

        self.lines.update(|lines| {
            if let Some(line) = lines.iter_mut().find(|line| line.matches(&key)) {
                line.quantity = line.quantity.saturating_add(quantity);
            } else {
                lines.push(item.into_line());
            }
        });

        tracing::debug!(id = %key.id, quantity, "Added to cart");
    }

    /// Remove the line identified by `key`. Returns whether a line was removed.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let removed = self.lines.retain(|line| !line.matches(key)) > 0;
        if removed {
            tracing::debug!(id = %key.id, "Removed from cart");
        }
        removed
    }

    /// Set the quantity of the line identified by `key`.
    ///
    /// A quantity below 1 removes the line. Larger quantities are clamped to
    /// the cart's maximum, if it has one. Unknown keys are ignored.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) {
        if quantity < 1 {
            self.remove(key);
            return;
        }

        let Some(index) = self.position(key) else {
            return;
        };

        let mut quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(max) = self.max_line_quantity {
            quantity = quantity.min(max.max(1));
        }

        self.lines.update(|lines| {
            if let Some(line) = lines.get_mut(index) {
                line.quantity = quantity;
            }
        });

        tracing::debug!(id = %key.id, quantity, "Updated cart quantity");
    }

    /// Change the quantity of the line identified by `key` by `delta`.
    ///
    /// Behaves like [`Cart::update_quantity`] with the resulting quantity, so
    /// stepping below 1 removes the line.
    pub fn adjust_quantity(&mut self, key: &LineKey, delta: i64) {
        if let Some(line) = self.get(key) {
            let target = i64::from(line.quantity).saturating_add(delta);
            self.update_quantity(key, target);
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!(key = self.lines.key(), "Cleared cart");
    }

    #[must_use]
    pub fn get(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.matches(key))
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.lines.items()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price × quantity` over all lines.
    #[must_use]
    pub fn total_amount(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |acc, line| acc.saturating_add(line.quantity))
    }

    #[must_use]
    pub const fn max_line_quantity(&self) -> Option<u32> {
        self.max_line_quantity
    }

    /// Discard in-memory state and hydrate again from storage.
    pub fn reload(&mut self) {
        self.lines.reload();
        self.lines.retain(|line| line.quantity >= 1);
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.lines.iter().position(|line| line.matches(key))
    }
}
