//! Cart commands.

use lookbook_core::{LineKey, NewCartLine, Price};
use lookbook_storefront::Store;
use rust_decimal::Decimal;

use super::{CURRENCY, format_lines};

/// Item details for `cart add`.
#[derive(Debug, Clone)]
pub struct AddItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: Option<i64>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub image: Option<String>,
}

impl AddItem {
    fn into_new_line(self) -> NewCartLine {
        let mut line = NewCartLine::new(self.id, self.name, Price::new(self.price));
        if let Some(quantity) = self.quantity {
            line = line.with_quantity(quantity);
        }
        if let Some(size) = self.size {
            line = line.with_size(size);
        }
        if let Some(color) = self.color {
            line = line.with_color(color);
        }
        if let Some(image) = self.image {
            line = line.with_image(image);
        }
        line
    }
}

/// Build the key of a cart line from CLI arguments.
pub fn key(id: String, size: Option<String>, color: Option<String>) -> LineKey {
    LineKey::variant(id, size, color)
}

pub fn add(store: &mut Store, item: AddItem) -> String {
    let line = item.into_new_line();
    let key = line.key();
    store.cart_mut().add(line);
    match store.cart().get(&key) {
        Some(line) => format!("Added to cart: {} x {}", line.quantity, line.name),
        None => "Added to cart".to_string(),
    }
}

pub fn remove(store: &mut Store, key: &LineKey) -> String {
    if store.cart_mut().remove(key) {
        format!("Removed {} from cart", key.id)
    } else {
        format!("No cart line for {}", key.id)
    }
}

pub fn set(store: &mut Store, key: &LineKey, quantity: i64) -> String {
    store.cart_mut().update_quantity(key, quantity);
    describe_line(store, key)
}

pub fn adjust(store: &mut Store, key: &LineKey, delta: i64) -> String {
    store.cart_mut().adjust_quantity(key, delta);
    describe_line(store, key)
}

pub fn clear(store: &mut Store) -> String {
    store.cart_mut().clear();
    "Cart cleared".to_string()
}

pub fn show(store: &Store) -> String {
    let cart = store.cart();
    if cart.is_empty() {
        return format!("Cart ({}) is empty", store.namespace());
    }
    format!(
        "Cart ({}):\n{}Items: {}\nTotal: {}",
        store.namespace(),
        format_lines(cart.lines()),
        cart.total_items(),
        cart.total_amount().display(CURRENCY),
    )
}

fn describe_line(store: &Store, key: &LineKey) -> String {
    store.cart().get(key).map_or_else(
        || format!("{} is not in the cart", key.id),
        |line| format!("{}: quantity {}", line.name, line.quantity),
    )
}
