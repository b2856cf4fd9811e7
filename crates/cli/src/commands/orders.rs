//! Checkout and order history commands.

use lookbook_core::{OrderId, ShippingInfo};
use lookbook_storefront::{Error, Result, Store};

use super::{CURRENCY, format_lines};

/// Place an order for the current cart.
///
/// Shipping details are optional, but when given both must be non-blank.
///
/// # Errors
///
/// Returns an error if the shipping details are blank.
pub fn checkout(store: &mut Store, address: Option<&str>, phone: Option<&str>) -> Result<String> {
    let shipping_info = match (address, phone) {
        (Some(address), Some(phone)) => Some(ShippingInfo::parse(address, phone)?),
        _ => None,
    };

    Ok(store.checkout(shipping_info).map_or_else(
        || "Cart is empty, nothing to order".to_string(),
        |order| {
            format!(
                "Order {} placed: {} items, {}",
                order.id,
                order.item_count(),
                order.total.display(CURRENCY),
            )
        },
    ))
}

pub fn list(store: &Store) -> String {
    let orders = store.orders().all();
    if orders.is_empty() {
        return "No orders".to_string();
    }
    orders
        .iter()
        .map(|order| {
            format!(
                "{}  {}  {:<10} {}",
                order.id,
                order.created_at.format("%Y-%m-%d %H:%M"),
                order.status.label(),
                order.total.display(CURRENCY),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Show one order as pretty JSON.
///
/// # Errors
///
/// Returns `Error::NotFound` if no order has this id.
pub fn show(store: &Store, id: &str) -> Result<String> {
    let order = store
        .orders()
        .get(&OrderId::from(id))
        .ok_or_else(|| Error::NotFound(format!("order {id}")))?;

    match serde_json::to_string_pretty(order) {
        Ok(json) => Ok(json),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize order, falling back to summary");
            Ok(format!("Order {}:\n{}", order.id, format_lines(&order.items)))
        }
    }
}
