//! Order types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CartLine, OrderId, OrderStatus, Price};

/// Errors that can occur when building [`ShippingInfo`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShippingInfoError {
    /// The address is empty.
    #[error("shipping address cannot be empty")]
    EmptyAddress,
    /// The phone number is empty.
    #[error("phone number cannot be empty")]
    EmptyPhone,
}

/// Delivery details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub address: String,
    pub phone: String,
}

impl ShippingInfo {
    /// Build shipping info from checkout form input, trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the address or phone is blank.
    pub fn parse(address: &str, phone: &str) -> Result<Self, ShippingInfoError> {
        let address = address.trim();
        let phone = phone.trim();
        if address.is_empty() {
            return Err(ShippingInfoError::EmptyAddress);
        }
        if phone.is_empty() {
            return Err(ShippingInfoError::EmptyPhone);
        }
        Ok(Self {
            address: address.to_owned(),
            phone: phone.to_owned(),
        })
    }
}

/// A placed order.
///
/// `items` and `total` are snapshots taken at creation time and are never
/// recomputed from the live cart or catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub total: Price,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_info: Option<ShippingInfo>,
}

impl Order {
    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_info_trims() {
        let info = ShippingInfo::parse("  12 Main St ", " +1 555 0100 ").unwrap();
        assert_eq!(info.address, "12 Main St");
        assert_eq!(info.phone, "+1 555 0100");
    }

    #[test]
    fn test_shipping_info_rejects_blank() {
        assert_eq!(
            ShippingInfo::parse("   ", "123"),
            Err(ShippingInfoError::EmptyAddress)
        );
        assert_eq!(
            ShippingInfo::parse("12 Main St", ""),
            Err(ShippingInfoError::EmptyPhone)
        );
    }

    #[test]
    fn test_order_deserializes_without_status() {
        let json = r#"{
            "id": "ORD-1",
            "items": [],
            "total": "0",
            "createdAt": "2026-01-01T00:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.shipping_info.is_none());
        assert_eq!(order.item_count(), 0);
    }
}
