//! Core types for Lookbook.
//!
//! This module provides type-safe wrappers for common storefront concepts.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod order;
pub mod price;
pub mod status;

pub use cart::{CartLine, LineKey, NewCartLine};
pub use catalog::CatalogItem;
pub use id::*;
pub use order::{Order, ShippingInfo, ShippingInfoError};
pub use price::{CurrencyCode, Price};
pub use status::OrderStatus;
