//! Lookbook Core - Shared types library.
//!
//! This crate provides the types shared by every Lookbook component:
//! - `storefront` - Persistent cart, favorites and orders, catalog filtering,
//!   and grid virtualization for the themed storefront demos
//! - `cli` - Command-line tool for inspecting and mutating a store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, order statuses, cart lines, orders and
//!   catalog items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
