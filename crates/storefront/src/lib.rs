//! Lookbook Storefront library.
//!
//! Client-side state for the themed storefront demos: a persistent cart,
//! favorites and order history per store, catalog filtering, and grid
//! virtualization for large product listings.
//!
//! # Architecture
//!
//! - [`storage`] - Pluggable key-value backends (in-memory, on-disk)
//! - [`collection`] - Storage-backed list that every collection builds on
//! - [`cart`], [`favorites`], [`orders`] - Typed collections with aggregates
//! - [`store`] - One namespaced store per themed demo, plus checkout
//! - [`filter`] - Substring and category filtering over a catalog
//! - [`grid`] - Visible-row computation for virtualized product grids
//! - [`notice`] - Auto-dismissing notice banner
//!
//! Mutations update memory first and persist second. Storage failures are
//! logged and never surface to callers.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod grid;
pub mod notice;
pub mod orders;
pub mod storage;
pub mod store;

pub use cart::Cart;
pub use collection::PersistentCollection;
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use favorites::Favorites;
pub use filter::{FilterEngine, Searchable};
pub use grid::{GridFrame, GridLayout, Viewport, VirtualGrid};
pub use notice::Notice;
pub use orders::Orders;
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::{Store, StoreOptions};
