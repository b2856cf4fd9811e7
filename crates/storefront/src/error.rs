//! Unified error type for fallible Lookbook operations.
//!
//! Collection mutations never fail; these errors come from opening storage,
//! loading configuration, reading catalogs and validating checkout input.

use lookbook_core::ShippingInfoError;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront library.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog file could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout shipping details are invalid.
    #[error("Invalid shipping info: {0}")]
    Shipping(#[from] ShippingInfoError),

    /// Requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
