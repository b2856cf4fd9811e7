//! Integration tests for Lookbook.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lookbook-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_persistence` - Stores reopened from disk, namespaces, corrupt data
//! - `checkout` - Cart to order flows
//! - `catalog_browsing` - Filtering feeding the virtualized grid

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::sync::Arc;

use lookbook_storefront::{FileStorage, Store, StoreOptions, StorageError};

/// Open `namespace` on file storage rooted at `dir` with default options.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be created.
pub fn open_store(dir: &Path, namespace: &str) -> Result<Store, StorageError> {
    let storage = FileStorage::open(dir)?;
    Ok(Store::open(Arc::new(storage), namespace, StoreOptions::default()))
}
