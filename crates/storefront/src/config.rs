//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LOOKBOOK_DATA_DIR` - Directory for file-backed storage (default: .lookbook)
//! - `LOOKBOOK_STORE` - Store namespace, e.g. fashion, beauty (default: fashion)
//! - `LOOKBOOK_MAX_LINE_QUANTITY` - Cart quantity cap; `0` or `none` disables (default: 10)
//! - `LOOKBOOK_ORDER_PREFIX` - Prefix for generated order ids (default: ORD)
//! - `LOOKBOOK_NOTICE_MS` - Notice banner lifetime in milliseconds (default: 3000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cart::DEFAULT_MAX_LINE_QUANTITY;
use crate::notice::Notice;
use crate::store::StoreOptions;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Lookbook store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding persisted collections
    pub data_dir: PathBuf,
    /// Store namespace; prefixes every storage key
    pub store: String,
    /// Upper bound for cart line quantities (`None` = unbounded)
    pub max_line_quantity: Option<u32>,
    /// Prefix for generated order ids
    pub order_prefix: String,
    /// How long notice banners stay visible
    pub notice_ttl: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".lookbook"),
            store: "fashion".to_string(),
            max_line_quantity: Some(DEFAULT_MAX_LINE_QUANTITY),
            order_prefix: lookbook_core::DEFAULT_ORDER_PREFIX.to_string(),
            notice_ttl: crate::notice::DEFAULT_NOTICE_TTL,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let data_dir = get_optional_env("LOOKBOOK_DATA_DIR")
            .map_or(defaults.data_dir, PathBuf::from);
        let store = get_optional_env("LOOKBOOK_STORE").map_or(Ok(defaults.store), |value| {
            validate_namespace(&value)
                .map(|()| value)
                .map_err(|reason| ConfigError::InvalidEnvVar("LOOKBOOK_STORE".to_string(), reason))
        })?;
        let max_line_quantity = match get_optional_env("LOOKBOOK_MAX_LINE_QUANTITY") {
            Some(value) => parse_max_quantity(&value).map_err(|reason| {
                ConfigError::InvalidEnvVar("LOOKBOOK_MAX_LINE_QUANTITY".to_string(), reason)
            })?,
            None => defaults.max_line_quantity,
        };
        let order_prefix = get_env_or_default("LOOKBOOK_ORDER_PREFIX", &defaults.order_prefix);
        let notice_ttl = get_env_or_default("LOOKBOOK_NOTICE_MS", "3000")
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidEnvVar("LOOKBOOK_NOTICE_MS".to_string(), e.to_string()))?;

        Ok(Self {
            data_dir,
            store,
            max_line_quantity,
            order_prefix,
            notice_ttl,
        })
    }

    /// Per-store policy derived from this configuration.
    #[must_use]
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            max_line_quantity: self.max_line_quantity,
            order_prefix: self.order_prefix.clone(),
        }
    }

    /// A notice banner that stays visible for the configured `notice_ttl`.
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::new(self.notice_ttl)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a quantity cap. `0` and `none` disable the cap.
///
/// # Errors
///
/// Returns a description of the problem if the value is not a number.
pub fn parse_max_quantity(value: &str) -> Result<Option<u32>, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match value.parse::<u32>() {
        Ok(0) => Ok(None),
        Ok(max) => Ok(Some(max)),
        Err(e) => Err(e.to_string()),
    }
}

/// Check that a store namespace can be used as a storage key prefix.
///
/// # Errors
///
/// Returns a description of the problem if the namespace is empty or contains
/// characters other than ASCII letters, digits, `_` and `-`.
pub fn validate_namespace(namespace: &str) -> Result<(), String> {
    if namespace.is_empty() {
        return Err("namespace cannot be empty".to_string());
    }
    if let Some(c) = namespace
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-')))
    {
        return Err(format!("namespace contains invalid character '{c}'"));
    }
    Ok(())
}
