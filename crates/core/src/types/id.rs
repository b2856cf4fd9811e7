//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! IDs are always strings. Demo catalogs mix numeric and string product ids,
//! so numeric values are coerced to their decimal form on construction and a
//! product `7` and a product `"7"` key the same cart line and favorite.

use chrono::{DateTime, Utc};

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` with `#[serde(transparent)]`
/// - `Deserialize` from either a JSON string or a JSON integer
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, `From<i64>`, `From<u64>` and `From<u32>`
///
/// # Example
///
/// ```rust
/// # use lookbook_core::define_id;
/// define_id!(SkuId);
/// define_id!(BundleId);
///
/// let sku = SkuId::from(42_u32);
/// assert_eq!(sku.as_str(), "42");
///
/// // These are different types, so this won't compile:
/// // let _: SkuId = BundleId::new("42");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id.to_string())
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                #[derive(::serde::Deserialize)]
                #[serde(untagged)]
                enum Raw {
                    Text(String),
                    Signed(i64),
                    Unsigned(u64),
                }

                Ok(match Raw::deserialize(deserializer)? {
                    Raw::Text(id) => Self(id),
                    Raw::Signed(id) => Self(id.to_string()),
                    Raw::Unsigned(id) => Self(id.to_string()),
                })
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(OrderId);

/// Default prefix for generated order ids.
pub const DEFAULT_ORDER_PREFIX: &str = "ORD";

impl OrderId {
    /// Generate an order id of the form `<prefix>-<base36 millisecond timestamp>`.
    ///
    /// Uniqueness is best-effort: two orders created in the same millisecond
    /// share an id. That is acceptable for a single-user demo store.
    ///
    /// ```rust
    /// # use lookbook_core::OrderId;
    /// # use chrono::{TimeZone, Utc};
    /// let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    /// assert_eq!(OrderId::generate("ORD", at).as_str(), "ORD-LOYW3V28");
    /// ```
    #[must_use]
    pub fn generate(prefix: &str, at: DateTime<Utc>) -> Self {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        Self(format!("{prefix}-{}", to_base36(millis).to_uppercase()))
    }
}

/// Render an unsigned integer in base 36 (digits then lowercase letters).
#[must_use]
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        let index = usize::try_from(value % 36).unwrap_or(0);
        let digit = DIGITS.get(index).copied().unwrap_or(b'0');
        out.push(digit);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_numeric_ids_coerce_to_strings() {
        assert_eq!(ProductId::from(7_i64), ProductId::from("7"));
        assert_eq!(ProductId::from(7_u32).as_str(), "7");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ProductId::new("hoodie-01");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"hoodie-01\"");
        let back: ProductId = serde_json::from_str("\"hoodie-01\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_deserializes_from_number() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_295), "zz");
    }

    #[test]
    fn test_generate_order_id() {
        let at = Utc.timestamp_millis_opt(36).unwrap();
        assert_eq!(OrderId::generate("SNK", at).as_str(), "SNK-10");
    }

    #[test]
    fn test_generate_order_id_differs_across_time() {
        let a = OrderId::generate("ORD", Utc.timestamp_millis_opt(1_000).unwrap());
        let b = OrderId::generate("ORD", Utc.timestamp_millis_opt(1_001).unwrap());
        assert_ne!(a, b);
    }
}
