//! Canonical catalog item.
//!
//! Every themed store shares this record. Store-specific extras (brand,
//! technology, size guide, ...) live in the open `attributes` map instead of
//! per-store product types.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Price, ProductId};

/// A product in a store's in-memory catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl CatalogItem {
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
            category: category.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Text of a named field for search purposes.
    ///
    /// Strings are returned as-is and numbers (including `price`) as their
    /// canonical string form. Booleans, nulls, arrays, objects and unknown
    /// fields yield `None` and never match a search.
    #[must_use]
    pub fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "id" => Some(Cow::Borrowed(self.id.as_str())),
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "category" => Some(Cow::Borrowed(self.category.as_str())),
            "image" => self.image.as_deref().map(Cow::Borrowed),
            "price" => Some(Cow::Owned(self.price.amount().to_string())),
            other => match self.attributes.get(other)? {
                Value::String(s) => Some(Cow::Borrowed(s.as_str())),
                Value::Number(n) => Some(Cow::Owned(n.to_string())),
                _ => None,
            },
        }
    }
}
