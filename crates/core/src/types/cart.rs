//! Cart line types.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// Identity of a cart line: the same product in another size or color is a
/// separate line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub id: ProductId,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl LineKey {
    /// Key for a product without size or color options.
    #[must_use]
    pub fn product(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            size: None,
            color: None,
        }
    }

    /// Key for a product variant.
    #[must_use]
    pub fn variant(
        id: impl Into<ProductId>,
        size: Option<impl Into<String>>,
        color: Option<impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            size: size.map(Into::into),
            color: color.map(Into::into),
        }
    }
}

/// A line in the cart.
///
/// `quantity` is at least 1 for every line held by a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLine {
    /// Whether this line is identified by `key`.
    #[must_use]
    pub fn matches(&self, key: &LineKey) -> bool {
        self.id == key.id && self.size == key.size && self.color == key.color
    }

    /// The key identifying this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            id: self.id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// `price × quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// An item being added to the cart.
///
/// `quantity` defaults to 1 when absent; non-positive values are treated as 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewCartLine {
    /// Start a new item with quantity 1 and no options.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity: None,
            size: None,
            color: None,
            image: None,
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The key this item will be merged under.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            id: self.id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Requested quantity, normalized to a positive count.
    #[must_use]
    pub fn normalized_quantity(&self) -> u32 {
        match self.quantity {
            Some(q) if q >= 1 => u32::try_from(q).unwrap_or(u32::MAX),
            _ => 1,
        }
    }

    /// Convert into a cart line holding the normalized quantity.
    #[must_use]
    pub fn into_line(self) -> CartLine {
        let quantity = self.normalized_quantity();
        CartLine {
            id: self.id,
            name: self.name,
            price: self.price,
            quantity,
            size: self.size,
            color: self.color,
            image: self.image,
        }
    }
}
