//! Catalog records and the partial-update merge.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::field::Field;

/// Tax applied when an item does not specify one.
pub const DEFAULT_TAX: f64 = 10.5;

const fn default_tax() -> f64 {
    DEFAULT_TAX
}

/// A product image with a validated URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: Url,
    pub name: String,
}

/// A catalog item.
///
/// `price` is required; everything else either defaults or is optional, so a
/// minimal `{"name": ..., "price": ...}` body is a complete item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "default_tax")]
    pub tax: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<Image>>,
}

impl Item {
    /// Price with tax applied.
    #[must_use]
    pub fn price_with_tax(&self) -> f64 {
        self.price + self.tax
    }
}

/// A bundle of items sold together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub items: Vec<Item>,
}

/// A partial update to an [`Item`].
///
/// Every field is wrapped in [`Field`] so the merge can tell a key the caller
/// omitted from a key the caller supplied - even when the supplied value
/// equals the default. `{"tax": 10.5}` updates `tax`; `{}` updates nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<Option<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub price: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub tax: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub image: Field<Option<Vec<Image>>>,
}

impl ItemPatch {
    /// Returns `true` if no field was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.description.is_unset()
            && self.price.is_unset()
            && self.tax.is_unset()
            && self.tags.is_unset()
            && self.image.is_unset()
    }

    /// Overlay this patch onto a stored item.
    ///
    /// Supplied fields replace the stored value; omitted fields keep it.
    #[must_use]
    pub fn apply_to(&self, current: &Item) -> Item {
        Item {
            name: self.name.cloned_or(&current.name),
            description: self.description.cloned_or(&current.description),
            price: self.price.unwrap_or(current.price),
            tax: self.tax.unwrap_or(current.tax),
            tags: self.tags.cloned_or(&current.tags),
            image: self.image.cloned_or(&current.image),
        }
    }
}
