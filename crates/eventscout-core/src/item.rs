//! Normalized event record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Every field an [`Item`] can be built from.
///
/// `None` means the source did not carry the field; it is never replaced by
/// an empty string or zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFields {
    pub item_id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub rating: Option<f64>,
    pub distance: Option<f64>,
    pub categories: BTreeSet<String>,
    pub image_url: Option<String>,
    pub address: Option<String>,
}

/// One discovered event, immutable once built.
///
/// Serializes to a flat object; absent fields are omitted rather than
/// written as `null`, and `categories` is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(default)]
    categories: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl Item {
    #[must_use]
    pub fn new(fields: ItemFields) -> Self {
        let ItemFields {
            item_id,
            name,
            url,
            rating,
            distance,
            categories,
            image_url,
            address,
        } = fields;
        Self {
            item_id,
            name,
            url,
            rating,
            distance,
            categories,
            image_url,
            address,
        }
    }

    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    #[must_use]
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    #[must_use]
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

impl From<ItemFields> for Item {
    fn from(fields: ItemFields) -> Self {
        Self::new(fields)
    }
}
