//! Catalog item data structures.

use serde::{Deserialize, Serialize};

/// A single product record scraped from a catalog page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Canonical URL of the item's own page
    pub url: String,

    /// URL of the item's image
    pub image: String,

    /// Display name
    pub name: String,

    /// Raw price text as shown on the page (not parsed)
    pub price: String,
}

/// Wire shape for the aggregated result: `{ "product": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(rename = "product")]
    pub products: Vec<Item>,
}

/// Merge two item collections, deduplicating by item name.
///
/// Returns all of `base`, then every item from `addition` whose name has
/// not appeared yet, preserving the original order of both inputs.
/// First occurrence wins on a name collision.
pub fn merge_unique(base: Vec<Item>, addition: Vec<Item>) -> Vec<Item> {
    let mut merged = base;
    for item in addition {
        if !merged.iter().any(|existing| existing.name == item.name) {
            merged.push(item);
        }
    }
    merged
}
