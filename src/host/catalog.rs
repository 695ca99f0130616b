//! Read-only source of playable items.

use serde::{Deserialize, Serialize};

use crate::adapt::PlayerCategory;
use crate::cards::PlayableItem;

/// What the planner asks the catalog for, once per round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Item category (animals, flags, ...). `None` means any.
    pub category: Option<String>,
    pub player_category: PlayerCategory,
    pub level: u32,
    /// How alike the returned items may look, in `[0, 1]`.
    pub similarity_threshold: f64,
    /// Items needed; one per pair.
    pub limit: usize,
}

/// Supplies items for a round.
///
/// Returning fewer than `query.limit` items is allowed; engine
/// construction then fails with `InsufficientContent`.
pub trait ItemCatalog {
    fn items(&self, query: &CatalogQuery) -> Vec<PlayableItem>;
}

/// Fixed in-memory catalog, filtered by category only.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    items: Vec<PlayableItem>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(items: Vec<PlayableItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for StaticCatalog {
    fn items(&self, query: &CatalogQuery) -> Vec<PlayableItem> {
        self.items
            .iter()
            .filter(|item| match (&query.category, &item.category) {
                (None, _) => true,
                (Some(wanted), Some(have)) => wanted == have,
                (Some(_), None) => false,
            })
            .take(query.limit)
            .cloned()
            .collect()
    }
}
