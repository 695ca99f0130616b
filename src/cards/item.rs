//! Playable items supplied by the catalog.

use serde::{Deserialize, Serialize};

use super::card::ContentRef;

/// An item that can be put on the board as a pair of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayableItem {
    /// What the two cards display.
    pub content: ContentRef,

    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Catalog category (animals, flags, ...).
    #[serde(default)]
    pub category: Option<String>,
}

impl PlayableItem {
    pub fn new(content: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            content: ContentRef::new(content),
            name: name.into(),
            category: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
