//! Card tiles and their identifiers.
//!
//! A `Card` is one physical tile on the board. Two cards share a `PairId`
//! and the same `ContentRef`; flipping both in one attempt matches them.

use serde::{Deserialize, Serialize};

/// Identifier for one tile, unique within a session.
///
/// Ids are assigned before the shuffle, so they say nothing about a
/// card's board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier shared by exactly two cards in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Opaque reference to a displayable item (image key, asset path, ...).
///
/// The engine never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef(pub String);

impl ContentRef {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Face state of a card.
///
/// `Hidden -> Flipped -> Matched` or back to `Hidden` after a mismatch.
/// `Matched` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    #[default]
    Hidden,
    Flipped,
    Matched,
}

/// One tile on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub pair_id: PairId,
    pub content: ContentRef,
    pub face: CardFace,
}

impl Card {
    /// Create a face-down card.
    pub fn new(id: CardId, pair_id: PairId, content: ContentRef) -> Self {
        Self {
            id,
            pair_id,
            content,
            face: CardFace::Hidden,
        }
    }

    /// Face-up, whether pending or matched.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.face != CardFace::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// Can this card still be turned over?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.face == CardFace::Hidden
    }
}
