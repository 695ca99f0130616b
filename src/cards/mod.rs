//! Card system: tiles, playable items, and deck construction.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for one tile, unique within a session
//! - `PairId`: Shared by exactly two tiles
//! - `ContentRef`: Opaque reference to what a tile displays
//! - `Card`: A tile and its face state
//! - `PlayableItem`: Catalog entry that becomes one pair

pub mod card;
pub mod deck;
pub mod item;

pub use card::{Card, CardFace, CardId, ContentRef, PairId};
pub use deck::{build_deck, is_well_formed};
pub use item::PlayableItem;
