//! Deck construction.
//!
//! Takes the first `pair_count` items, makes two cards per item sharing a
//! `PairId`, then shuffles the whole deck.

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::{Card, CardId, PairId};
use super::item::PlayableItem;
use crate::core::{GameRng, MatchError, Result};

/// Build a shuffled deck of `2 * pair_count` cards.
///
/// Card ids are `0..2*pair_count` in pre-shuffle order; item `i` yields
/// cards `2i` and `2i + 1` with `PairId(i)`.
pub fn build_deck(items: &[PlayableItem], pair_count: usize, rng: &mut GameRng) -> Result<Vector<Card>> {
    if items.len() < pair_count {
        return Err(MatchError::InsufficientContent {
            required: pair_count,
            available: items.len(),
        });
    }

    let mut cards = Vec::with_capacity(pair_count * 2);
    for (index, item) in items.iter().take(pair_count).enumerate() {
        let pair_id = PairId::new(index as u32);
        for copy in 0..2 {
            let id = CardId::new((index * 2 + copy) as u32);
            cards.push(Card::new(id, pair_id, item.content.clone()));
        }
    }

    rng.shuffle(&mut cards);
    Ok(cards.into_iter().collect())
}

/// Check that every pair id appears exactly twice and ids are unique.
#[must_use]
pub fn is_well_formed(cards: &Vector<Card>) -> bool {
    let mut pairs: FxHashMap<PairId, u32> = FxHashMap::default();
    let mut ids: FxHashMap<CardId, ()> = FxHashMap::default();

    for card in cards {
        if ids.insert(card.id, ()).is_some() {
            return false;
        }
        *pairs.entry(card.pair_id).or_insert(0) += 1;
    }

    pairs.values().all(|&count| count == 2)
}
