//! Session snapshot value.
//!
//! `SessionState` is immutable from the caller's side: the engine replaces
//! it wholesale on every accepted event, and callers only ever get clones.
//! Cards live in an `im::Vector`, so those clones are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::{MatchError, Result};
use crate::curve::MAX_SIDE;

/// Largest board the engine accepts.
pub const MAX_CARDS: u32 = MAX_SIDE * MAX_SIDE;

/// Board shape handed to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl GridSize {
    #[must_use]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn card_count(self) -> u32 {
        self.rows.saturating_mul(self.cols)
    }

    #[must_use]
    pub const fn pair_count(self) -> u32 {
        self.card_count() / 2
    }

    /// Non-empty, even, and at most `MAX_CARDS` cells.
    pub fn validate(self) -> Result<Self> {
        let count = self.rows.checked_mul(self.cols).unwrap_or(u32::MAX);
        if count == 0 || count % 2 != 0 || count > MAX_CARDS {
            return Err(MatchError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self)
    }
}

/// A mismatched pair waiting for its delayed unflip.
///
/// While one exists the flip lock is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMismatch {
    pub first: CardId,
    pub second: CardId,
    /// Only an unflip carrying this generation may resolve it.
    pub generation: u64,
}

/// Full snapshot of a running session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub cards: Vector<Card>,
    pub level: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    pub seconds_remaining: u32,
    pub seconds_elapsed: u32,
    pub score: u64,
    pub combo: u32,
    pub max_combo: u32,
    pub is_paused: bool,
    pub is_over: bool,
    pub is_won: bool,
    pub timer_started: bool,

    pub(crate) first_pick: Option<CardId>,
    pub(crate) pending_mismatch: Option<PendingMismatch>,
    /// Seconds between consecutive matches (first one from timer start).
    pub(crate) match_times: Vector<f64>,
    /// Virtual clock reading the next match time is measured from.
    pub(crate) match_anchor_ms: u64,
    pub(crate) unflip_generation: u64,
}

impl SessionState {
    /// Fresh state over an already-shuffled deck.
    pub fn new(cards: Vector<Card>, level: u32, time_limit_seconds: u32) -> Self {
        let total_pairs = (cards.len() / 2) as u32;
        Self {
            cards,
            level,
            matched_pairs: 0,
            total_pairs,
            seconds_remaining: time_limit_seconds,
            seconds_elapsed: 0,
            score: 0,
            combo: 0,
            max_combo: 0,
            is_paused: false,
            is_over: false,
            is_won: false,
            timer_started: false,
            first_pick: None,
            pending_mismatch: None,
            match_times: Vector::new(),
            match_anchor_ms: 0,
            unflip_generation: 0,
        }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub(crate) fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// False while a mismatched pair is waiting to flip back.
    #[must_use]
    pub fn can_flip(&self) -> bool {
        self.pending_mismatch.is_none()
    }

    /// First card of the current attempt, if one is face-up.
    #[must_use]
    pub fn first_pick(&self) -> Option<CardId> {
        self.first_pick
    }

    #[must_use]
    pub fn pending_mismatch(&self) -> Option<PendingMismatch> {
        self.pending_mismatch
    }

    #[must_use]
    pub fn match_times(&self) -> &Vector<f64> {
        &self.match_times
    }

    /// Ticks only run once started and while neither paused nor over.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.timer_started && !self.is_paused && !self.is_over
    }

    /// Cards that can still be flipped.
    pub fn hidden_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_hidden())
    }
}
