//! Seeded shuffling.
//!
//! Every deck order comes from a `GameRng`. With a fixed seed a session's
//! deck, and therefore its whole replay, is reproducible; without one the
//! engine seeds from entropy.
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut first: Vec<u32> = (0..16).collect();
//! let mut second = first.clone();
//! GameRng::new(7).shuffle(&mut first);
//! GameRng::new(7).shuffle(&mut second);
//! assert_eq!(first, second);
//! ```

use std::hash::{Hash, Hasher};
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream plus the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Fresh seed from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a sub-stream keyed by `label`.
    ///
    /// Depends only on this stream's seed and the label, never on how much
    /// of this stream has been consumed.
    #[must_use]
    pub fn for_context(&self, label: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        label.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn gen_range(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform in-place permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Checkpoint this stream.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a checkpointed stream exactly where it left off.
    #[must_use]
    pub fn from_state(checkpoint: &GameRngState) -> Self {
        let mut rng = Self::new(checkpoint.seed);
        rng.inner.set_word_pos(checkpoint.word_pos);
        rng
    }
}

/// Seed plus ChaCha word position. Restoring is O(1) however far the
/// stream has advanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
