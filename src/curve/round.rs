//! Round configuration values produced by the difficulty curve.

use serde::{Deserialize, Serialize};

/// How pairs are laid out on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    /// Similar items kept apart; easier to tell pairs apart.
    Grouped,
    /// Visually similar items mixed together.
    Scattered,
}

/// Difficulty label, ordered from easiest to hardest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DifficultyTier {
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
    Master,
    Legendary,
}

impl DifficultyTier {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "Beginner",
            DifficultyTier::Easy => "Easy",
            DifficultyTier::Medium => "Medium",
            DifficultyTier::Hard => "Hard",
            DifficultyTier::Expert => "Expert",
            DifficultyTier::Master => "Master",
            DifficultyTier::Legendary => "Legendary",
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully specified round, created once per round and never mutated.
///
/// `grid_rows * grid_cols == 2 * pair_count` always holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub level: u32,
    pub tier: DifficultyTier,
    pub pair_count: u32,
    pub grid_rows: u32,
    pub grid_cols: u32,
    pub time_limit_seconds: u32,
    /// How alike items on the board may look, in `[0, 1]`.
    pub similarity_threshold: f64,
    pub layout: LayoutKind,
    /// Rough chance an average player clears the round.
    pub win_probability: f64,
}

impl RoundConfig {
    /// Total cards on the board.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.grid_rows * self.grid_cols
    }

    /// Board shape in the form the session engine takes.
    #[must_use]
    pub fn grid(&self) -> crate::session::GridSize {
        crate::session::GridSize::new(self.grid_rows, self.grid_cols)
    }
}
