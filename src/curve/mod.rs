//! Difficulty curve: level -> round configuration.
//!
//! ## Levels
//!
//! - **1-5**: hand-tuned. Time strictly decreases, pair count and
//!   similarity strictly increase.
//! - **6-10**: linear extrapolation from level 5. Pairs `+3` per level
//!   (capped at 40), time `-5s` per level (floored at 30s), similarity
//!   halves its distance to 0.95 each level.
//! - **11+**: one fixed maximal config.
//!
//! Level 0 is read as level 1, so every function here is total.
//!
//! ## Usage
//!
//! ```
//! use memory_match::curve::DifficultyCurve;
//!
//! let curve = DifficultyCurve::new();
//! let config = curve.config_for(1);
//! assert_eq!(config.pair_count * 2, config.grid_rows * config.grid_cols);
//! assert_eq!(curve.score_multiplier(3), 2.0);
//! ```

mod grid;
mod round;

pub use grid::{grid_shape, MAX_SIDE, MIN_SIDE};
pub use round::{DifficultyTier, LayoutKind, RoundConfig};

/// Highest level with a hand-tuned config.
pub const TUNED_LEVELS: u32 = 5;

/// Highest level that is still extrapolated.
pub const EXTRAPOLATED_CEILING: u32 = 10;

const MAX_PAIRS: u32 = 40;
const MIN_TIME_SECONDS: u32 = 30;
const SIMILARITY_LIMIT: f64 = 0.95;
const MIN_WIN_PROBABILITY: f64 = 0.10;

struct Tuned {
    pairs: u32,
    time: u32,
    similarity: f64,
    win_probability: f64,
    tier: DifficultyTier,
    layout: LayoutKind,
}

const TUNED: [Tuned; TUNED_LEVELS as usize] = [
    Tuned { pairs: 8, time: 180, similarity: 0.30, win_probability: 0.95, tier: DifficultyTier::Beginner, layout: LayoutKind::Grouped },
    Tuned { pairs: 10, time: 150, similarity: 0.45, win_probability: 0.85, tier: DifficultyTier::Easy, layout: LayoutKind::Grouped },
    Tuned { pairs: 12, time: 120, similarity: 0.60, win_probability: 0.70, tier: DifficultyTier::Medium, layout: LayoutKind::Scattered },
    Tuned { pairs: 15, time: 90, similarity: 0.70, win_probability: 0.55, tier: DifficultyTier::Hard, layout: LayoutKind::Scattered },
    Tuned { pairs: 18, time: 75, similarity: 0.80, win_probability: 0.40, tier: DifficultyTier::Expert, layout: LayoutKind::Scattered },
];

/// Pure level -> config mapping plus the level-scaled helpers built on it.
///
/// Stateless; construct one wherever it is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct DifficultyCurve;

impl DifficultyCurve {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolve the round configuration for a level.
    #[must_use]
    pub fn config_for(&self, level: u32) -> RoundConfig {
        let level = level.max(1);

        if level <= TUNED_LEVELS {
            let tuned = &TUNED[(level - 1) as usize];
            return build(
                level,
                tuned.pairs,
                tuned.time,
                tuned.similarity,
                tuned.win_probability,
                tuned.tier,
                tuned.layout,
            );
        }

        if level <= EXTRAPOLATED_CEILING {
            let base = &TUNED[(TUNED_LEVELS - 1) as usize];
            let steps = level - TUNED_LEVELS;
            let pairs = (base.pairs + 3 * steps).min(MAX_PAIRS);
            let time = base.time.saturating_sub(5 * steps).max(MIN_TIME_SECONDS);
            let similarity =
                SIMILARITY_LIMIT - (SIMILARITY_LIMIT - base.similarity) * 0.5f64.powi(steps as i32);
            let win_probability =
                (base.win_probability - 0.05 * steps as f64).max(MIN_WIN_PROBABILITY);
            return build(
                level,
                pairs,
                time,
                similarity,
                win_probability,
                DifficultyTier::Master,
                LayoutKind::Scattered,
            );
        }

        build(
            level,
            MAX_PAIRS,
            MIN_TIME_SECONDS,
            SIMILARITY_LIMIT,
            MIN_WIN_PROBABILITY,
            DifficultyTier::Legendary,
            LayoutKind::Scattered,
        )
    }

    /// `1 + 0.5 * (level - 1)`.
    #[must_use]
    pub fn score_multiplier(&self, level: u32) -> f64 {
        1.0 + 0.5 * (level.max(1) - 1) as f64
    }

    #[must_use]
    pub fn tier(&self, level: u32) -> DifficultyTier {
        self.config_for(level).tier
    }

    #[must_use]
    pub fn label(&self, level: u32) -> &'static str {
        self.tier(level).name()
    }

    #[must_use]
    pub fn motivational_message(&self, level: u32) -> &'static str {
        match self.tier(level) {
            DifficultyTier::Beginner => "Let's warm up! Find the matching pairs.",
            DifficultyTier::Easy => "Nice start! A few more cards this time.",
            DifficultyTier::Medium => "You're getting good at this. Stay focused!",
            DifficultyTier::Hard => "The clock is ticking faster. Trust your memory!",
            DifficultyTier::Expert => "Expert board. Every flip counts!",
            DifficultyTier::Master => "Master level. Only the sharpest memories survive.",
            DifficultyTier::Legendary => "Legendary! This is as hard as it gets.",
        }
    }

    /// Can a finished round at `level` unlock the next one?
    ///
    /// All three level-scaled thresholds must be met:
    /// - score at least `100 * level`
    /// - accuracy at least `max(0.7 - 0.05 * level, 0.5)`
    /// - remaining time fraction at least `max(0.3 - 0.02 * level, 0.1)`
    #[must_use]
    pub fn unlock_eligible(&self, level: u32, score: u64, time_remaining: u32, accuracy: f64) -> bool {
        let level = level.max(1);
        let lf = level as f64;

        let min_score = 100 * u64::from(level);
        let min_accuracy = (0.7 - 0.05 * lf).max(0.5);
        let min_time_efficiency = (0.3 - 0.02 * lf).max(0.1);

        let time_limit = self.config_for(level).time_limit_seconds;
        let time_efficiency = f64::from(time_remaining) / f64::from(time_limit);

        score >= min_score && accuracy >= min_accuracy && time_efficiency >= min_time_efficiency
    }
}

fn build(
    level: u32,
    target_pairs: u32,
    time_limit_seconds: u32,
    similarity_threshold: f64,
    win_probability: f64,
    tier: DifficultyTier,
    layout: LayoutKind,
) -> RoundConfig {
    let (grid_rows, grid_cols) = grid_shape(target_pairs);
    RoundConfig {
        level,
        tier,
        pair_count: grid_rows * grid_cols / 2,
        grid_rows,
        grid_cols,
        time_limit_seconds,
        similarity_threshold,
        layout,
        win_probability,
    }
}
