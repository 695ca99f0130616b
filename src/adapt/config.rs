//! Tunable thresholds for the performance adapter.

use serde::{Deserialize, Serialize};

use super::record::PlayerCategory;

/// Minimums (and a maximum match time) a history must meet for a tier.
///
/// Every condition must hold; they are not averaged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierThreshold {
    pub level: u32,
    pub min_performance: f64,
    pub min_accuracy: f64,
    pub max_match_time: f64,
}

impl TierThreshold {
    pub const fn new(level: u32, min_performance: f64, min_accuracy: f64, max_match_time: f64) -> Self {
        Self {
            level,
            min_performance,
            min_accuracy,
            max_match_time,
        }
    }

    #[must_use]
    pub fn admits(&self, performance: f64, accuracy: f64, match_time: f64) -> bool {
        performance >= self.min_performance
            && accuracy >= self.min_accuracy
            && match_time <= self.max_match_time
    }
}

/// Per-category seed level and ceiling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimits {
    pub child: u32,
    pub teen: u32,
    pub adult: u32,
}

impl CategoryLimits {
    #[must_use]
    pub fn get(&self, category: PlayerCategory) -> u32 {
        match category {
            PlayerCategory::Child => self.child,
            PlayerCategory::Teen => self.teen,
            PlayerCategory::Adult => self.adult,
        }
    }
}

/// Gates for `tips_for`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TipThresholds {
    /// Tip fires above this average match time (seconds).
    pub slow_match_time: f64,
    /// Tip fires below this accuracy.
    pub low_accuracy: f64,
    /// Tip fires below this combo frequency.
    pub low_combo_frequency: f64,
}

impl Default for TipThresholds {
    fn default() -> Self {
        Self {
            slow_match_time: 5.0,
            low_accuracy: 0.7,
            low_combo_frequency: 0.3,
        }
    }
}

/// Full adapter configuration. `Default` carries the tuned constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Records considered by `recommend_level`.
    pub history_window: usize,

    /// Records per side of the trend comparison.
    pub trend_window: usize,

    /// Performance-point gap separating up/down from stable.
    pub trend_threshold: f64,

    /// Tiers, checked from the first entry down. Anything below all
    /// of them maps to level 1.
    pub tiers: Vec<TierThreshold>,

    /// Level handed out when there is no history.
    pub default_levels: CategoryLimits,

    /// Highest level a category can be recommended.
    pub ceilings: CategoryLimits,

    pub tips: TipThresholds,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            history_window: 10,
            trend_window: 3,
            trend_threshold: 10.0,
            tiers: vec![
                TierThreshold::new(5, 85.0, 0.90, 2.0),
                TierThreshold::new(4, 70.0, 0.80, 3.0),
                TierThreshold::new(3, 55.0, 0.70, 4.5),
                TierThreshold::new(2, 40.0, 0.55, 6.0),
            ],
            default_levels: CategoryLimits { child: 1, teen: 3, adult: 3 },
            ceilings: CategoryLimits { child: 3, teen: 4, adult: 5 },
            tips: TipThresholds::default(),
        }
    }
}

impl AdapterConfig {
    #[must_use]
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    #[must_use]
    pub fn with_trend_threshold(mut self, threshold: f64) -> Self {
        self.trend_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_ceilings(mut self, ceilings: CategoryLimits) -> Self {
        self.ceilings = ceilings;
        self
    }
}
