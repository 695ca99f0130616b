//! Reward points and unlock verdicts for finished rounds.
//!
//! ```
//! use memory_match::rewards::RewardCalculator;
//!
//! let rewards = RewardCalculator::new();
//! // floor(500 * 1.5 + 2 * 60 + 100 * 0.8)
//! assert_eq!(rewards.reward_points(2, 500, 60, 0.8), 950);
//! ```

use serde::{Deserialize, Serialize};

use crate::curve::DifficultyCurve;

/// Outcome of scoring a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReward {
    pub points: u64,
    pub unlocks_next_level: bool,
}

/// Pure reward functions on top of the difficulty curve.
#[derive(Clone, Copy, Debug, Default)]
pub struct RewardCalculator {
    curve: DifficultyCurve,
}

impl RewardCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_curve(DifficultyCurve::new())
    }

    #[must_use]
    pub fn with_curve(curve: DifficultyCurve) -> Self {
        Self { curve }
    }

    /// `floor(score * multiplier(level) + 2 * time_remaining + 100 * accuracy)`.
    ///
    /// Accuracy is clamped to `[0, 1]`, so the result is never negative.
    #[must_use]
    pub fn reward_points(&self, level: u32, score: u64, time_remaining: u32, accuracy: f64) -> u64 {
        let accuracy = if accuracy.is_nan() { 0.0 } else { accuracy.clamp(0.0, 1.0) };
        let raw = score as f64 * self.curve.score_multiplier(level)
            + 2.0 * f64::from(time_remaining)
            + 100.0 * accuracy;
        raw.floor() as u64
    }

    /// Points plus the unlock verdict for the same inputs.
    #[must_use]
    pub fn evaluate(&self, level: u32, score: u64, time_remaining: u32, accuracy: f64) -> RoundReward {
        RoundReward {
            points: self.reward_points(level, score, time_remaining, accuracy),
            unlocks_next_level: self.curve.unlock_eligible(level, score, time_remaining, accuracy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        let rewards = RewardCalculator::new();
        assert_eq!(rewards.reward_points(2, 500, 60, 0.8), 950);
    }

    #[test]
    fn test_zero_inputs() {
        let rewards = RewardCalculator::new();
        assert_eq!(rewards.reward_points(1, 0, 0, 0.0), 0);
    }

    #[test]
    fn test_floor() {
        let rewards = RewardCalculator::new();
        // 101 * 1.5 = 151.5 -> 151
        assert_eq!(rewards.reward_points(2, 101, 0, 0.0), 151);
    }

    #[test]
    fn test_accuracy_clamped() {
        let rewards = RewardCalculator::new();
        assert_eq!(rewards.reward_points(1, 0, 0, 1.7), 100);
        assert_eq!(rewards.reward_points(1, 0, 0, -0.3), 0);
        assert_eq!(rewards.reward_points(1, 0, 0, f64::NAN), 0);
    }

    #[test]
    fn test_evaluate() {
        let rewards = RewardCalculator::new();
        let reward = rewards.evaluate(1, 800, 120, 1.0);
        assert_eq!(reward.points, 800 + 240 + 100);
        assert!(reward.unlocks_next_level);

        let reward = rewards.evaluate(1, 50, 120, 1.0);
        assert!(!reward.unlocks_next_level);
    }
}
