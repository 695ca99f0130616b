//! Difficulty curve and reward tests.

use memory_match::curve::{DifficultyCurve, DifficultyTier, LayoutKind, MAX_SIDE, MIN_SIDE};
use memory_match::rewards::RewardCalculator;
use proptest::prelude::*;

#[test]
fn test_board_always_exactly_full() {
    let curve = DifficultyCurve::new();
    for level in 1..=15 {
        let config = curve.config_for(level);
        assert_eq!(
            config.pair_count * 2,
            config.grid_rows * config.grid_cols,
            "level {level}"
        );
        assert!(config.grid_rows <= config.grid_cols);
        assert!((MIN_SIDE..=MAX_SIDE).contains(&config.grid_rows));
        assert!((MIN_SIDE..=MAX_SIDE).contains(&config.grid_cols));
    }
}

#[test]
fn test_tuned_levels_get_harder() {
    let curve = DifficultyCurve::new();
    for level in 1..5 {
        let easier = curve.config_for(level);
        let harder = curve.config_for(level + 1);
        assert!(harder.time_limit_seconds < easier.time_limit_seconds);
        assert!(harder.pair_count > easier.pair_count);
        assert!(harder.similarity_threshold > easier.similarity_threshold);
        assert!(harder.win_probability < easier.win_probability);
    }
}

#[test]
fn test_extrapolated_and_capped_levels() {
    let curve = DifficultyCurve::new();

    let six = curve.config_for(6);
    assert_eq!(six.tier, DifficultyTier::Master);
    assert_eq!(six.time_limit_seconds, 70);
    assert!((six.similarity_threshold - 0.875).abs() < 1e-9);

    let ten = curve.config_for(10);
    assert_eq!((ten.grid_rows, ten.grid_cols), (7, 10));
    assert_eq!(ten.pair_count, 35);
    assert!(ten.similarity_threshold < 0.95);

    for level in [11, 12, 50, u32::MAX] {
        let config = curve.config_for(level);
        assert_eq!(config.tier, DifficultyTier::Legendary);
        assert_eq!(config.pair_count, 40);
        assert_eq!(config.time_limit_seconds, 30);
        assert_eq!(config.layout, LayoutKind::Scattered);
    }
}

#[test]
fn test_level_zero_reads_as_one() {
    let curve = DifficultyCurve::new();
    assert_eq!(curve.config_for(0).pair_count, curve.config_for(1).pair_count);
    assert_eq!(curve.score_multiplier(0), 1.0);
    assert_eq!(curve.label(0), "Beginner");
}

#[test]
fn test_reward_example() {
    let rewards = RewardCalculator::new();
    assert_eq!(rewards.reward_points(2, 500, 60, 0.8), 950);
}

#[test]
fn test_unlock_verdict() {
    let rewards = RewardCalculator::new();

    // Level 1: score >= 100, accuracy >= 0.65, time >= 28% of 180s.
    let reward = rewards.evaluate(1, 400, 90, 1.0);
    assert!(reward.unlocks_next_level);

    assert!(!rewards.evaluate(1, 99, 90, 1.0).unlocks_next_level);
    assert!(!rewards.evaluate(1, 400, 10, 1.0).unlocks_next_level);
    assert!(!rewards.evaluate(1, 400, 90, 0.5).unlocks_next_level);
}

proptest! {
    #[test]
    fn prop_reward_monotone(
        level in 1u32..15,
        score in 0u64..100_000,
        extra_score in 0u64..10_000,
        time in 0u32..300,
        extra_time in 0u32..60,
        accuracy in 0.0f64..=1.0,
        extra_accuracy in 0.0f64..=1.0,
    ) {
        let rewards = RewardCalculator::new();
        let base = rewards.reward_points(level, score, time, accuracy);
        let more_accuracy = (accuracy + extra_accuracy).min(1.0);

        prop_assert!(rewards.reward_points(level, score + extra_score, time, accuracy) >= base);
        prop_assert!(rewards.reward_points(level, score, time + extra_time, accuracy) >= base);
        prop_assert!(rewards.reward_points(level, score, time, more_accuracy) >= base);
    }

    #[test]
    fn prop_grid_identity(level in 0u32..1_000) {
        let config = DifficultyCurve::new().config_for(level);
        prop_assert_eq!(config.pair_count * 2, config.card_count());
    }
}
