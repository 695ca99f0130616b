//! Performance adapter tests.
//!
//! Covers level recommendation bounds, trend analysis, tips, and the
//! advisor fallback path.

use memory_match::adapt::{
    AdapterConfig, AdvisorError, LevelAdvisor, PerformanceAdapter, PerformanceRecord,
    PlayerCategory, RecommendationSource, Trend, ACCURACY_TIP, ENCOURAGEMENT, MAX_LEVEL, MIN_LEVEL,
};
use memory_match::core::Settings;
use proptest::prelude::*;

fn record(level: u32, performance: f64) -> PerformanceRecord {
    PerformanceRecord::new(level, 2.5, 0.85, 0.6, performance)
}

#[test]
fn test_strong_history_reaches_level_five() {
    let adapter = PerformanceAdapter::default();
    let history = vec![PerformanceRecord::new(4, 1.5, 0.95, 0.9, 95.0); 10];
    assert_eq!(adapter.recommend_level(&history, PlayerCategory::Adult), 5);
}

#[test]
fn test_only_window_counts() {
    let adapter = PerformanceAdapter::new(AdapterConfig::default().with_history_window(2));

    // Two recent strong rounds, then a long tail of weak ones.
    let mut history = vec![PerformanceRecord::new(5, 1.0, 1.0, 1.0, 99.0); 2];
    history.extend(vec![PerformanceRecord::new(1, 20.0, 0.1, 0.0, 5.0); 8]);

    assert_eq!(adapter.recommend_level(&history, PlayerCategory::Adult), 5);
}

#[test]
fn test_trend_classification() {
    let adapter = PerformanceAdapter::default();

    let up: Vec<_> = [80.0, 82.0, 84.0, 50.0, 52.0, 54.0].iter().map(|&p| record(3, p)).collect();
    assert_eq!(adapter.analyze_trend(&up).trend, Trend::Up);

    let down: Vec<_> = [40.0, 42.0, 44.0, 70.0, 72.0, 74.0].iter().map(|&p| record(3, p)).collect();
    assert_eq!(adapter.analyze_trend(&down).trend, Trend::Down);

    let flat: Vec<_> = [60.0, 61.0, 62.0, 58.0, 59.0, 60.0].iter().map(|&p| record(3, p)).collect();
    assert_eq!(adapter.analyze_trend(&flat).trend, Trend::Stable);

    let short = adapter.analyze_trend(&up[..2]);
    assert_eq!(short.trend, Trend::Stable);
    assert!(short.previous_average.is_none());
}

#[test]
fn test_tips() {
    let adapter = PerformanceAdapter::default();

    let good = PerformanceRecord::new(3, 2.0, 0.95, 0.8, 90.0);
    assert_eq!(adapter.tips_for(&good).as_slice(), &[ENCOURAGEMENT]);

    let sloppy = PerformanceRecord::new(3, 2.0, 0.5, 0.8, 60.0);
    assert_eq!(adapter.tips_for(&sloppy).as_slice(), &[ACCURACY_TIP]);
}

struct Failing;

impl LevelAdvisor for Failing {
    fn suggest_level(&self, _: &[PerformanceRecord], _: PlayerCategory) -> Result<u32, AdvisorError> {
        Err(AdvisorError::Unavailable("connection refused".into()))
    }
}

struct Eager;

impl LevelAdvisor for Eager {
    fn suggest_level(&self, _: &[PerformanceRecord], _: PlayerCategory) -> Result<u32, AdvisorError> {
        Ok(10)
    }
}

#[test]
fn test_advisor_fallback_and_guards() {
    let adapter = PerformanceAdapter::default();
    let history = vec![record(2, 60.0); 5];

    let rec = adapter.recommend_with_advisor(Some(&Failing), &history, PlayerCategory::Teen);
    assert_eq!(rec.source, RecommendationSource::Rules);
    assert_eq!(rec.level, adapter.recommend_level(&history, PlayerCategory::Teen));

    // Advisor answer still moves one step at most.
    let rec = adapter.recommend_with_advisor(Some(&Eager), &history, PlayerCategory::Adult);
    assert_eq!(rec.source, RecommendationSource::Advisor);
    assert_eq!(rec.level, 3);
}

#[test]
fn test_adapter_from_settings() {
    let settings = Settings::from_toml_str(
        r#"
        [adapter.default_levels]
        child = 2
        teen = 2
        adult = 4
        "#,
    )
    .unwrap();

    let adapter = PerformanceAdapter::new(settings.adapter);
    assert_eq!(adapter.recommend_level(&[], PlayerCategory::Child), 2);
    assert_eq!(adapter.recommend_level(&[], PlayerCategory::Adult), 4);
}

fn arb_record() -> impl Strategy<Value = PerformanceRecord> {
    (MIN_LEVEL..=MAX_LEVEL, 0.0f64..20.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=100.0).prop_map(
        |(level, time, accuracy, combo, performance)| {
            PerformanceRecord::new(level, time, accuracy, combo, performance)
        },
    )
}

fn arb_category() -> impl Strategy<Value = PlayerCategory> {
    prop_oneof![
        Just(PlayerCategory::Child),
        Just(PlayerCategory::Teen),
        Just(PlayerCategory::Adult),
    ]
}

proptest! {
    #[test]
    fn prop_recommendation_bounded(
        history in prop::collection::vec(arb_record(), 1..15),
        category in arb_category(),
    ) {
        let adapter = PerformanceAdapter::default();
        let level = adapter.recommend_level(&history, category);
        let latest = history[0].difficulty_level;

        prop_assert!((MIN_LEVEL..=MAX_LEVEL).contains(&level));
        prop_assert!(level.abs_diff(latest) <= 1);
    }
}
