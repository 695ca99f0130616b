//! Rule-based level recommendation.

use tracing::{debug, warn};

use super::advisor::{AdvisorError, LevelAdvisor, Recommendation, RecommendationSource};
use super::config::AdapterConfig;
use super::record::{PerformanceRecord, PlayerCategory};
use super::tips::{self, Tips};
use super::trend::{self, TrendAnalysis};
use crate::curve::{DifficultyCurve, RoundConfig};

/// Lowest and highest levels the adapter ever recommends.
pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 5;

/// Means over the recent history window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowAverages {
    pub performance: f64,
    pub accuracy: f64,
    pub match_time: f64,
}

/// Picks the next difficulty level from a player's recent rounds.
///
/// Holds its own configuration, so differently tuned adapters can coexist.
#[derive(Clone, Debug, Default)]
pub struct PerformanceAdapter {
    config: AdapterConfig,
    curve: DifficultyCurve,
}

impl PerformanceAdapter {
    #[must_use]
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            config,
            curve: DifficultyCurve::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Recommend the next level. `history` is most recent first.
    ///
    /// 1. Empty history: the category's seed level.
    /// 2. Average the last `history_window` rounds.
    /// 3. Map the averages to the highest tier they fully satisfy.
    /// 4. Cap at the category ceiling.
    /// 5. Move at most one level away from the most recent round.
    /// 6. Clamp to `[1, 5]`.
    #[must_use]
    pub fn recommend_level(&self, history: &[PerformanceRecord], category: PlayerCategory) -> u32 {
        let Some(latest) = history.first() else {
            return self
                .config
                .default_levels
                .get(category)
                .clamp(MIN_LEVEL, MAX_LEVEL);
        };

        let averages = self.window_averages(history);
        let raw = self.raw_level(&averages);
        let capped = raw.min(self.config.ceilings.get(category));
        let level = step_toward(latest.difficulty_level, capped);

        debug!(
            raw,
            capped,
            level,
            previous = latest.difficulty_level,
            ?category,
            "recommended level"
        );
        level
    }

    /// Recommend a level and resolve its round config.
    #[must_use]
    pub fn recommend_round(&self, history: &[PerformanceRecord], category: PlayerCategory) -> RoundConfig {
        self.curve.config_for(self.recommend_level(history, category))
    }

    /// Ask `advisor` first, fall back to the rules on any failure.
    ///
    /// An advisor answer still goes through the category ceiling and the
    /// one-step progression guard.
    pub fn recommend_with_advisor(
        &self,
        advisor: Option<&dyn LevelAdvisor>,
        history: &[PerformanceRecord],
        category: PlayerCategory,
    ) -> Recommendation {
        let rules = || Recommendation {
            level: self.recommend_level(history, category),
            source: RecommendationSource::Rules,
        };

        let Some(advisor) = advisor else {
            return rules();
        };

        let suggested = advisor.suggest_level(history, category).and_then(|level| {
            if level == 0 {
                Err(AdvisorError::InvalidLevel(level))
            } else {
                Ok(level)
            }
        });

        match suggested {
            Ok(level) => {
                let capped = level.min(self.config.ceilings.get(category));
                let level = match history.first() {
                    Some(latest) => step_toward(latest.difficulty_level, capped),
                    None => capped.clamp(MIN_LEVEL, MAX_LEVEL),
                };
                Recommendation {
                    level,
                    source: RecommendationSource::Advisor,
                }
            }
            Err(err) => {
                warn!(error = %err, "level advisor failed, using rule-based recommendation");
                rules()
            }
        }
    }

    /// Compare the last `trend_window` rounds against the ones before.
    #[must_use]
    pub fn analyze_trend(&self, history: &[PerformanceRecord]) -> TrendAnalysis {
        trend::analyze(history, &self.config)
    }

    /// Coaching tips for one round.
    #[must_use]
    pub fn tips_for(&self, record: &PerformanceRecord) -> Tips {
        tips::tips_for(record, &self.config.tips)
    }

    /// Means over the most recent `history_window` records.
    ///
    /// Empty history yields all zeros.
    #[must_use]
    pub fn window_averages(&self, history: &[PerformanceRecord]) -> WindowAverages {
        let window = &history[..history.len().min(self.config.history_window.max(1))];
        if window.is_empty() {
            return WindowAverages { performance: 0.0, accuracy: 0.0, match_time: 0.0 };
        }

        let n = window.len() as f64;
        let (perf, acc, time) = window.iter().fold((0.0, 0.0, 0.0), |(p, a, t), r| {
            (
                p + r.performance_score,
                a + r.accuracy_rate,
                t + r.average_match_time_seconds,
            )
        });

        WindowAverages {
            performance: perf / n,
            accuracy: acc / n,
            match_time: time / n,
        }
    }

    fn raw_level(&self, averages: &WindowAverages) -> u32 {
        self.config
            .tiers
            .iter()
            .find(|tier| tier.admits(averages.performance, averages.accuracy, averages.match_time))
            .map_or(MIN_LEVEL, |tier| tier.level)
    }
}

/// Move from `previous` toward `target` by at most one level, inside `[1, 5]`.
fn step_toward(previous: u32, target: u32) -> u32 {
    let anchor = previous.clamp(MIN_LEVEL, MAX_LEVEL);
    let stepped = if target > anchor + 1 {
        anchor + 1
    } else if target + 1 < anchor {
        anchor - 1
    } else {
        target
    };
    stepped.clamp(MIN_LEVEL, MAX_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong(level: u32) -> PerformanceRecord {
        PerformanceRecord::new(level, 1.5, 0.95, 0.9, 95.0)
    }

    fn weak(level: u32) -> PerformanceRecord {
        PerformanceRecord::new(level, 9.0, 0.3, 0.1, 15.0)
    }

    #[test]
    fn test_empty_history_defaults() {
        let adapter = PerformanceAdapter::default();
        assert_eq!(adapter.recommend_level(&[], PlayerCategory::Child), 1);
        assert_eq!(adapter.recommend_level(&[], PlayerCategory::Teen), 3);
        assert_eq!(adapter.recommend_level(&[], PlayerCategory::Adult), 3);
    }

    #[test]
    fn test_strong_adult_reaches_top() {
        let adapter = PerformanceAdapter::default();
        let history = vec![strong(5); 10];
        assert_eq!(adapter.recommend_level(&history, PlayerCategory::Adult), 5);
    }

    #[test]
    fn test_ceiling_by_category() {
        let adapter = PerformanceAdapter::default();
        let history = vec![strong(3); 10];
        assert_eq!(adapter.recommend_level(&history, PlayerCategory::Child), 3);
        assert_eq!(adapter.recommend_level(&history, PlayerCategory::Teen), 4);
    }

    #[test]
    fn test_single_step_up() {
        let adapter = PerformanceAdapter::default();
        let history = vec![strong(1); 10];
        assert_eq!(adapter.recommend_level(&history, PlayerCategory::Adult), 2);
    }

    #[test]
    fn test_single_step_down() {
        let adapter = PerformanceAdapter::default();
        let history = vec![weak(5); 4];
        assert_eq!(adapter.recommend_level(&history, PlayerCategory::Adult), 4);
    }

    #[test]
    fn test_top_tier_needs_fast_matches() {
        let adapter = PerformanceAdapter::default();
        // High score and accuracy but slow matches: tier 4 at best.
        let history = vec![PerformanceRecord::new(4, 2.8, 0.95, 0.9, 95.0); 10];
        assert_eq!(adapter.recommend_level(&history, PlayerCategory::Adult), 4);
    }

    #[test]
    fn test_window_limits_history() {
        let adapter = PerformanceAdapter::default();
        let mut history = vec![strong(5); 10];
        history.extend(vec![weak(1); 20]);
        assert_eq!(adapter.recommend_level(&history, PlayerCategory::Adult), 5);
    }

    #[test]
    fn test_out_of_range_anchor() {
        let adapter = PerformanceAdapter::default();
        let history = vec![strong(9); 3];
        assert_eq!(adapter.recommend_level(&history, PlayerCategory::Adult), 5);
    }

    #[test]
    fn test_step_toward() {
        assert_eq!(step_toward(3, 5), 4);
        assert_eq!(step_toward(3, 4), 4);
        assert_eq!(step_toward(3, 1), 2);
        assert_eq!(step_toward(3, 3), 3);
        assert_eq!(step_toward(0, 5), 2);
    }

    #[test]
    fn test_recommend_round() {
        let adapter = PerformanceAdapter::default();
        let round = adapter.recommend_round(&[], PlayerCategory::Child);
        assert_eq!(round.level, 1);
    }

    struct Fixed(Result<u32, ()>);

    impl LevelAdvisor for Fixed {
        fn suggest_level(&self, _: &[PerformanceRecord], _: PlayerCategory) -> Result<u32, AdvisorError> {
            self.0.map_err(|()| AdvisorError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn test_no_advisor_uses_rules() {
        let adapter = PerformanceAdapter::default();
        let rec = adapter.recommend_with_advisor(None, &[], PlayerCategory::Teen);
        assert_eq!(rec, Recommendation { level: 3, source: RecommendationSource::Rules });
    }

    #[test]
    fn test_advisor_failure_falls_back() {
        let adapter = PerformanceAdapter::default();
        let history = vec![strong(5); 10];
        let rec = adapter.recommend_with_advisor(Some(&Fixed(Err(()))), &history, PlayerCategory::Adult);
        assert_eq!(rec, Recommendation { level: 5, source: RecommendationSource::Rules });
    }

    #[test]
    fn test_advisor_answer_is_guarded() {
        let adapter = PerformanceAdapter::default();
        let history = vec![weak(2); 3];
        let rec = adapter.recommend_with_advisor(Some(&Fixed(Ok(9))), &history, PlayerCategory::Adult);
        assert_eq!(rec, Recommendation { level: 3, source: RecommendationSource::Advisor });
    }

    #[test]
    fn test_advisor_zero_is_rejected() {
        let adapter = PerformanceAdapter::default();
        let rec = adapter.recommend_with_advisor(Some(&Fixed(Ok(0))), &[], PlayerCategory::Child);
        assert_eq!(rec.source, RecommendationSource::Rules);
    }
}
