//! Round planning: history → level → config → items → engine, and back.

use tracing::info;

use super::catalog::{CatalogQuery, ItemCatalog};
use super::history::HistoryStore;
use crate::adapt::{LevelAdvisor, PerformanceAdapter, PlayerCategory, Recommendation};
use crate::core::{EngineConfig, Result};
use crate::curve::{DifficultyCurve, RoundConfig};
use crate::rewards::{RewardCalculator, RoundReward};
use crate::session::{CardMatchEngine, SessionSummary};

/// A round ready to play.
pub struct PlannedRound {
    pub recommendation: Recommendation,
    pub round: RoundConfig,
    pub engine: CardMatchEngine,
}

/// What `finish` hands back to the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundResult {
    pub summary: SessionSummary,
    pub reward: RoundReward,
}

/// Drives one player's rounds against a catalog and a history store.
pub struct RoundPlanner<C, H> {
    catalog: C,
    history: H,
    adapter: PerformanceAdapter,
    curve: DifficultyCurve,
    rewards: RewardCalculator,
    engine_config: EngineConfig,
    advisor: Option<Box<dyn LevelAdvisor>>,
}

impl<C: ItemCatalog, H: HistoryStore> RoundPlanner<C, H> {
    pub fn new(catalog: C, history: H) -> Self {
        Self {
            catalog,
            history,
            adapter: PerformanceAdapter::default(),
            curve: DifficultyCurve::new(),
            rewards: RewardCalculator::new(),
            engine_config: EngineConfig::default(),
            advisor: None,
        }
    }

    #[must_use]
    pub fn with_adapter(mut self, adapter: PerformanceAdapter) -> Self {
        self.adapter = adapter;
        self
    }

    #[must_use]
    pub fn with_engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    #[must_use]
    pub fn with_advisor(mut self, advisor: Box<dyn LevelAdvisor>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn adapter(&self) -> &PerformanceAdapter {
        &self.adapter
    }

    /// Pick a level for `category` and build its engine.
    ///
    /// `item_category` narrows the catalog query (animals, flags, ...).
    pub fn plan(&self, category: PlayerCategory, item_category: Option<&str>) -> Result<PlannedRound> {
        let history = self.history.recent(self.adapter.config().history_window);
        let recommendation = self
            .adapter
            .recommend_with_advisor(self.advisor.as_deref(), &history, category);
        let round = self.curve.config_for(recommendation.level);

        let query = CatalogQuery {
            category: item_category.map(String::from),
            player_category: category,
            level: round.level,
            similarity_threshold: round.similarity_threshold,
            limit: round.pair_count as usize,
        };
        let items = self.catalog.items(&query);

        let engine = CardMatchEngine::builder(items)
            .round(&round)
            .config(self.engine_config.clone())
            .build()?;

        info!(
            session = %engine.id(),
            level = round.level,
            tier = %round.tier,
            source = ?recommendation.source,
            history = history.len(),
            "round planned"
        );

        Ok(PlannedRound {
            recommendation,
            round,
            engine,
        })
    }

    /// Score a finished (or abandoned) round, store it, and shut the engine down.
    pub fn finish(&mut self, engine: &mut CardMatchEngine) -> RoundResult {
        let summary = engine.summary();
        let reward = self.rewards.evaluate(
            summary.level,
            summary.score,
            summary.time_remaining,
            summary.metrics.accuracy_rate,
        );

        engine.destroy();
        self.history.submit(summary.clone());

        info!(
            session = %summary.session_id,
            score = summary.score,
            points = reward.points,
            unlocked = reward.unlocks_next_level,
            "round finished"
        );

        RoundResult { summary, reward }
    }
}
