//! Adaptive difficulty from a player's recent rounds.
//!
//! ## Key Components
//!
//! - [`PerformanceAdapter`]: Level recommendation, trend analysis, tips
//! - [`PerformanceRecord`]: One finished round, as stored by the host
//! - [`AdapterConfig`]: Every threshold the adapter uses
//! - [`LevelAdvisor`]: Optional remote recommender with rule-based fallback
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::adapt::{PerformanceAdapter, PerformanceRecord, PlayerCategory, Trend};
//!
//! let adapter = PerformanceAdapter::default();
//!
//! let history = vec![PerformanceRecord::new(4, 1.5, 0.95, 0.9, 95.0); 10];
//! assert_eq!(adapter.recommend_level(&history, PlayerCategory::Adult), 5);
//!
//! let trend = adapter.analyze_trend(&history[..2]);
//! assert_eq!(trend.trend, Trend::Stable);
//! ```

mod adapter;
mod advisor;
mod config;
mod record;
mod tips;
mod trend;

pub use adapter::{PerformanceAdapter, WindowAverages, MAX_LEVEL, MIN_LEVEL};
pub use advisor::{AdvisorError, LevelAdvisor, Recommendation, RecommendationSource};
pub use config::{AdapterConfig, CategoryLimits, TierThreshold, TipThresholds};
pub use record::{PerformanceRecord, PlayerCategory};
pub use tips::{Tips, ACCURACY_TIP, COMBO_TIP, ENCOURAGEMENT, SPEED_TIP};
pub use trend::{Trend, TrendAnalysis};
