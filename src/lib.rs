//! # memory-match
//!
//! Core of a card-matching ("memory") game: a timed session engine plus an
//! adaptive difficulty system.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: `SessionState` is a value. Every accepted
//!    event produces a new one; callers only ever see clones (O(1) via `im`).
//!
//! 2. **Pure Rules, Thin Engine**: `session::transition` holds every gameplay
//!    rule and returns timer commands. `CardMatchEngine` just runs them.
//!
//! 3. **Virtual Time**: Countdown ticks and mismatch unflips live on a
//!    cancellable scheduler the host advances, so timing is deterministic.
//!
//! 4. **Silent No-ops**: Gameplay input never errors. Only construction,
//!    settings, and replay decoding return `Err`.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, engine configuration, TOML settings
//! - `cards`: Card ids, playable items, deck construction
//! - `curve`: Level -> round configuration
//! - `rewards`: Reward points and unlock verdicts
//! - `adapt`: Level recommendation, trend analysis, tips
//! - `session`: Session state, transition function, scheduler, engine
//! - `host`: Catalog and history seams plus the round planner

pub mod adapt;
pub mod cards;
pub mod core;
pub mod curve;
pub mod host;
pub mod rewards;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, GameRngState, MatchError, Result, Settings};

pub use crate::cards::{Card, CardFace, CardId, ContentRef, PairId, PlayableItem};

pub use crate::curve::{DifficultyCurve, DifficultyTier, LayoutKind, RoundConfig};

pub use crate::rewards::{RewardCalculator, RoundReward};

pub use crate::adapt::{
    AdapterConfig, LevelAdvisor, PerformanceAdapter, PerformanceRecord, PlayerCategory,
    Recommendation, Trend, TrendAnalysis,
};

pub use crate::session::{
    CardMatchEngine, GridSize, PerformanceMetrics, ReplayLog, SessionEvent, SessionId,
    SessionState, SessionSummary,
};

pub use crate::host::{HistoryStore, InMemoryHistory, ItemCatalog, RoundPlanner};
