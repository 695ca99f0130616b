//! Session identity and the finished-round summary handed to persistence.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::metrics::PerformanceMetrics;
use super::state::SessionState;
use crate::adapt::PerformanceRecord;

/// Unique id for one engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// What the host stores once a round ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub level: u32,
    pub score: u64,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    /// Countdown seconds consumed.
    pub time_taken: u32,
    pub time_remaining: u32,
    pub max_combo: u32,
    pub is_won: bool,
    pub metrics: PerformanceMetrics,
}

impl SessionSummary {
    #[must_use]
    pub fn from_state(session_id: SessionId, state: &SessionState) -> Self {
        Self {
            session_id,
            level: state.level,
            score: state.score,
            matched_pairs: state.matched_pairs,
            total_pairs: state.total_pairs,
            time_taken: state.seconds_elapsed,
            time_remaining: state.seconds_remaining,
            max_combo: state.max_combo,
            is_won: state.is_won,
            metrics: PerformanceMetrics::from_state(state),
        }
    }

    /// History entry for the adapter.
    #[must_use]
    pub fn to_record(&self) -> PerformanceRecord {
        PerformanceRecord::new(
            self.level,
            self.metrics.average_match_time,
            self.metrics.accuracy_rate,
            self.metrics.combo_frequency,
            self.metrics.performance_score,
        )
    }
}
