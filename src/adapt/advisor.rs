//! Seam for an optional remote difficulty recommender.
//!
//! The rule-based adapter is always the fallback; an advisor is only
//! consulted when one is supplied, and any failure drops back to the rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::{PerformanceRecord, PlayerCategory};

/// Why an advisor could not answer.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),

    #[error("advisor returned an unusable level {0}")]
    InvalidLevel(u32),
}

/// A service that can suggest the next level.
///
/// Implementations wrap whatever transport they use; the adapter only
/// sees the answer or the error.
pub trait LevelAdvisor {
    fn suggest_level(
        &self,
        history: &[PerformanceRecord],
        category: PlayerCategory,
    ) -> Result<u32, AdvisorError>;
}

/// Where a recommendation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Advisor,
    Rules,
}

/// A level plus its provenance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub level: u32,
    pub source: RecommendationSource,
}
