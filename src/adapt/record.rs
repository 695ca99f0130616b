//! Performance history inputs.

use serde::{Deserialize, Serialize};

/// Summary of one finished round.
///
/// Supplied by the persistence collaborator, most recent first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub difficulty_level: u32,
    pub average_match_time_seconds: f64,
    /// In `[0, 1]`.
    pub accuracy_rate: f64,
    /// In `[0, 1]`.
    pub combo_frequency: f64,
    /// In `[0, 100]`.
    pub performance_score: f64,
}

impl PerformanceRecord {
    pub fn new(
        difficulty_level: u32,
        average_match_time_seconds: f64,
        accuracy_rate: f64,
        combo_frequency: f64,
        performance_score: f64,
    ) -> Self {
        Self {
            difficulty_level,
            average_match_time_seconds,
            accuracy_rate,
            combo_frequency,
            performance_score,
        }
    }
}

/// Player category, from most to least restricted.
///
/// Seeds the first-round level and caps how far recommendations can go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerCategory {
    Child,
    Teen,
    #[default]
    Adult,
}
