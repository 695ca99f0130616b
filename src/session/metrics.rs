//! Derived performance metrics for a session.

use serde::{Deserialize, Serialize};

use super::state::SessionState;

/// Speed, accuracy, and combo figures plus their blend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Mean seconds per match; 0 with no matches.
    pub average_match_time: f64,
    /// `matched_pairs / total_pairs`.
    pub accuracy_rate: f64,
    /// `max_combo / max(matched_pairs, 1)`.
    pub combo_frequency: f64,
    /// Mean of speed score, accuracy and combo frequency, each on 0-100.
    pub performance_score: f64,
}

impl PerformanceMetrics {
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        let times = state.match_times();
        let average_match_time = if times.is_empty() {
            0.0
        } else {
            times.iter().sum::<f64>() / times.len() as f64
        };

        let accuracy_rate = if state.total_pairs == 0 {
            0.0
        } else {
            f64::from(state.matched_pairs) / f64::from(state.total_pairs)
        };

        let combo_frequency = f64::from(state.max_combo) / f64::from(state.matched_pairs.max(1));

        let speed_score = (100.0 - 10.0 * average_match_time).max(0.0);
        let performance_score = (speed_score + accuracy_rate * 100.0 + combo_frequency * 100.0) / 3.0;

        Self {
            average_match_time,
            accuracy_rate,
            combo_frequency,
            performance_score,
        }
    }
}
