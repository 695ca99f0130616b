//! Recent-vs-previous trend classification.

use serde::{Deserialize, Serialize};

use super::config::AdapterConfig;
use super::record::PerformanceRecord;

/// Direction of recent performance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Result of `analyze_trend`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub trend: Trend,
    /// Mean performance score of the most recent window, if there was one.
    pub recent_average: Option<f64>,
    /// Mean performance score of the window before it.
    pub previous_average: Option<f64>,
    pub recommendation: String,
}

const NEED_MORE_DATA: &str = "Play a few more rounds so we can track your progress.";
const IMPROVING: &str = "You're improving fast! Try a harder level.";
const DECLINING: &str = "Scores dipped lately. An easier level can help you rebuild momentum.";
const STEADY: &str = "Your performance is steady. Keep practicing at this level.";

pub(crate) fn analyze(history: &[PerformanceRecord], config: &AdapterConfig) -> TrendAnalysis {
    let window = config.trend_window.max(1);

    if history.len() < window {
        return insufficient(None);
    }

    let recent = mean_score(&history[..window]);
    let previous_end = history.len().min(window * 2);
    if previous_end == window {
        return insufficient(Some(recent));
    }
    let previous = mean_score(&history[window..previous_end]);

    let delta = recent - previous;
    let (trend, recommendation) = if delta > config.trend_threshold {
        (Trend::Up, IMPROVING)
    } else if delta < -config.trend_threshold {
        (Trend::Down, DECLINING)
    } else {
        (Trend::Stable, STEADY)
    };

    TrendAnalysis {
        trend,
        recent_average: Some(recent),
        previous_average: Some(previous),
        recommendation: recommendation.to_string(),
    }
}

fn insufficient(recent_average: Option<f64>) -> TrendAnalysis {
    TrendAnalysis {
        trend: Trend::Stable,
        recent_average,
        previous_average: None,
        recommendation: NEED_MORE_DATA.to_string(),
    }
}

fn mean_score(records: &[PerformanceRecord]) -> f64 {
    records.iter().map(|r| r.performance_score).sum::<f64>() / records.len() as f64
}
