//! Short coaching tips derived from one round.

use smallvec::SmallVec;

use super::config::TipThresholds;
use super::record::PerformanceRecord;

/// Ordered tips; at most one per gate.
pub type Tips = SmallVec<[&'static str; 3]>;

pub const SPEED_TIP: &str = "Try to remember where cards were from earlier flips to match faster.";
pub const ACCURACY_TIP: &str = "Take a moment to study the board before flipping.";
pub const COMBO_TIP: &str = "Chain matches back to back to build combos and multiply your score.";
pub const ENCOURAGEMENT: &str = "Great job! Keep up the excellent work.";

pub(crate) fn tips_for(record: &PerformanceRecord, thresholds: &TipThresholds) -> Tips {
    let mut tips = Tips::new();

    if record.average_match_time_seconds > thresholds.slow_match_time {
        tips.push(SPEED_TIP);
    }
    if record.accuracy_rate < thresholds.low_accuracy {
        tips.push(ACCURACY_TIP);
    }
    if record.combo_frequency < thresholds.low_combo_frequency {
        tips.push(COMBO_TIP);
    }

    if tips.is_empty() {
        tips.push(ENCOURAGEMENT);
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_gates() {
        let record = PerformanceRecord::new(1, 8.0, 0.4, 0.1, 20.0);
        let tips = tips_for(&record, &TipThresholds::default());
        assert_eq!(tips.as_slice(), &[SPEED_TIP, ACCURACY_TIP, COMBO_TIP]);
    }

    #[test]
    fn test_single_gate() {
        let record = PerformanceRecord::new(1, 2.0, 0.5, 0.8, 60.0);
        let tips = tips_for(&record, &TipThresholds::default());
        assert_eq!(tips.as_slice(), &[ACCURACY_TIP]);
    }

    #[test]
    fn test_fallback() {
        let record = PerformanceRecord::new(3, 1.5, 0.95, 0.9, 95.0);
        let tips = tips_for(&record, &TipThresholds::default());
        assert_eq!(tips.as_slice(), &[ENCOURAGEMENT]);
    }

    #[test]
    fn test_boundaries_do_not_trigger() {
        let record = PerformanceRecord::new(1, 5.0, 0.7, 0.3, 50.0);
        let tips = tips_for(&record, &TipThresholds::default());
        assert_eq!(tips.as_slice(), &[ENCOURAGEMENT]);
    }
}
