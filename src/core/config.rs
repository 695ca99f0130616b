//! Session engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and randomness parameters for a `CardMatchEngine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How long a mismatched pair stays face-up before flipping back (ms).
    pub mismatch_delay_ms: u64,

    /// Countdown tick period (ms). One tick removes one second.
    pub tick_interval_ms: u64,

    /// Shuffle seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mismatch_delay_ms: 1_000,
            tick_interval_ms: 1_000,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the mismatch unflip delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the tick period.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Fix the shuffle seed (tests, replays).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
