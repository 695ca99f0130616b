//! File-level settings: engine timing plus adapter thresholds.
//!
//! ```toml
//! [engine]
//! mismatch_delay_ms = 800
//! seed = 42
//!
//! [adapter]
//! history_window = 8
//! ```
//!
//! Every key is optional; missing keys take the tuned defaults.

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::error::{MatchError, Result};
use crate::adapt::AdapterConfig;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub adapter: AdapterConfig,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Render back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| MatchError::Settings(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.engine.tick_interval_ms == 0 {
            return Err(MatchError::Settings("tick_interval_ms must be positive".into()));
        }
        if self.adapter.history_window == 0 || self.adapter.trend_window == 0 {
            return Err(MatchError::Settings("adapter windows must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_toml_str(
            r#"
            [engine]
            mismatch_delay_ms = 800
            seed = 42

            [adapter]
            history_window = 8

            [adapter.ceilings]
            child = 2
            teen = 4
            adult = 5
            "#,
        )
        .unwrap();

        assert_eq!(settings.engine.mismatch_delay_ms, 800);
        assert_eq!(settings.engine.tick_interval_ms, 1_000);
        assert_eq!(settings.engine.seed, Some(42));
        assert_eq!(settings.adapter.history_window, 8);
        assert_eq!(settings.adapter.trend_window, 3);
        assert_eq!(settings.adapter.ceilings.child, 2);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Settings::from_toml_str("[engine]\nmismatch_delay_ms = \"soon\""),
            Err(MatchError::Settings(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("[engine]\ntick_interval_ms = 0"),
            Err(MatchError::Settings(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = Settings::default();
        let text = settings.to_toml_string().unwrap();
        assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
    }
}
