//! Core building blocks shared by every other module: RNG, errors, configuration.

pub mod config;
pub mod error;
pub mod rng;
pub mod settings;

pub use config::EngineConfig;
pub use error::{MatchError, Result};
pub use rng::{GameRng, GameRngState};
pub use settings::Settings;
