//! Error types for memory-match.

use thiserror::Error;

/// Result type alias using MatchError.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors raised while setting up a round.
///
/// Gameplay input (flips, pauses, ticks) never errors; invalid input is a
/// no-op. Only construction, configuration, and replay can fail.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("not enough playable items: need {required}, got {available}")]
    InsufficientContent { required: usize, available: usize },

    #[error("invalid grid {rows}x{cols}: card count must be even, non-zero, and at most 100")]
    InvalidGrid { rows: u32, cols: u32 },

    #[error("invalid difficulty level {0}")]
    InvalidLevel(u32),

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("replay log error: {0}")]
    Replay(String),
}

impl From<toml::de::Error> for MatchError {
    fn from(err: toml::de::Error) -> Self {
        MatchError::Settings(err.to_string())
    }
}

impl From<bincode::Error> for MatchError {
    fn from(err: bincode::Error) -> Self {
        MatchError::Replay(err.to_string())
    }
}
