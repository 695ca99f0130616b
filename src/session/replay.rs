//! Event log and deterministic replay.
//!
//! The engine records every accepted event with its virtual timestamp.
//! Folding the log over the initial state with [`transition()`] reproduces
//! the final state exactly.

use serde::{Deserialize, Serialize};

use super::event::SessionEvent;
use super::state::SessionState;
use super::transition::transition;
use crate::core::Result;

/// One accepted event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub at_ms: u64,
    pub event: SessionEvent,
}

/// Ordered accepted events of one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayLog {
    events: Vec<TimedEvent>,
}

impl ReplayLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, at_ms: u64, event: SessionEvent) {
        self.events.push(TimedEvent { at_ms, event });
    }

    #[must_use]
    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Re-apply `log` to `initial`. Events that are no-ops are skipped.
#[must_use]
pub fn replay(initial: &SessionState, log: &ReplayLog) -> SessionState {
    log.events().iter().fold(initial.clone(), |state, timed| {
        transition(&state, timed.event, timed.at_ms).map_or(state, |t| t.state)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::MatchError;

    #[test]
    fn test_bytes_round_trip() {
        let mut log = ReplayLog::new();
        log.record(0, SessionEvent::StartTimer);
        log.record(1_200, SessionEvent::Flip(CardId::new(3)));
        log.record(2_200, SessionEvent::UnflipDue { generation: 1 });

        let bytes = log.to_bytes().unwrap();
        assert_eq!(ReplayLog::from_bytes(&bytes).unwrap(), log);
    }

    #[test]
    fn test_garbage_bytes() {
        let err = ReplayLog::from_bytes(&[0xff, 0xff]).unwrap_err();
        assert!(matches!(err, MatchError::Replay(_)));
    }
}
