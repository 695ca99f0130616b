//! Inputs to and outputs of the session transition function.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::state::SessionState;
use crate::cards::CardId;

/// Everything that can change a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    StartTimer,
    Flip(CardId),
    /// One countdown second elapsed.
    Tick,
    Pause,
    Resume,
    /// A scheduled mismatch unflip fired.
    UnflipDue { generation: u64 },
}

/// Side effects the engine must carry out after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    StartTicking,
    StopTicking,
    ScheduleUnflip { generation: u64 },
    CancelUnflip,
}

/// What an accepted event did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    TimerStarted,
    FirstPick(CardId),
    Matched { gained: u64, match_seconds: f64 },
    Mismatched,
    Won { gained: u64 },
    Unflipped,
    Ticked,
    TimedOut,
    Paused,
    Resumed,
}

/// Result of an accepted event: the replacement state plus commands.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: SessionState,
    pub outcome: Outcome,
    pub commands: SmallVec<[Command; 2]>,
}

impl Transition {
    pub(crate) fn new(state: SessionState, outcome: Outcome) -> Self {
        Self {
            state,
            outcome,
            commands: SmallVec::new(),
        }
    }

    #[must_use]
    pub(crate) fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }
}
