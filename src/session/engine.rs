//! `CardMatchEngine`: owns one live session.
//!
//! The engine is a thin shell around [`transition()`]: it holds the current
//! `SessionState`, feeds it events, swaps in the returned state, runs the
//! returned commands against its [`Scheduler`], and pushes a snapshot to
//! every subscriber.
//!
//! ## Time
//!
//! Time is virtual. The host calls [`CardMatchEngine::advance`] with the
//! wall time that passed; countdown ticks and mismatch unflips fire from
//! inside that call, in deadline order.

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, info, warn};

use super::event::{Command, Outcome, SessionEvent};
use super::metrics::PerformanceMetrics;
use super::replay::ReplayLog;
use super::scheduler::{Scheduler, TaskHandle, TaskKind};
use super::state::{GridSize, SessionState};
use super::summary::{SessionId, SessionSummary};
use super::transition::transition;
use crate::cards::{build_deck, CardId, PlayableItem};
use crate::core::{EngineConfig, GameRng, MatchError, Result};
use crate::curve::{DifficultyCurve, RoundConfig};

/// Builder for a `CardMatchEngine`.
///
/// Grid and time limit default to the difficulty curve's values for the
/// chosen level.
pub struct CardMatchEngineBuilder {
    items: Vec<PlayableItem>,
    grid: Option<GridSize>,
    time_limit_seconds: Option<u32>,
    level: u32,
    config: EngineConfig,
}

impl CardMatchEngineBuilder {
    fn new(items: Vec<PlayableItem>) -> Self {
        Self {
            items,
            grid: None,
            time_limit_seconds: None,
            level: 1,
            config: EngineConfig::default(),
        }
    }

    pub fn grid(mut self, grid: GridSize) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn time_limit(mut self, seconds: u32) -> Self {
        self.time_limit_seconds = Some(seconds);
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Take grid, time limit and level from a resolved round.
    pub fn round(self, round: &RoundConfig) -> Self {
        self.grid(round.grid())
            .time_limit(round.time_limit_seconds)
            .level(round.level)
    }

    /// Validate inputs, shuffle the deck, and create the session.
    pub fn build(self) -> Result<CardMatchEngine> {
        if self.level == 0 {
            return Err(MatchError::InvalidLevel(self.level));
        }

        let defaults = DifficultyCurve::new().config_for(self.level);
        let grid = self.grid.unwrap_or_else(|| defaults.grid()).validate()?;
        let time_limit = self.time_limit_seconds.unwrap_or(defaults.time_limit_seconds);

        let mut rng = GameRng::from_seed_or_entropy(self.config.seed).for_context("deck");
        let deck = build_deck(&self.items, grid.pair_count() as usize, &mut rng)?;
        let state = SessionState::new(deck, self.level, time_limit);
        let id = SessionId::new();

        info!(
            session = %id,
            level = self.level,
            pairs = state.total_pairs,
            time_limit,
            seed = rng.seed(),
            "session created"
        );

        Ok(CardMatchEngine {
            id,
            initial: state.clone(),
            state,
            items: self.items,
            grid,
            time_limit,
            config: self.config,
            rng,
            scheduler: Scheduler::new(),
            tick_task: None,
            unflip_task: None,
            observers: Vec::new(),
            log: ReplayLog::new(),
            destroyed: false,
        })
    }
}

/// One live matching session.
pub struct CardMatchEngine {
    id: SessionId,
    state: SessionState,
    initial: SessionState,
    items: Vec<PlayableItem>,
    grid: GridSize,
    time_limit: u32,
    config: EngineConfig,
    rng: GameRng,
    scheduler: Scheduler,
    tick_task: Option<TaskHandle>,
    unflip_task: Option<TaskHandle>,
    observers: Vec<Sender<SessionState>>,
    log: ReplayLog,
    destroyed: bool,
}

impl CardMatchEngine {
    /// Start building an engine over `items` (at least one per pair).
    pub fn builder(items: Vec<PlayableItem>) -> CardMatchEngineBuilder {
        CardMatchEngineBuilder::new(items)
    }

    /// Engine with default timing and an entropy-seeded shuffle.
    pub fn new(items: Vec<PlayableItem>, grid: GridSize, time_limit_seconds: u32, level: u32) -> Result<Self> {
        Self::builder(items)
            .grid(grid)
            .time_limit(time_limit_seconds)
            .level(level)
            .build()
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Read-only copy of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.clone()
    }

    /// State at construction (or last restart), for replays.
    #[must_use]
    pub fn initial_state(&self) -> &SessionState {
        &self.initial
    }

    #[must_use]
    pub fn replay_log(&self) -> &ReplayLog {
        &self.log
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Virtual time since construction (or last restart).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.scheduler.now_ms())
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Receive a snapshot after every accepted event.
    pub fn subscribe(&mut self) -> Receiver<SessionState> {
        let (tx, rx) = unbounded();
        if !self.destroyed {
            self.observers.push(tx);
        }
        rx
    }

    /// Turn a card face-up. Invalid flips are silent no-ops.
    pub fn flip(&mut self, card_id: CardId) -> SessionState {
        self.dispatch(SessionEvent::Flip(card_id));
        self.state()
    }

    /// Start the countdown. Has no effect once started.
    pub fn start_timer(&mut self) {
        self.dispatch(SessionEvent::StartTimer);
    }

    pub fn pause_game(&mut self) {
        self.dispatch(SessionEvent::Pause);
    }

    pub fn resume_game(&mut self) {
        self.dispatch(SessionEvent::Resume);
    }

    /// Let `elapsed` wall time pass, firing due ticks and unflips.
    pub fn advance(&mut self, elapsed: Duration) -> SessionState {
        if self.destroyed {
            return self.state();
        }

        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let until = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some((handle, kind)) = self.scheduler.fire_next(until) {
            match kind {
                TaskKind::Tick => self.dispatch(SessionEvent::Tick),
                TaskKind::Unflip { generation } => {
                    if self.unflip_task == Some(handle) {
                        self.unflip_task = None;
                    }
                    self.dispatch(SessionEvent::UnflipDue { generation });
                }
            }
        }
        self.scheduler.advance_to(until);
        self.state()
    }

    #[must_use]
    pub fn performance_metrics(&self) -> PerformanceMetrics {
        PerformanceMetrics::from_state(&self.state)
    }

    /// Summary for the persistence collaborator.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_state(self.id, &self.state)
    }

    /// Throw away the current round and deal a fresh deck from the same items.
    ///
    /// Outstanding timers are cancelled first, so nothing from the old
    /// round can fire into the new one.
    pub fn restart(&mut self) -> Result<()> {
        if self.destroyed {
            return Ok(());
        }

        self.cancel_all();
        let deck = build_deck(&self.items, self.grid.pair_count() as usize, &mut self.rng)?;
        let mut state = SessionState::new(deck, self.state.level, self.time_limit);
        // Keep generations unique across rounds.
        state.unflip_generation = self.state.unflip_generation + 1;

        self.scheduler = Scheduler::new();
        self.initial = state.clone();
        self.state = state;
        self.log.clear();

        info!(session = %self.id, level = self.state.level, "session restarted");
        self.emit();
        Ok(())
    }

    /// Cancel every timer and freeze the session. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.cancel_all();
        self.destroyed = true;
        self.observers.clear();
        info!(session = %self.id, score = self.state.score, "session destroyed");
    }

    fn dispatch(&mut self, event: SessionEvent) {
        if self.destroyed {
            return;
        }

        let now = self.scheduler.now_ms();
        let Some(t) = transition(&self.state, event, now) else {
            return;
        };

        self.log.record(now, event);
        self.trace(&t.outcome, &t.state);
        self.state = t.state;

        for command in t.commands {
            self.run(command);
        }
        self.emit();
    }

    fn run(&mut self, command: Command) {
        match command {
            Command::StartTicking => {
                if self.tick_task.is_none() {
                    let handle = self
                        .scheduler
                        .schedule_repeating(self.config.tick_interval_ms, TaskKind::Tick);
                    self.tick_task = Some(handle);
                }
            }
            Command::StopTicking => {
                if let Some(handle) = self.tick_task.take() {
                    self.scheduler.cancel(handle);
                }
            }
            Command::ScheduleUnflip { generation } => {
                if let Some(handle) = self.unflip_task.take() {
                    self.scheduler.cancel(handle);
                }
                let handle = self
                    .scheduler
                    .schedule_once(self.config.mismatch_delay_ms, TaskKind::Unflip { generation });
                self.unflip_task = Some(handle);
            }
            Command::CancelUnflip => {
                if let Some(handle) = self.unflip_task.take() {
                    self.scheduler.cancel(handle);
                }
            }
        }
    }

    fn cancel_all(&mut self) {
        self.scheduler.cancel_all();
        self.tick_task = None;
        self.unflip_task = None;
    }

    fn emit(&mut self) {
        let before = self.observers.len();
        let snapshot = &self.state;
        self.observers.retain(|tx| tx.send(snapshot.clone()).is_ok());

        let dropped = before - self.observers.len();
        if dropped > 0 {
            warn!(session = %self.id, dropped, "dropped disconnected observers");
        }
    }

    fn trace(&self, outcome: &Outcome, next: &SessionState) {
        match *outcome {
            Outcome::Matched { gained, match_seconds } => debug!(
                session = %self.id,
                gained,
                match_seconds,
                combo = next.combo,
                matched = next.matched_pairs,
                "pair matched"
            ),
            Outcome::Mismatched => debug!(session = %self.id, "pair mismatched"),
            Outcome::Unflipped => debug!(session = %self.id, "mismatched pair hidden"),
            Outcome::Won { gained } => info!(
                session = %self.id,
                gained,
                score = next.score,
                elapsed = next.seconds_elapsed,
                "session won"
            ),
            Outcome::TimedOut => info!(
                session = %self.id,
                score = next.score,
                matched = next.matched_pairs,
                total = next.total_pairs,
                "session timed out"
            ),
            Outcome::TimerStarted => debug!(session = %self.id, "timer started"),
            Outcome::Paused => debug!(session = %self.id, "paused"),
            Outcome::Resumed => debug!(session = %self.id, "resumed"),
            Outcome::FirstPick(_) | Outcome::Ticked => {}
        }
    }
}

impl Drop for CardMatchEngine {
    fn drop(&mut self) {
        self.destroy();
    }
}
