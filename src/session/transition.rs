//! Pure session transition function.
//!
//! `transition(state, event, now_ms)` never mutates its input. It returns
//! `None` when the event is a no-op (paused, over, locked, unknown card,
//! card already face-up, stale unflip, ...), otherwise the replacement
//! state and the commands the engine must run.
//!
//! ## Match score
//!
//! ```text
//! base  = 100
//! base *= 1.5^(combo - 1)          if combo > 1
//! base += 10 * (3 - match_secs)    if match_secs < 3
//! gained = round(base * score_multiplier(level))
//! ```

use super::event::{Command, Outcome, SessionEvent, Transition};
use super::state::{PendingMismatch, SessionState};
use crate::cards::{CardFace, CardId};
use crate::curve::DifficultyCurve;

const BASE_MATCH_SCORE: f64 = 100.0;
const COMBO_FACTOR: f64 = 1.5;
const QUICK_MATCH_SECONDS: f64 = 3.0;
const QUICK_MATCH_BONUS_PER_SECOND: f64 = 10.0;

/// Apply one event at virtual time `now_ms`.
#[must_use]
pub fn transition(state: &SessionState, event: SessionEvent, now_ms: u64) -> Option<Transition> {
    if state.is_over {
        return None;
    }

    match event {
        SessionEvent::StartTimer => start_timer(state, now_ms),
        SessionEvent::Flip(id) => flip(state, id, now_ms),
        SessionEvent::Tick => tick(state),
        SessionEvent::Pause => pause(state),
        SessionEvent::Resume => resume(state, now_ms),
        SessionEvent::UnflipDue { generation } => unflip(state, generation),
    }
}

/// Points for one match.
#[must_use]
pub fn match_score(combo: u32, match_seconds: f64, multiplier: f64) -> u64 {
    let mut base = BASE_MATCH_SCORE;
    if combo > 1 {
        base *= COMBO_FACTOR.powi(combo as i32 - 1);
    }
    if match_seconds < QUICK_MATCH_SECONDS {
        base += QUICK_MATCH_BONUS_PER_SECOND * (QUICK_MATCH_SECONDS - match_seconds.max(0.0));
    }
    (base * multiplier).round().max(0.0) as u64
}

fn start_timer(state: &SessionState, now_ms: u64) -> Option<Transition> {
    if state.timer_started {
        return None;
    }

    let mut next = state.clone();
    next.timer_started = true;
    // Matches made before the timer keep timing from the last match.
    if state.match_times.is_empty() {
        next.match_anchor_ms = now_ms;
    }

    let t = Transition::new(next, Outcome::TimerStarted);
    Some(if state.is_paused { t } else { t.with_command(Command::StartTicking) })
}

fn flip(state: &SessionState, id: CardId, now_ms: u64) -> Option<Transition> {
    if state.is_paused || !state.can_flip() {
        return None;
    }

    let index = state.position(id)?;
    if !state.cards[index].is_hidden() {
        return None;
    }

    let mut next = state.clone();
    set_face(&mut next, index, CardFace::Flipped);

    let Some(first_id) = state.first_pick else {
        next.first_pick = Some(id);
        return Some(Transition::new(next, Outcome::FirstPick(id)));
    };

    next.first_pick = None;
    // The first pick is face-up and present, or the lock logic is broken.
    let first_index = state.position(first_id)?;

    if state.cards[first_index].pair_id == state.cards[index].pair_id {
        set_face(&mut next, first_index, CardFace::Matched);
        set_face(&mut next, index, CardFace::Matched);

        next.matched_pairs += 1;
        next.combo += 1;
        next.max_combo = next.max_combo.max(next.combo);

        let match_seconds = now_ms.saturating_sub(state.match_anchor_ms) as f64 / 1000.0;
        next.match_times.push_back(match_seconds);
        next.match_anchor_ms = now_ms;

        let multiplier = DifficultyCurve::new().score_multiplier(state.level);
        let gained = match_score(next.combo, match_seconds, multiplier);
        next.score = next.score.saturating_add(gained);

        if next.matched_pairs >= next.total_pairs {
            next.is_over = true;
            next.is_won = true;
            return Some(Transition::new(next, Outcome::Won { gained }).with_command(Command::StopTicking));
        }

        return Some(Transition::new(next, Outcome::Matched { gained, match_seconds }));
    }

    next.combo = 0;
    next.unflip_generation = state.unflip_generation + 1;
    next.pending_mismatch = Some(PendingMismatch {
        first: first_id,
        second: id,
        generation: next.unflip_generation,
    });

    let generation = next.unflip_generation;
    Some(Transition::new(next, Outcome::Mismatched).with_command(Command::ScheduleUnflip { generation }))
}

fn tick(state: &SessionState) -> Option<Transition> {
    if !state.is_ticking() {
        return None;
    }

    let mut next = state.clone();
    next.seconds_remaining = state.seconds_remaining.saturating_sub(1);
    next.seconds_elapsed = state.seconds_elapsed + 1;

    if next.seconds_remaining == 0 {
        next.is_over = true;
        next.is_won = false;
        return Some(
            Transition::new(next, Outcome::TimedOut)
                .with_command(Command::StopTicking)
                .with_command(Command::CancelUnflip),
        );
    }

    Some(Transition::new(next, Outcome::Ticked))
}

fn pause(state: &SessionState) -> Option<Transition> {
    if state.is_paused {
        return None;
    }

    let mut next = state.clone();
    next.is_paused = true;
    Some(Transition::new(next, Outcome::Paused).with_command(Command::StopTicking))
}

fn resume(state: &SessionState, now_ms: u64) -> Option<Transition> {
    if !state.is_paused {
        return None;
    }

    let mut next = state.clone();
    next.is_paused = false;
    // Paused time must not count toward the next match time.
    next.match_anchor_ms = now_ms;

    let started = next.timer_started;
    let t = Transition::new(next, Outcome::Resumed);
    Some(if started { t.with_command(Command::StartTicking) } else { t })
}

fn unflip(state: &SessionState, generation: u64) -> Option<Transition> {
    let pending = state.pending_mismatch.filter(|p| p.generation == generation)?;

    let mut next = state.clone();
    for id in [pending.first, pending.second] {
        if let Some(index) = state.position(id) {
            set_face(&mut next, index, CardFace::Hidden);
        }
    }
    next.pending_mismatch = None;
    Some(Transition::new(next, Outcome::Unflipped))
}

fn set_face(state: &mut SessionState, index: usize, face: CardFace) {
    let mut card = state.cards[index].clone();
    card.face = face;
    state.cards.set(index, card);
}
