//! One card-matching session: state, rules, timers, and the engine.
//!
//! ## Key Components
//!
//! - [`SessionState`]: Immutable snapshot, replaced on every accepted event
//! - [`transition()`]: Pure rules; returns the next state plus timer commands
//! - [`Scheduler`]: Virtual-clock task queue for ticks and delayed unflips
//! - [`CardMatchEngine`]: Owns a session and drives the above
//! - [`ReplayLog`]: Accepted events, replayable to the same final state
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::cards::PlayableItem;
//! use memory_match::core::EngineConfig;
//! use memory_match::session::{CardMatchEngine, GridSize};
//!
//! let items: Vec<_> = (0..8)
//!     .map(|i| PlayableItem::new(format!("{i}.png"), format!("item {i}")))
//!     .collect();
//!
//! let mut engine = CardMatchEngine::builder(items)
//!     .grid(GridSize::new(4, 4))
//!     .time_limit(120)
//!     .level(1)
//!     .config(EngineConfig::default().with_seed(7))
//!     .build()
//!     .unwrap();
//!
//! let updates = engine.subscribe();
//! engine.start_timer();
//! engine.advance(Duration::from_secs(3));
//!
//! assert_eq!(engine.state().seconds_remaining, 117);
//! assert_eq!(updates.try_iter().count(), 4);
//! ```

mod engine;
mod event;
mod metrics;
mod replay;
mod scheduler;
mod state;
mod summary;
mod transition;

pub use engine::{CardMatchEngine, CardMatchEngineBuilder};
pub use event::{Command, Outcome, SessionEvent, Transition};
pub use metrics::PerformanceMetrics;
pub use replay::{replay, ReplayLog, TimedEvent};
pub use scheduler::{Scheduler, TaskHandle, TaskKind};
pub use state::{GridSize, PendingMismatch, SessionState, MAX_CARDS};
pub use summary::{SessionId, SessionSummary};
pub use transition::{match_score, transition};
