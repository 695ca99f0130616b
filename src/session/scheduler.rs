//! Cancellable timers on a virtual millisecond clock.
//!
//! The engine never sleeps. The host advances the clock, and every task
//! whose deadline falls inside the advanced span fires in deadline order
//! (ties in scheduling order). Cancelling is immediate: a cancelled task
//! can never fire.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle returned when scheduling; used to cancel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskHandle(u64);

/// What a task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Countdown tick (repeating).
    Tick,
    /// Delayed mismatch reset (one-shot).
    Unflip { generation: u64 },
}

#[derive(Clone, Debug)]
struct ScheduledTask {
    kind: TaskKind,
    due_ms: u64,
    period_ms: Option<u64>,
}

/// Per-session task queue.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_handle: u64,
    tasks: FxHashMap<TaskHandle, ScheduledTask>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Fire once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, kind: TaskKind) -> TaskHandle {
        self.insert(kind, self.now_ms.saturating_add(delay_ms), None)
    }

    /// Fire every `period_ms`, first time one period from now.
    pub fn schedule_repeating(&mut self, period_ms: u64, kind: TaskKind) -> TaskHandle {
        let period_ms = period_ms.max(1);
        self.insert(kind, self.now_ms.saturating_add(period_ms), Some(period_ms))
    }

    /// Cancel a task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(&handle).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    #[must_use]
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Fire the earliest task due at or before `until_ms`.
    ///
    /// Moves the clock to that task's deadline. Repeating tasks are
    /// re-armed one period later; one-shots are removed.
    pub fn fire_next(&mut self, until_ms: u64) -> Option<(TaskHandle, TaskKind)> {
        let (&handle, _) = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due_ms <= until_ms)
            .min_by_key(|(handle, task)| (task.due_ms, **handle))?;

        let task = self.tasks.get_mut(&handle)?;
        self.now_ms = self.now_ms.max(task.due_ms);
        let kind = task.kind;
        let period = task.period_ms;

        match period {
            Some(period) => task.due_ms = task.due_ms.saturating_add(period),
            None => {
                self.tasks.remove(&handle);
            }
        }
        Some((handle, kind))
    }

    /// Move the clock to `until_ms` without firing anything.
    ///
    /// Call after draining `fire_next`.
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    fn insert(&mut self, kind: TaskKind, due_ms: u64, period_ms: Option<u64>) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.insert(handle, ScheduledTask { kind, due_ms, period_ms });
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut Scheduler, until: u64) -> Vec<(u64, TaskKind)> {
        let mut fired = Vec::new();
        while let Some((_, kind)) = s.fire_next(until) {
            fired.push((s.now_ms(), kind));
        }
        s.advance_to(until);
        fired
    }

    #[test]
    fn test_one_shot_fires_at_deadline() {
        let mut s = Scheduler::new();
        s.schedule_once(1_000, TaskKind::Unflip { generation: 1 });

        assert!(drain(&mut s, 999).is_empty());
        assert_eq!(drain(&mut s, 1_000), vec![(1_000, TaskKind::Unflip { generation: 1 })]);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn test_repeating() {
        let mut s = Scheduler::new();
        s.schedule_repeating(1_000, TaskKind::Tick);

        let fired = drain(&mut s, 3_500);
        assert_eq!(fired.len(), 3);
        assert_eq!(fired[2].0, 3_000);
        assert_eq!(s.now_ms(), 3_500);
        // Next tick still one period after the last one.
        assert_eq!(drain(&mut s, 4_000).len(), 1);
    }

    #[test]
    fn test_cancel() {
        let mut s = Scheduler::new();
        let h = s.schedule_once(500, TaskKind::Unflip { generation: 1 });
        assert!(s.is_scheduled(h));
        assert!(s.cancel(h));
        assert!(!s.cancel(h));
        assert!(drain(&mut s, 10_000).is_empty());
    }

    #[test]
    fn test_deadline_order() {
        let mut s = Scheduler::new();
        s.schedule_repeating(1_000, TaskKind::Tick);
        s.schedule_once(1_500, TaskKind::Unflip { generation: 4 });

        let fired: Vec<_> = drain(&mut s, 2_000).into_iter().map(|(_, k)| k).collect();
        assert_eq!(
            fired,
            vec![TaskKind::Tick, TaskKind::Unflip { generation: 4 }, TaskKind::Tick]
        );
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule_once(100, TaskKind::Unflip { generation: 2 });
        s.schedule_once(100, TaskKind::Unflip { generation: 1 });

        let fired: Vec<_> = drain(&mut s, 100).into_iter().map(|(_, k)| k).collect();
        assert_eq!(
            fired,
            vec![TaskKind::Unflip { generation: 2 }, TaskKind::Unflip { generation: 1 }]
        );
    }

    #[test]
    fn test_cancel_all() {
        let mut s = Scheduler::new();
        s.schedule_repeating(10, TaskKind::Tick);
        s.schedule_once(10, TaskKind::Unflip { generation: 1 });
        s.cancel_all();
        assert!(drain(&mut s, 1_000).is_empty());
    }
}
