//! Finished-round persistence seam.

use std::collections::VecDeque;

use crate::adapt::PerformanceRecord;
use crate::session::SessionSummary;

/// Where finished rounds go, and where the adapter's history comes from.
pub trait HistoryStore {
    /// Up to `limit` records, most recent first.
    fn recent(&self, limit: usize) -> Vec<PerformanceRecord>;

    fn submit(&mut self, summary: SessionSummary);
}

/// Bounded in-memory store. Oldest summaries are dropped past `capacity`.
#[derive(Clone, Debug)]
pub struct InMemoryHistory {
    summaries: VecDeque<SessionSummary>,
    capacity: usize,
}

impl InMemoryHistory {
    pub const DEFAULT_CAPACITY: usize = 100;

    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            summaries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Stored summaries, most recent first.
    pub fn summaries(&self) -> impl Iterator<Item = &SessionSummary> {
        self.summaries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for InMemoryHistory {
    fn recent(&self, limit: usize) -> Vec<PerformanceRecord> {
        self.summaries.iter().take(limit).map(SessionSummary::to_record).collect()
    }

    fn submit(&mut self, summary: SessionSummary) {
        self.summaries.push_front(summary);
        self.summaries.truncate(self.capacity);
    }
}
