//! One-shot reveal tracking for scroll animations.
//!
//! Targets are registered once at startup and only ever leave the pending
//! set. A target that has been revealed never produces another reveal, even
//! if the observer reports it again before unobserve takes effect.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

/// Index of an observed element, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(pub usize);

#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    total: usize,
    pending: BTreeSet<TargetId>,
}

impl RevealSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `count` more targets and return their ids.
    pub fn register(&mut self, count: usize) -> Vec<TargetId> {
        let ids = (self.total..self.total + count).map(TargetId).collect::<Vec<_>>();
        self.pending.extend(ids.iter().copied());
        self.total += count;
        ids
    }

    /// Handle an intersection report. Returns `true` exactly once per target:
    /// the first time it is reported as intersecting.
    pub fn on_intersection(&mut self, id: TargetId, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        self.pending.remove(&id)
    }

    #[must_use]
    pub fn is_pending(&self, id: TargetId) -> bool {
        self.pending.contains(&id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}
