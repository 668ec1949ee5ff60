use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket captured when a refresh starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Orders overlapping refreshes so a slow response for an older ticket never
/// overwrites a value that came from a newer one.
///
/// Starting a refresh does not invalidate the ones already in flight; a
/// result is dropped only when a newer ticket has already been applied.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Generation {
        Generation(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Mark `ticket` applied; `false` when a newer ticket got there first
    pub fn try_apply(&self, ticket: Generation) -> bool {
        self.applied.fetch_max(ticket.0, Ordering::AcqRel) < ticket.0
    }
}
